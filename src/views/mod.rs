pub mod auth;
pub mod home;
pub mod mail;
pub mod map;
pub mod profile;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        // Home
        .route("/", get(home::index))
        .route("/mail-test", get(mail::page).post(mail::send))
        // Account
        .route("/profile", get(profile::show).post(profile::update_wgs))
        .route("/profile/edit", get(profile::edit_page).post(profile::edit_submit))
        .route("/map", get(map::show))
        // Auth
        .route("/auth/login", get(auth::login_page).post(auth::login_submit))
        .route("/auth/register", get(auth::register_page).post(auth::register_submit))
        .route("/auth/logout", post(auth::logout))
}
