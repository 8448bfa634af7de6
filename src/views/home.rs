use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::CookieJar;

use crate::auth::extractor::AuthUser;
use crate::checks;
use crate::error::AppError;
use crate::notices::{take_flash, Notice};
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "home/index.html")]
struct HomeTemplate {
    first_name: String,
    notices: Vec<Notice>,
}

pub async fn index(
    auth: AuthUser,
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (user, profile) = auth.load(&state.pool).await?;

    let (jar, mut notices) = take_flash(jar);
    checks::check_profile(&user, &profile, &mut notices);

    let template = HomeTemplate {
        first_name: user.first_name,
        notices,
    };
    Ok((jar, Html(template.render().unwrap_or_default())))
}
