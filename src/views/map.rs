use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum_extra::extract::CookieJar;
use chrono::Local;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::notices::{take_flash, Notice};
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "home/map.html")]
struct MapTemplate {
    notices: Vec<Notice>,
    leases: Vec<MapLease>,
}

struct MapLease {
    label: String,
    start_date: String,
    end_date: String,
}

pub async fn show(
    auth: AuthUser,
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AppError> {
    let (_, profile) = auth.load(&state.pool).await?;
    auth.require_share(&profile)?;

    let today = Local::now().date_naive();
    let leases = db::leases::list_active(&state.pool, today)
        .await?
        .into_iter()
        .map(|l| MapLease {
            label: l.label,
            start_date: l.start_date.format("%Y-%m-%d").to_string(),
            end_date: l.end_date.format("%Y-%m-%d").to_string(),
        })
        .collect();

    let (jar, notices) = take_flash(jar);
    let template = MapTemplate { notices, leases };
    Ok((jar, Html(template.render().unwrap_or_default())))
}
