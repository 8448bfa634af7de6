use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;

use crate::error::AppError;
use crate::notices::{flash, Notice};
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "home/mail_test.html")]
struct MailTestTemplate {
    smtp_configured: bool,
}

pub async fn page(State(state): State<SharedState>) -> impl IntoResponse {
    let template = MailTestTemplate {
        smtp_configured: state.mailer.is_some(),
    };
    Html(template.render().unwrap_or_default())
}

/// Send one fixed test message and bounce back to the landing page.
/// Transport failures are not swallowed.
pub async fn send(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let mailer = state
        .mailer
        .as_ref()
        .ok_or_else(|| AppError::BadRequest("SMTP is not configured".to_string()))?;
    let to = state
        .config
        .mail_test_to
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("No test recipient configured".to_string()))?;

    mailer.send_test(to).await.map_err(AppError::Internal)?;
    tracing::info!("Test mail sent to {to}");

    let jar = flash(jar, Notice::success("Test mail sent."));
    Ok((jar, Redirect::to("/")).into_response())
}
