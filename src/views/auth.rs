use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::auth::extractor::SESSION_COOKIE;
use crate::auth::jwt::{self, Claims};
use crate::auth::password;
use crate::config::RegistrationMode;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    error: Option<String>,
}

#[derive(Template)]
#[template(path = "auth/register.html")]
struct RegisterTemplate {
    error: Option<String>,
    email: String,
    first_name: String,
    last_name: String,
}

#[derive(Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::hours(jwt::SESSION_HOURS))
        .build()
}

fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(time::Duration::ZERO)
        .build()
}

pub async fn login_page(State(state): State<SharedState>, jar: CookieJar) -> Response {
    // If already logged in, go straight to the landing page
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if jwt::decode_token(cookie.value(), &state.config.jwt_secret).is_ok() {
            return Redirect::to("/").into_response();
        }
    }

    let template = LoginTemplate { error: None };
    Html(template.render().unwrap_or_default()).into_response()
}

pub async fn login_submit(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let mut verified = None;
    if let Some(user) = db::users::find_by_email(&state.pool, form.email.trim()).await? {
        if password::verify(&form.password, &user.password_hash).map_err(AppError::Internal)? {
            verified = Some(user);
        }
    }

    let Some(user) = verified else {
        let template = LoginTemplate {
            error: Some("Invalid email or password.".to_string()),
        };
        return Ok(Html(template.render().unwrap_or_default()).into_response());
    };
    let token = jwt::encode_token(&Claims::new(user.id), &state.config.jwt_secret)
        .map_err(AppError::Internal)?;
    tracing::info!(user_id = %user.id, "Member logged in");

    Ok((jar.add(session_cookie(token)), Redirect::to("/")).into_response())
}

pub async fn register_page(State(state): State<SharedState>) -> Result<Response, AppError> {
    ensure_registration_open(&state)?;
    let template = RegisterTemplate {
        error: None,
        email: String::new(),
        first_name: String::new(),
        last_name: String::new(),
    };
    Ok(Html(template.render().unwrap_or_default()).into_response())
}

pub async fn register_submit(
    State(state): State<SharedState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    ensure_registration_open(&state)?;

    let email = form.email.trim().to_string();
    let rerender = |error: String| {
        let template = RegisterTemplate {
            error: Some(error),
            email: form.email.trim().to_string(),
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
        };
        Html(template.render().unwrap_or_default()).into_response()
    };

    if email.is_empty() || !email.contains('@') {
        return Ok(rerender("Enter a valid email address.".to_string()));
    }
    if form.password.len() < 8 {
        return Ok(rerender("Password must be at least 8 characters.".to_string()));
    }
    if db::users::find_by_email(&state.pool, &email).await?.is_some() {
        return Ok(rerender("An account with this email already exists.".to_string()));
    }

    let pw_hash = password::hash(&form.password).map_err(AppError::Internal)?;

    // User and its empty profile are created together; every authenticated
    // request may assume the profile row exists.
    let mut tx = state.pool.begin().await?;
    let user = db::users::create(
        &mut *tx,
        &email,
        &pw_hash,
        form.first_name.trim(),
        form.last_name.trim(),
    )
    .await?;
    db::profiles::create(&mut *tx, user.id).await?;
    tx.commit().await?;

    tracing::info!(user_id = %user.id, "Member registered");

    let token = jwt::encode_token(&Claims::new(user.id), &state.config.jwt_secret)
        .map_err(AppError::Internal)?;
    Ok((jar.add(session_cookie(token)), Redirect::to("/")).into_response())
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.add(clear_session_cookie()), Redirect::to("/auth/login"))
}

fn ensure_registration_open(state: &SharedState) -> Result<(), AppError> {
    if state.config.registration == RegistrationMode::Closed {
        return Err(AppError::Forbidden(
            "Registration is closed. Contact the secretary.".to_string(),
        ));
    }
    Ok(())
}
