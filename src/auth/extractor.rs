use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::jwt;
use crate::db;
use crate::error::AppError;
use crate::models::{Profile, User};
use crate::state::SharedState;

pub const SESSION_COOKIE: &str = "session";

/// The authenticated member, extracted from the session cookie.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl AuthUser {
    /// Load the user row plus its profile. The profile row is created at
    /// registration, so a missing one means the session is stale.
    pub async fn load(&self, pool: &PgPool) -> Result<(User, Profile), AppError> {
        let user = db::users::find_by_id(pool, self.user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Unknown user".to_string()))?;
        let profile = db::profiles::find_by_user(pool, self.user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Unknown user".to_string()))?;
        Ok((user, profile))
    }

    /// Capability gate for the map view: members without a recorded share
    /// may not see other members' leases.
    pub fn require_share(&self, profile: &Profile) -> Result<(), AppError> {
        if profile.share_received {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "A recorded share is required to view this page".to_string(),
            ))
        }
    }
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        if let Some(cookie) = jar.get(SESSION_COOKIE) {
            let claims = jwt::decode_token(cookie.value(), &state.config.jwt_secret)
                .map_err(|_| AppError::Unauthorized("Invalid or expired session".to_string()))?;
            return Ok(AuthUser { user_id: claims.sub });
        }

        Err(AppError::Unauthorized("Missing session".to_string()))
    }
}
