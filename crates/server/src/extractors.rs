//! Request extractors resolving the session cookie into a user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use service::auth::domain::AuthUser;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// Authenticated user behind the request's session cookie.
///
/// Rejects with [`AppError::Unauthenticated`], which redirects to `/login`.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: AuthUser,
    pub session_id: Uuid,
}

/// Like [`CurrentUser`] but never rejects; public pages use it.
pub struct MaybeUser(pub Option<AuthUser>);

pub fn session_id(jar: &CookieJar, cookie_name: &str) -> Option<Uuid> {
    jar.get(cookie_name).and_then(|c| Uuid::parse_str(c.value()).ok())
}

async fn resolve(parts: &Parts, state: &AppState) -> Result<CurrentUser, AppError> {
    let jar = CookieJar::from_headers(&parts.headers);
    let session_id = session_id(&jar, &state.session.cookie_name).ok_or(AppError::Unauthenticated)?;
    let user_id = state.sessions.resolve(session_id).await.ok_or(AppError::Unauthenticated)?;

    match state.auth.resolve_user(user_id).await? {
        Some(user) => Ok(CurrentUser { user, session_id }),
        None => {
            debug!(user_id, "session points at a missing user, dropping it");
            state.sessions.destroy(session_id).await;
            Err(AppError::Unauthenticated)
        }
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve(parts, state).await
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        match resolve(parts, state).await {
            Ok(current) => Ok(MaybeUser(Some(current.user))),
            Err(AppError::Unauthenticated) => Ok(MaybeUser(None)),
            Err(e) => Err(e),
        }
    }
}
