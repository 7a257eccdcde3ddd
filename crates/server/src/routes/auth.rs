use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::NaiveDate;
use serde::Deserialize;
use service::auth::domain::{LoginInput, RegisterInput};
use service::auth::errors::AuthError;
use tera::Context;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extractors::{session_id, MaybeUser};
use crate::state::AppState;
use crate::templates::render;

#[derive(Debug, Default, Deserialize)]
pub struct Feedback {
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub birth_date: String,
}

fn blank_to_none(v: String) -> Option<String> {
    let v = v.trim();
    (!v.is_empty()).then(|| v.to_string())
}

impl RegisterForm {
    /// Blank optional fields become `None`; a malformed birth date is a validation error.
    fn into_input(self) -> Result<RegisterInput, AuthError> {
        let birth_date = match blank_to_none(self.birth_date) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| AuthError::Validation(format!("invalid birth date: {raw}")))?,
            ),
            None => None,
        };
        Ok(RegisterInput {
            name: self.name,
            email: self.email,
            password: self.password,
            phone: blank_to_none(self.phone),
            address: blank_to_none(self.address),
            birth_date,
        })
    }
}

fn feedback_message(page: &str, code: Option<&str>) -> Option<&'static str> {
    match (page, code?) {
        ("login", "invalid") => Some("Invalid email or password."),
        ("register", "exists") => Some("An account with this email already exists."),
        ("register", "invalid") => Some("Please check the form: a valid email, a name and a password of at least 8 characters are required."),
        _ => None,
    }
}

fn form_page(state: &AppState, page: &str, user: Option<service::auth::domain::AuthUser>, fb: Feedback) -> Result<Html<String>, AppError> {
    let mut ctx = Context::new();
    ctx.insert("user", &user);
    ctx.insert("message", &feedback_message(page, fb.error.as_deref()));
    render(&state.templates, &format!("{page}.html"), &ctx)
}

pub async fn login_page(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Query(fb): Query<Feedback>,
) -> Result<Html<String>, AppError> {
    form_page(&state, "login", user, fb)
}

pub async fn register_page(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Query(fb): Query<Feedback>,
) -> Result<Html<String>, AppError> {
    form_page(&state, "register", user, fb)
}

pub async fn login(State(state): State<AppState>, jar: CookieJar, Form(form): Form<LoginForm>) -> Result<Response, AppError> {
    let input = LoginInput { email: form.email, password: form.password };
    let user = match state.auth.login(input).await {
        Ok(user) => user,
        Err(e) if e.is_client_error() => {
            debug!(code = e.code(), "login rejected");
            return Ok(Redirect::to("/login?error=invalid").into_response());
        }
        Err(e) => return Err(e.into()),
    };

    let purged = state.sessions.purge_expired().await;
    if purged > 0 {
        debug!(purged, "expired sessions purged");
    }
    let id = state.sessions.create(user.id).await;

    let mut cookie = Cookie::new(state.session.cookie_name.clone(), id.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(state.session.secure_cookie);
    cookie.set_same_site(SameSite::Lax);

    Ok((jar.add(cookie), Redirect::to("/dashboard")).into_response())
}

pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Result<Response, AppError> {
    let result = match form.into_input() {
        Ok(input) => state.auth.register(input).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(_) => Ok(Redirect::to("/login").into_response()),
        Err(AuthError::Conflict) => Ok(Redirect::to("/register?error=exists").into_response()),
        Err(e @ AuthError::Validation(_)) => {
            debug!(error = %e, "registration rejected");
            Ok(Redirect::to("/register?error=invalid").into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Destroy the server-side session and clear the cookie; safe to call without one.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Redirect) {
    if let Some(id) = session_id(&jar, &state.session.cookie_name) {
        if state.sessions.destroy(id).await {
            info!("user_logged_out");
        }
    }
    let jar = jar.remove(Cookie::build((state.session.cookie_name.clone(), "")).path("/"));
    (jar, Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(birth_date: &str) -> RegisterForm {
        RegisterForm {
            name: "Anna".into(),
            email: "anna@example.com".into(),
            password: "Passw0rd!".into(),
            phone: "  ".into(),
            address: " Via Roma 1 ".into(),
            birth_date: birth_date.into(),
        }
    }

    #[test]
    fn blank_optionals_become_none() {
        let input = form("").into_input().unwrap();
        assert_eq!(input.phone, None);
        assert_eq!(input.address.as_deref(), Some("Via Roma 1"));
        assert_eq!(input.birth_date, None);
    }

    #[test]
    fn birth_date_must_be_iso() {
        let input = form("1990-05-17").into_input().unwrap();
        assert_eq!(input.birth_date, NaiveDate::from_ymd_opt(1990, 5, 17));
        assert!(matches!(form("17/05/1990").into_input(), Err(AuthError::Validation(_))));
    }

    #[test]
    fn feedback_only_for_known_codes() {
        assert!(feedback_message("login", Some("invalid")).is_some());
        assert!(feedback_message("register", Some("exists")).is_some());
        assert!(feedback_message("login", Some("exists")).is_none());
        assert!(feedback_message("register", None).is_none());
    }
}
