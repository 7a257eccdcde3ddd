#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use configs::SessionConfig;
use migration::{Migrator, MigratorTrait};
use tower::ServiceExt;

pub const PASSWORD: &str = "S3curePass!";

/// Router over a fresh, migrated and seeded in-memory database.
pub async fn app() -> anyhow::Result<Router> {
    let db = models::db::connect_memory().await?;
    Migrator::up(&db, None).await?;
    server::startup::build_app(db, SessionConfig::default())
}

/// Router plus the state and database behind it, for tests that reach past HTTP.
pub async fn app_with_state() -> anyhow::Result<(Router, server::state::AppState, sea_orm::DatabaseConnection)> {
    let db = models::db::connect_memory().await?;
    Migrator::up(&db, None).await?;
    let state = server::state::AppState::new(db.clone(), SessionConfig::default())?;
    Ok((server::routes::build_router(state.clone()), state, db))
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut req = Request::builder().method("GET").uri(uri);
    if let Some(c) = cookie {
        req = req.header(header::COOKIE, c);
    }
    req.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

pub fn location(res: &Response) -> &str {
    res.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()).unwrap_or("")
}

/// `name=value` pair of a non-empty `session_id` cookie set by the response.
pub fn session_cookie(res: &Response) -> Option<String> {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with("session_id=") && pair.len() > "session_id=".len())
        .map(str::to_string)
}

pub async fn body_text(res: Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

pub async fn register(app: &Router, email: &str) -> Response {
    let body = format!(
        "name=Tester&email={email}&password={PASSWORD}&phone=%2B39+111&address=Via+Roma+1&birth_date=1990-05-17"
    );
    send(app, post_form("/register", &body)).await
}

/// Register and log in, returning the session cookie.
pub async fn login_new_user(app: &Router, email: &str) -> String {
    let res = register(app, email).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let res = send(app, post_form("/login", &format!("email={email}&password={PASSWORD}"))).await;
    assert_eq!(location(&res), "/dashboard");
    session_cookie(&res).expect("session cookie")
}
