use axum::{routing::get, Router};
use service::reports::ReportKind;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::extractors::CurrentUser;
use crate::state::AppState;

pub mod auth;
pub mod pages;
pub mod reports;

pub use pages::health;

/// Build the full application router: public pages, auth forms and the session-protected reports.
pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/", get(pages::index))
        .route("/health", get(health))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", get(auth::logout));

    // Protected routes reject through the CurrentUser extractor
    let mut protected = Router::new().route("/dashboard", get(pages::dashboard));
    for kind in ReportKind::ALL {
        protected = protected.route(
            kind.path(),
            get(move |user: CurrentUser, state: axum::extract::State<AppState>| reports::show(kind, user, state)),
        );
    }

    public
        .merge(protected)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
