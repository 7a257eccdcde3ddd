use axum::{extract::State, response::Html, Json};
use common::types::Health;
use serde::Serialize;
use service::reports::ReportKind;
use tera::Context;

use crate::errors::AppError;
use crate::extractors::{CurrentUser, MaybeUser};
use crate::state::AppState;
use crate::templates::render;

#[derive(Serialize)]
struct ReportLink {
    number: u8,
    path: &'static str,
    title: &'static str,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn index(State(state): State<AppState>, MaybeUser(user): MaybeUser) -> Result<Html<String>, AppError> {
    let mut ctx = Context::new();
    ctx.insert("user", &user);
    render(&state.templates, "index.html", &ctx)
}

pub async fn dashboard(State(state): State<AppState>, current: CurrentUser) -> Result<Html<String>, AppError> {
    let reports: Vec<ReportLink> = ReportKind::ALL
        .iter()
        .map(|k| ReportLink { number: k.number(), path: k.path(), title: k.title() })
        .collect();

    let mut ctx = Context::new();
    ctx.insert("user", &current.user);
    ctx.insert("reports", &reports);
    render(&state.templates, "dashboard.html", &ctx)
}
