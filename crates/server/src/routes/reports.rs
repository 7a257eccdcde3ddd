use axum::{extract::State, response::Html};
use service::reports::{run_report, ReportKind};
use tera::Context;
use tracing::debug;

use crate::errors::AppError;
use crate::extractors::CurrentUser;
use crate::state::AppState;
use crate::templates::render;

/// Run one fixed report and render it as a table.
pub async fn show(kind: ReportKind, current: CurrentUser, State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let report = run_report(&state.db, kind).await?;
    debug!(report = kind.number(), rows = report.rows.len(), user_id = current.user.id, "report rendered");

    let mut ctx = Context::new();
    ctx.insert("user", &current.user);
    ctx.insert("report", &report);
    render(&state.templates, "results.html", &ctx)
}
