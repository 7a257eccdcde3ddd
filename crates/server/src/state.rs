use std::sync::Arc;

use configs::SessionConfig;
use sea_orm::DatabaseConnection;
use service::auth::{repo::SeaOrmAuthRepository, AuthService};
use service::session::SessionStore;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth: Arc<AuthService<SeaOrmAuthRepository>>,
    pub sessions: SessionStore,
    pub session: SessionConfig,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, session: SessionConfig) -> anyhow::Result<Self> {
        let repo = Arc::new(SeaOrmAuthRepository { db: db.clone() });
        let templates = crate::templates::build()?;
        let ttl = chrono::Duration::try_hours(session.ttl_hours)
            .ok_or_else(|| anyhow::anyhow!("session.ttl_hours out of range: {}", session.ttl_hours))?;
        Ok(Self {
            auth: Arc::new(AuthService::new(repo)),
            sessions: SessionStore::new(ttl),
            session,
            templates: Arc::new(templates),
            db,
        })
    }
}
