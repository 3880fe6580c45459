use std::sync::Arc;

use sqlx::PgPool;

use crate::config;
use crate::modules::booking::locks::ProfessionalLocks;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub env: config::Config,
    pub locks: Arc<ProfessionalLocks>,
}

impl AppState {
    pub fn new(db: PgPool, env: config::Config) -> Self {
        Self {
            db,
            env,
            locks: Arc::new(ProfessionalLocks::new()),
        }
    }
}
