use crate::db::Database;
use crate::llm::ModelGateway;

/// Dependencies shared by every request, built once in `main`
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub gateway: ModelGateway,
}

impl AppState {
    pub fn new(db: Database, gateway: ModelGateway) -> Self {
        Self { db, gateway }
    }
}
