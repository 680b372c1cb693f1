use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::employee::{repo::seaorm::SeaOrmEmployeeRepository, EmployeeRepository, EmployeeService};

/// Router state shared by all handlers. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
}

impl AppState {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { employees: EmployeeService::new(repo) }
    }

    /// State backed by the relational store behind `db`.
    pub fn with_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmEmployeeRepository::new(db)))
    }
}
