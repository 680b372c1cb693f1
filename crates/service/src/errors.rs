use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    /// The store could not be reached or no pooled connection was available.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    /// The store was reachable but rejected the statement.
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: &str) -> Self { Self::NotFound(format!("{entity} '{id}'")) }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match e {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::StoreUnavailable(e.to_string()),
            _ => Self::Db(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn connection_errors_map_to_unavailable() {
        let e: ServiceError = DbErr::Conn(RuntimeErr::Internal("connection refused".into())).into();
        assert!(matches!(e, ServiceError::StoreUnavailable(_)));
    }

    #[test]
    fn statement_errors_map_to_db() {
        let e: ServiceError = DbErr::Exec(RuntimeErr::Internal("constraint failed".into())).into();
        assert!(matches!(e, ServiceError::Db(_)));
        let e: ServiceError = DbErr::Custom("boom".into()).into();
        assert!(matches!(e, ServiceError::Db(_)));
    }

    #[test]
    fn not_found_message_names_entity_and_id() {
        let e = ServiceError::not_found("employee", "abc");
        assert_eq!(e.to_string(), "not found: employee 'abc'");
    }
}
