use async_trait::async_trait;

use super::domain::{Employee, EmployeeInput};
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Record store contract for employees.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert, or overwrite the record with the same id. Assigns an id when the input has none.
    async fn save_or_update(&self, record: EmployeeInput) -> Result<Employee, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, ServiceError>;
    /// All records, in store-defined order.
    async fn find_all(&self) -> Result<Vec<Employee>, ServiceError>;
    /// One page of records ordered by id.
    async fn find_page(&self, page: Pagination) -> Result<Vec<Employee>, ServiceError>;
    /// Remove the record if present. Removing an unknown id is not an error.
    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError>;
}

/// In-process store for tests, demos and local experiments
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryEmployeeRepository {
        rows: RwLock<BTreeMap<String, Employee>>, // key: id
    }

    impl InMemoryEmployeeRepository {
        pub fn new() -> Self { Self::default() }
    }

    #[async_trait]
    impl EmployeeRepository for InMemoryEmployeeRepository {
        async fn save_or_update(&self, record: EmployeeInput) -> Result<Employee, ServiceError> {
            let employee = record.into_employee();
            let mut rows = self.rows.write().await;
            rows.insert(employee.id.clone(), employee.clone());
            Ok(employee)
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, ServiceError> {
            let rows = self.rows.read().await;
            Ok(rows.get(id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Employee>, ServiceError> {
            let rows = self.rows.read().await;
            Ok(rows.values().cloned().collect())
        }

        async fn find_page(&self, page: Pagination) -> Result<Vec<Employee>, ServiceError> {
            let (idx, per_page) = page.normalize();
            let rows = self.rows.read().await;
            Ok(rows
                .values()
                .skip((idx * per_page) as usize)
                .take(per_page as usize)
                .cloned()
                .collect())
        }

        async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
            let mut rows = self.rows.write().await;
            rows.remove(id);
            Ok(())
        }
    }
}
