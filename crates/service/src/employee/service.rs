use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{Employee, EmployeeInput};
use super::repository::EmployeeRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Employee business service independent of web framework.
///
/// The store handle is injected at construction; the service holds no other state.
#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self { Self { repo } }

    /// All employees, or one page of them when `page` is given.
    #[instrument(skip(self))]
    pub async fn list(&self, page: Option<Pagination>) -> Result<Vec<Employee>, ServiceError> {
        match page {
            Some(p) => self.repo.find_page(p).await,
            None => self.repo.find_all().await,
        }
    }

    /// Look up one employee; an absent record is `ServiceError::NotFound`.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Employee, ServiceError> {
        match self.repo.find_by_id(id).await? {
            Some(employee) => Ok(employee),
            None => Err(ServiceError::not_found("employee", id)),
        }
    }

    /// Persist a new employee. The store assigns an id when the payload has none.
    ///
    /// # Examples
    /// ```
    /// use service::employee::{EmployeeInput, EmployeeService, repository::memory::InMemoryEmployeeRepository};
    /// use std::sync::Arc;
    /// let svc = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));
    /// let input = EmployeeInput { id: None, first_name: "Ann".into(), last_name: "Lee".into(), email: "ann@x.com".into() };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert!(!created.id.is_empty());
    /// let fetched = tokio_test::block_on(svc.get(&created.id)).unwrap();
    /// assert_eq!(fetched, created);
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: EmployeeInput) -> Result<Employee, ServiceError> {
        let created = self.repo.save_or_update(input).await?;
        info!(id = %created.id, "employee_created");
        Ok(created)
    }

    /// Upsert under the path id. Any id carried by the payload is discarded.
    ///
    /// # Examples
    /// ```
    /// use service::employee::{EmployeeInput, EmployeeService, repository::memory::InMemoryEmployeeRepository};
    /// use std::sync::Arc;
    /// let svc = EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()));
    /// let body = EmployeeInput { id: Some("B".into()), first_name: "X".into(), last_name: "Y".into(), email: "x@y.z".into() };
    /// let saved = tokio_test::block_on(svc.update("A", body)).unwrap();
    /// assert_eq!(saved.id, "A");
    /// assert!(tokio_test::block_on(svc.get("B")).is_err());
    /// ```
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: &str, input: EmployeeInput) -> Result<Employee, ServiceError> {
        let saved = self.repo.save_or_update(input.with_id(id)).await?;
        info!(id = %saved.id, "employee_saved");
        Ok(saved)
    }

    /// Remove an employee. Unknown ids are a no-op.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await?;
        info!(id = %id, "employee_deleted");
        Ok(())
    }
}
