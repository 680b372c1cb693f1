use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};
use tracing::debug;

use models::employee;

use crate::employee::domain::{Employee, EmployeeInput};
use crate::employee::repository::EmployeeRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmEmployeeRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmEmployeeRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl EmployeeRepository for SeaOrmEmployeeRepository {
    async fn save_or_update(&self, record: EmployeeInput) -> Result<Employee, ServiceError> {
        let employee = record.into_employee();
        let am = employee::ActiveModel {
            id: Set(employee.id.clone()),
            first_name: Set(employee.first_name.clone()),
            last_name: Set(employee.last_name.clone()),
            email: Set(employee.email.clone()),
        };
        // single statement: INSERT .. ON CONFLICT (id) DO UPDATE
        let affected = employee::Entity::insert(am)
            .on_conflict(
                OnConflict::column(employee::Column::Id)
                    .update_columns(employee::MUTABLE_COLUMNS)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;
        debug!(id = %employee.id, affected, "employee upserted");
        Ok(employee)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, ServiceError> {
        let found = employee::Entity::find_by_id(id.to_owned()).one(&self.db).await?;
        Ok(found.map(Employee::from))
    }

    async fn find_all(&self) -> Result<Vec<Employee>, ServiceError> {
        let rows = employee::Entity::find().all(&self.db).await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_page(&self, page: Pagination) -> Result<Vec<Employee>, ServiceError> {
        let (idx, per_page) = page.normalize();
        let rows = employee::Entity::find()
            .order_by_asc(employee::Column::Id)
            .paginate(&self.db, per_page)
            .fetch_page(idx)
            .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), ServiceError> {
        let res = employee::Entity::delete_by_id(id.to_owned()).exec(&self.db).await?;
        debug!(id = %id, rows_affected = res.rows_affected, "employee delete");
        Ok(())
    }
}
