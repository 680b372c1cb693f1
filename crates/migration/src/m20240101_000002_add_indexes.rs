//! Lookup indexes for the employee table.
//! `email` is deliberately not unique.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_email")
                    .table(Employee::Table)
                    .col(Employee::Email)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_employee_name")
                    .table(Employee::Table)
                    .col(Employee::LastName)
                    .col(Employee::FirstName)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_employee_name").table(Employee::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_employee_email").table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Email,
    FirstName,
    LastName,
}
