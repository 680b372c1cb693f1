//! Service layer providing the employee CRUD contract on top of models.
//! - Separates business rules (id assignment, path-id precedence) from data access.
//! - Repository trait with SeaORM and in-memory implementations.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod pagination;
pub mod employee;
#[cfg(test)]
pub mod test_support;
