//! Employee resource: domain types, persistence contract and application service.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{Employee, EmployeeInput};
pub use repository::EmployeeRepository;
pub use service::EmployeeService;
