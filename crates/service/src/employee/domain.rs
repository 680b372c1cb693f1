use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted employee (business view). `id` is always assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Create/update payload. `id` may be omitted; the store assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    #[serde(default)]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Fresh store-assigned identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl EmployeeInput {
    /// Replace whatever id the payload carried.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Resolve into a full record, generating an id when none (or an empty one) was supplied.
    pub fn into_employee(self) -> Employee {
        let id = match self.id {
            Some(id) if !id.is_empty() => id,
            _ => new_id(),
        };
        Employee { id, first_name: self.first_name, last_name: self.last_name, email: self.email }
    }
}

impl From<models::employee::Model> for Employee {
    fn from(m: models::employee::Model) -> Self {
        Self { id: m.id, first_name: m.first_name, last_name: m.last_name, email: m.email }
    }
}
