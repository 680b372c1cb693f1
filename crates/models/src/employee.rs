use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row of the `employee` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Columns overwritten when an upsert hits an existing primary key.
pub const MUTABLE_COLUMNS: [Column; 3] = [Column::FirstName, Column::LastName, Column::Email];
