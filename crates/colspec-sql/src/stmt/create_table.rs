use super::{ColumnDef, Statement};

use colspec_core::{schema::Entity, Result};

#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key column, if the entity declares one
    pub primary_key: Option<String>,
}

impl Statement {
    pub fn create_table(entity: &Entity) -> Result<Self> {
        let columns = entity
            .fields()
            .iter()
            .map(|field| ColumnDef::from_field(entity, field))
            .collect::<Result<Vec<_>>>()?;

        let primary_key = entity.primary_key().map(|field| field.column_name());

        Ok(CreateTable {
            name: entity.table_name(),
            columns,
            primary_key,
        }
        .into())
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
