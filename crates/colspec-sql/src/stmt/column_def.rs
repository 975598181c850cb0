use super::Type;

use colspec_core::{
    schema::{Entity, Field},
    Result,
};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    /// Name of the column in the database.
    pub name: String,

    /// The column storage type.
    pub ty: Type,

    /// Whether the column accepts NULL.
    pub nullable: bool,

    /// True if the column is the table's primary key.
    pub primary_key: bool,

    /// True if the column value auto-increments on insert.
    pub auto_increment: bool,
}

impl ColumnDef {
    pub fn from_field(entity: &Entity, field: &Field) -> Result<ColumnDef> {
        let ty = Type::from_field(entity, field)?;

        Ok(ColumnDef {
            name: field.column_name(),
            ty,
            nullable: field.nullable(),
            primary_key: field.is_primary_key(),
            auto_increment: field.is_auto_increment(),
        })
    }
}
