use super::{Field, FieldRole, Name, Type};
use crate::{Error, Result};

/// A declared data entity: a named, ordered collection of field descriptors.
#[derive(Debug, Clone)]
pub struct Entity {
    /// The entity name, as declared (e.g. `UserAccount`).
    pub name: Name,

    /// Field descriptors, in declaration order.
    pub fields: Vec<Field>,
}

impl Entity {
    /// Creates an entity from its declared name and fields.
    pub fn new(name: &str, fields: Vec<Field>) -> Entity {
        Entity {
            name: Name::new(name),
            fields,
        }
    }

    /// Gets the fields.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Gets a field by its declared name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// The table name backing this entity.
    pub fn table_name(&self) -> String {
        self.name.snake_case().to_string()
    }

    /// The primary key field, if the entity declares one.
    pub fn primary_key(&self) -> Option<&Field> {
        self.fields.iter().find(|field| field.is_primary_key())
    }

    pub(crate) fn verify(&self) -> Result<()> {
        let mut columns = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            let column = field.column_name();
            if columns.contains(&column) {
                return Err(Error::invalid_schema(format!(
                    "duplicate column name `{column}` in entity `{}`",
                    self.name.upper_camel_case()
                )));
            }
            columns.push(column);
        }

        let mut keys = self.fields.iter().filter(|field| field.is_primary_key());

        if let Some(key) = keys.next() {
            if keys.next().is_some() {
                return Err(Error::invalid_schema(format!(
                    "entity `{}` declares more than one primary key field",
                    self.name.upper_camel_case()
                )));
            }

            if let Some(FieldRole::PrimaryKey {
                ty,
                auto_increment: true,
                ..
            }) = &key.role
            {
                if !matches!(ty, Type::Integer | Type::BigInt) {
                    return Err(Error::invalid_schema(format!(
                        "auto increment requires an integer primary key: {}",
                        key.full_name(self)
                    )));
                }
            }
        }

        Ok(())
    }
}
