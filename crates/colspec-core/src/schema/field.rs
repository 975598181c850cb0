use super::{Entity, Type};
use crate::str;

/// A field descriptor: one declared attribute of an entity.
#[derive(Debug, Clone)]
pub struct Field {
    /// The field name, as declared (e.g. `userName`).
    pub name: String,

    /// How the field maps to a table column, if it does. A field that
    /// declares no role cannot be rendered to SQL.
    pub role: Option<FieldRole>,
}

/// How a field maps to a table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRole {
    /// The field backs the table's primary key column.
    PrimaryKey {
        ty: Type,
        length: u32,
        auto_increment: bool,
    },

    /// The field backs a regular column.
    Column { ty: Type, length: u32, nullable: bool },
}

impl Field {
    /// Creates a field with the default primary key role.
    pub fn primary_key(name: &str) -> Field {
        Field::with_role(name, FieldRole::primary_key())
    }

    /// Creates a field with the default column role.
    pub fn column(name: &str) -> Field {
        Field::with_role(name, FieldRole::column())
    }

    /// Creates a field with an explicit role.
    pub fn with_role(name: &str, role: FieldRole) -> Field {
        Field {
            name: name.to_string(),
            role: Some(role),
        }
    }

    /// The column name backing this field.
    pub fn column_name(&self) -> String {
        str::snake_case(&self.name)
    }

    /// Gets whether the field is nullable. Primary keys never are.
    pub fn nullable(&self) -> bool {
        matches!(self.role, Some(FieldRole::Column { nullable: true, .. }))
    }

    /// Gets whether the field backs the primary key.
    pub fn is_primary_key(&self) -> bool {
        matches!(self.role, Some(FieldRole::PrimaryKey { .. }))
    }

    pub fn is_auto_increment(&self) -> bool {
        matches!(
            self.role,
            Some(FieldRole::PrimaryKey {
                auto_increment: true,
                ..
            })
        )
    }

    /// Returns a fully qualified name for the field.
    pub fn full_name(&self, entity: &Entity) -> String {
        format!("{}::{}", entity.name.upper_camel_case(), self.name)
    }
}

impl FieldRole {
    /// Default primary key role: an integer key, not auto-incremented.
    pub fn primary_key() -> FieldRole {
        FieldRole::PrimaryKey {
            ty: Type::Integer,
            length: 255,
            auto_increment: false,
        }
    }

    /// Default column role: `VARCHAR(255)`, not nullable.
    pub fn column() -> FieldRole {
        FieldRole::Column {
            ty: Type::Varchar,
            length: 255,
            nullable: false,
        }
    }

    /// The declared scalar type.
    pub fn ty(&self) -> Type {
        match *self {
            FieldRole::PrimaryKey { ty, .. } | FieldRole::Column { ty, .. } => ty,
        }
    }

    /// The declared length. Only `Varchar` renders it, but it must be
    /// positive for every type.
    pub fn length(&self) -> u32 {
        match *self {
            FieldRole::PrimaryKey { length, .. } | FieldRole::Column { length, .. } => length,
        }
    }
}
