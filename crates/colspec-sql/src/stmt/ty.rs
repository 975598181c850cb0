use colspec_core::{
    schema::{self, Entity, Field},
    Error, Result,
};

use std::fmt;

/// SQL storage types as they appear in rendered DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Boolean,
    Integer,
    BigInt,
    Real,
    Text,
    VarChar(u32),
    Date,
    Time,
    DateTime,
}

impl Type {
    /// Resolves the storage type for a field from its declared role.
    ///
    /// Fails if the field declares no role, or if the declared length is
    /// zero.
    pub fn from_field(entity: &Entity, field: &Field) -> Result<Type> {
        let Some(role) = &field.role else {
            return Err(Error::invalid_schema(format!(
                "field must declare a primary key or column role: {}",
                field.full_name(entity)
            )));
        };

        let length = role.length();
        if length == 0 {
            return Err(Error::invalid_schema(format!(
                "column length must be positive: {}",
                field.full_name(entity)
            )));
        }

        Ok(match role.ty() {
            schema::Type::Varchar => Type::VarChar(length),
            schema::Type::Text => Type::Text,
            schema::Type::Integer => Type::Integer,
            schema::Type::BigInt => Type::BigInt,
            schema::Type::Real => Type::Real,
            schema::Type::Boolean => Type::Boolean,
            schema::Type::Date => Type::Date,
            schema::Type::Time => Type::Time,
            schema::Type::DateTime => Type::DateTime,
        })
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => write!(f, "BOOLEAN"),
            Type::Integer => write!(f, "INT"),
            Type::BigInt => write!(f, "BIGINT"),
            Type::Real => write!(f, "REAL"),
            Type::Text => write!(f, "TEXT"),
            Type::VarChar(size) => write!(f, "VARCHAR({size})"),
            Type::Date => write!(f, "DATE"),
            Type::Time => write!(f, "TIME"),
            Type::DateTime => write!(f, "DATETIME"),
        }
    }
}
