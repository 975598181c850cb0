mod entity;
pub use entity::Entity;

mod field;
pub use field::{Field, FieldRole};

mod name;
pub use name::Name;

mod ty;
pub use ty::Type;

use crate::{Error, Result};

use indexmap::IndexMap;

/// A set of entity declarations, keyed by table name in declaration order.
///
/// Built once at startup and passed by reference to the rendering layer;
/// nothing here is mutated afterwards.
#[derive(Debug, Default)]
pub struct Schema {
    pub entities: IndexMap<String, Entity>,
}

impl Schema {
    /// Builds a schema from entity declarations, verifying each one.
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Result<Schema> {
        let mut map = IndexMap::new();

        for entity in entities {
            entity.verify()?;

            let key = entity.table_name();
            if map.insert(key.clone(), entity).is_some() {
                return Err(Error::invalid_schema(format!("duplicate entity `{key}`")));
            }
        }

        Ok(Schema { entities: map })
    }

    /// Gets an entity by its table name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }
}
