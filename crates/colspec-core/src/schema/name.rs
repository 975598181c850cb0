use crate::str;

/// A normalized identifier, stored in its snake_case form.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name(String);

impl Name {
    /// Normalizes an identifier declared in any of the supported casings.
    pub fn new(src: &str) -> Name {
        Name(str::snake_case(src))
    }

    pub fn snake_case(&self) -> &str {
        &self.0
    }

    pub fn camel_case(&self) -> String {
        str::camel_case(&self.0)
    }

    pub fn upper_camel_case(&self) -> String {
        str::upper_camel_case(&self.0)
    }

    pub fn upper_snake_case(&self) -> String {
        str::upper_snake_case(&self.0)
    }
}
