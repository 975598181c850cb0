mod error;
pub use error::Error;

pub mod schema;
pub use schema::Schema;

pub mod str;

/// A Result type alias that uses colspec's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
