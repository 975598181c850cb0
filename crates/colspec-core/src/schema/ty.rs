/// Declared scalar type of a field.
///
/// Lengths are carried on the field role, not here; only `Varchar` renders
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Varchar,
    Text,
    Integer,
    BigInt,
    Real,
    Boolean,
    Date,
    Time,
    DateTime,
}
