/// Identifier for a body in a [`crate::field::Field`].
///
/// This is an index into `Field::bodies`, and is only meaningful within
/// the lifetime of a given `Field` instance (a rebuild invalidates it).
pub type BodyId = usize;
