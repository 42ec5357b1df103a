//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two ticket
/// requests for two adults are the same request. To "modify" one, build a new
/// one.
///
/// The trait requires `Clone`, `PartialEq` and `Debug` so values can be copied
/// into summaries, compared in tests and logged.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
