//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their attribute
//! values, and two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Inventory items have no
/// identity beyond their position in the list, so every field of an item is modelled
/// as one of these.
///
/// ## Construction
///
/// Implementors validate in their constructor and return a
/// [`DomainResult`](crate::DomainResult), so an instance that exists is always valid:
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Quantity(u32);
///
/// impl ValueObject for Quantity {}
///
/// impl Quantity {
///     fn new(value: u32) -> DomainResult<Self> {
///         if value == 0 {
///             return Err(DomainError::validation("quantity must be positive"));
///         }
///         Ok(Self(value))
///     }
/// }
/// ```
///
/// The trait requires:
/// - **Clone**: values are copied, not shared
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
