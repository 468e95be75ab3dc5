//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. `Price` and `MinPrice` in the catalog are value objects.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by value. To "change" one,
/// construct a new one through its validating constructor.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Price { cents: u64 }
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price { cents: 5800 }, Price { cents: 5800 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
