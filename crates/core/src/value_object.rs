//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use crate::error::DomainResult;

/// Value objects with self-validation.
///
/// Value objects are **immutable** and **compared by value**. Keyword rules and
/// quality bounds are value objects: a `("Conjured", PerishableFast)` rule is the
/// same rule wherever it appears.
///
/// ## Validation
///
/// `validate` checks the value's own invariants. Composite configuration calls it
/// on every part before an engine is built, so a table that passes validation can
/// be applied to any item without further checks.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Range { lo: i64, hi: i64 }
///
/// impl ValueObject for Range {
///     fn validate(&self) -> DomainResult<()> {
///         if self.lo > self.hi {
///             return Err(DomainError::validation("lo must not exceed hi"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Check this value's own invariants.
    fn validate(&self) -> DomainResult<()> {
        Ok(())
    }
}
