//! Domain error types.
//!
//! These errors represent values that violate a domain invariant at
//! construction time. They are distinct from build and search errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Path has no stations
    #[error("path must contain at least one station")]
    EmptyPath,
}
