//! Error types for input registration and witness extraction.

use thiserror::Error;

/// Errors raised by the front end's own handlers.
///
/// The walker itself is generic over the handler's error type and never
/// produces one of these; they come from [`ConstraintSystem`](crate::ConstraintSystem),
/// [`Witness`](crate::Witness) and [`Variable::try_assign`](crate::Variable::try_assign).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontendError {
    /// A value was assigned to a variable that already holds one.
    #[error("variable already assigned")]
    AlreadyAssigned,

    /// A leaf reached its handler without a `Public` or `Secret` decision.
    ///
    /// This happens when the root of the walk is a bare sequence or leaf, or
    /// when an `embed` annotation sits directly on a leaf.
    #[error("input `{name}` has no visibility; tag it or one of its parents")]
    UnresolvedVisibility { name: String },

    /// Two leaves resolved to the same full name.
    #[error("duplicate input name `{name}`")]
    DuplicateInput { name: String },

    /// Witness extraction met a leaf that was never assigned.
    #[error("input `{name}` is not assigned")]
    Unassigned { name: String },

    /// The witness codec rejected its input.
    #[error("witness encoding failed: {0}")]
    Encoding(String),
}
