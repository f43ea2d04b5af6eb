//! Vocabulary shared between circuit front ends and proving back ends.
//!
//! A back end only needs to know how an input wire is classified and which
//! input name is reserved for the constant wire. Both live here so that the
//! `frontend` crate and any prover can agree on them without depending on
//! each other.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Name of the public input that always carries the constant `1`.
///
/// Every constraint system registers it first, so it occupies public wire 0.
pub const ONE_WIRE: &str = "ONE_WIRE";

/// Classification of a circuit input wire.
///
/// `Unset` is not a terminal classification. It marks "let the parent
/// decide" while a schema is being walked, and a leaf that still carries it
/// when it is registered is an error in the schema.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// No decision yet; inherited from the enclosing container.
    #[default]
    Unset,
    /// Known only to the prover.
    Secret,
    /// Known to both prover and verifier.
    Public,
}

impl Visibility {
    /// Returns `true` for `Secret` and `Public`.
    #[inline]
    pub fn is_set(self) -> bool {
        self != Visibility::Unset
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Visibility::Unset => "unset",
            Visibility::Secret => "secret",
            Visibility::Public => "public",
        };
        f.write_str(s)
    }
}
