//! Circuit input placeholders.

use backend::Visibility;
use p3_field::PrimeCharacteristicRing;
use p3_koala_bear::KoalaBear;

use crate::errors::FrontendError;

/// A circuit input.
///
/// Declaring a `Variable` in a circuit struct does not register it; the
/// struct has to be walked by a registrar such as
/// [`ConstraintSystem::allocate`](crate::ConstraintSystem::allocate), which
/// records the wire index and visibility on each leaf it visits.
///
/// The runtime value may be assigned at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Variable {
    is_boolean: bool,
    visibility: Visibility,
    /// Index of the wire in the public or secret input list.
    id: usize,
    value: Option<KoalaBear>,
}

impl Variable {
    /// Creates an unregistered, unassigned variable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unregistered variable already holding `value`.
    pub fn assigned(value: KoalaBear) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Assigns the runtime value.
    ///
    /// # Panics
    ///
    /// Panics if the variable already holds a value. Assigning twice is a
    /// mistake in the calling code, not a recoverable condition.
    pub fn assign(&mut self, value: KoalaBear) {
        if self.try_assign(value).is_err() {
            panic!("variable already assigned");
        }
    }

    /// Assigns a small integer value, reduced into the field.
    ///
    /// # Panics
    ///
    /// Same as [`Variable::assign`].
    pub fn assign_u64(&mut self, value: u64) {
        self.assign(KoalaBear::from_u64(value));
    }

    /// Assigns the runtime value, or reports that one is already present.
    pub fn try_assign(&mut self, value: KoalaBear) -> Result<(), FrontendError> {
        if self.value.is_some() {
            return Err(FrontendError::AlreadyAssigned);
        }
        self.value = Some(value);
        Ok(())
    }

    /// Returns the assigned value, if any.
    pub fn value(&self) -> Option<KoalaBear> {
        self.value
    }

    pub fn is_assigned(&self) -> bool {
        self.value.is_some()
    }

    /// Wire index set by the registrar. Zero until registered.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Visibility set by the registrar. `Unset` until registered.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Reserved for boolean-constrained inputs; currently always `false`.
    pub fn is_boolean(&self) -> bool {
        self.is_boolean
    }

    /// Records the wire this variable was registered as.
    ///
    /// Called by leaf handlers; leaves the assigned value untouched.
    pub fn set_wire(&mut self, visibility: Visibility, id: usize) {
        self.visibility = visibility;
        self.id = id;
    }
}
