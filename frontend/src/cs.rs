//! Input registration.

use std::collections::HashSet;

use backend::{Visibility, ONE_WIRE};
use tracing::debug;

use crate::errors::FrontendError;
use crate::walker::{walk, LeafHandler, Visitable};

/// Registry of a circuit's input wires.
///
/// Public and secret inputs are numbered independently, in the order they
/// are registered. Public wire 0 is always [`ONE_WIRE`].
///
/// Only inputs are tracked here; constraints over them are the business of
/// whatever builds on top of this registry.
#[derive(Clone, Debug)]
pub struct ConstraintSystem {
    public_inputs: Vec<String>,
    secret_inputs: Vec<String>,
    names: HashSet<String>,
}

impl Default for ConstraintSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintSystem {
    pub fn new() -> Self {
        Self {
            public_inputs: vec![ONE_WIRE.to_owned()],
            secret_inputs: Vec::new(),
            names: HashSet::from([ONE_WIRE.to_owned()]),
        }
    }

    /// Registers every leaf of `circuit` as an input wire.
    ///
    /// Each leaf is stamped with the visibility and index it was registered
    /// under. Stops at the first leaf that has no visibility or reuses a name;
    /// leaves registered before that point stay registered.
    pub fn allocate<T: Visitable + ?Sized>(&mut self, circuit: &mut T) -> Result<(), FrontendError> {
        walk(circuit, |visibility, name, leaf| -> Result<(), FrontendError> {
            let id = match visibility {
                Visibility::Public => self.new_public_input(name)?,
                Visibility::Secret => self.new_secret_input(name)?,
                Visibility::Unset => {
                    return Err(FrontendError::UnresolvedVisibility {
                        name: name.to_owned(),
                    })
                }
            };
            leaf.set_wire(visibility, id);
            Ok(())
        })
    }

    /// Registers a public input and returns its wire index.
    pub fn new_public_input(&mut self, name: &str) -> Result<usize, FrontendError> {
        self.claim(name)?;
        let id = self.public_inputs.len();
        self.public_inputs.push(name.to_owned());
        debug!(name, id, "registered public input");
        Ok(id)
    }

    /// Registers a secret input and returns its wire index.
    pub fn new_secret_input(&mut self, name: &str) -> Result<usize, FrontendError> {
        self.claim(name)?;
        let id = self.secret_inputs.len();
        self.secret_inputs.push(name.to_owned());
        debug!(name, id, "registered secret input");
        Ok(id)
    }

    /// Public input names, starting with [`ONE_WIRE`].
    pub fn public_inputs(&self) -> &[String] {
        &self.public_inputs
    }

    pub fn secret_inputs(&self) -> &[String] {
        &self.secret_inputs
    }

    pub fn nb_public_inputs(&self) -> usize {
        self.public_inputs.len()
    }

    pub fn nb_secret_inputs(&self) -> usize {
        self.secret_inputs.len()
    }

    fn claim(&mut self, name: &str) -> Result<(), FrontendError> {
        if !self.names.insert(name.to_owned()) {
            return Err(FrontendError::DuplicateInput {
                name: name.to_owned(),
            });
        }
        Ok(())
    }
}

/// A circuit may keep a handle on its registry; it holds no inputs.
impl Visitable for ConstraintSystem {
    fn visit<H: LeafHandler>(
        &mut self,
        _base: &str,
        _inherited: Visibility,
        _handler: &mut H,
    ) -> Result<(), H::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variable;

    struct Pair {
        a: Variable,
        b: Variable,
    }

    crate::impl_visitable!(Pair {
        a => "a,public",
        b,
    });

    #[test]
    fn test_new_reserves_one_wire() {
        let cs = ConstraintSystem::new();
        assert_eq!(cs.public_inputs(), &[ONE_WIRE.to_owned()]);
        assert_eq!(cs.nb_public_inputs(), 1);
        assert_eq!(cs.nb_secret_inputs(), 0);
    }

    #[test]
    fn test_allocate_stamps_wires() {
        let mut cs = ConstraintSystem::new();
        let mut pair = Pair {
            a: Variable::new(),
            b: Variable::new(),
        };
        cs.allocate(&mut pair).expect("allocate");

        assert_eq!(cs.public_inputs(), &["ONE_WIRE".to_owned(), "a".to_owned()]);
        assert_eq!(cs.secret_inputs(), &["b".to_owned()]);
        assert_eq!(pair.a.visibility(), Visibility::Public);
        assert_eq!(pair.a.id(), 1);
        assert_eq!(pair.b.visibility(), Visibility::Secret);
        assert_eq!(pair.b.id(), 0);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut cs = ConstraintSystem::new();
        cs.new_secret_input("x").expect("first");
        assert_eq!(
            cs.new_public_input("x"),
            Err(FrontendError::DuplicateInput {
                name: "x".to_owned()
            })
        );
        assert_eq!(
            cs.new_public_input(ONE_WIRE),
            Err(FrontendError::DuplicateInput {
                name: ONE_WIRE.to_owned()
            })
        );
        assert_eq!(cs.nb_public_inputs(), 1);
    }

    #[test]
    fn test_unset_leaf_rejected() {
        let mut cs = ConstraintSystem::new();
        let mut bare = vec![Variable::new(), Variable::new()];
        assert_eq!(
            cs.allocate(&mut bare),
            Err(FrontendError::UnresolvedVisibility {
                name: "0".to_owned()
            })
        );
        assert_eq!(cs.nb_secret_inputs(), 0);
    }

    #[test]
    fn test_allocating_twice_collides() {
        let mut cs = ConstraintSystem::new();
        let mut pair = Pair {
            a: Variable::new(),
            b: Variable::new(),
        };
        cs.allocate(&mut pair).expect("allocate");
        assert_eq!(
            cs.allocate(&mut pair),
            Err(FrontendError::DuplicateInput {
                name: "a".to_owned()
            })
        );
    }
}
