//! Assigned input values, ready to hand to a prover.

use backend::Visibility;
use p3_koala_bear::KoalaBear;
use serde::{Deserialize, Serialize};

use crate::errors::FrontendError;
use crate::walker::{walk, Visitable};

/// The values of a circuit's inputs, keyed by full input name.
///
/// Entries appear in walk order, which is also the order
/// [`ConstraintSystem::allocate`](crate::ConstraintSystem::allocate) numbers
/// wires in. Secret entry `i` is secret wire `i`; public entry `i` is public
/// wire `i + 1`, after [`ONE_WIRE`](backend::ONE_WIRE).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    pub public: Vec<(String, KoalaBear)>,
    pub secret: Vec<(String, KoalaBear)>,
}

impl Witness {
    /// Collects the values of every leaf of an assigned circuit.
    pub fn from_assignment<T: Visitable + ?Sized>(circuit: &mut T) -> Result<Self, FrontendError> {
        let mut witness = Self::default();
        walk(circuit, |visibility, name, leaf| -> Result<(), FrontendError> {
            let value = leaf.value().ok_or_else(|| FrontendError::Unassigned {
                name: name.to_owned(),
            })?;
            let entries = match visibility {
                Visibility::Public => &mut witness.public,
                Visibility::Secret => &mut witness.secret,
                Visibility::Unset => {
                    return Err(FrontendError::UnresolvedVisibility {
                        name: name.to_owned(),
                    })
                }
            };
            entries.push((name.to_owned(), value));
            Ok(())
        })?;
        Ok(witness)
    }

    pub fn public_values(&self) -> Vec<KoalaBear> {
        self.public.iter().map(|(_, value)| *value).collect()
    }

    pub fn secret_values(&self) -> Vec<KoalaBear> {
        self.secret.iter().map(|(_, value)| *value).collect()
    }

    /// Encodes the witness with postcard.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FrontendError> {
        postcard::to_allocvec(self).map_err(|e| FrontendError::Encoding(e.to_string()))
    }

    /// Decodes a witness produced by [`Witness::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FrontendError> {
        postcard::from_bytes(bytes).map_err(|e| FrontendError::Encoding(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConstraintSystem, Variable};
    use p3_field::PrimeCharacteristicRing;

    struct Deposit {
        amount: Variable,
        salts: [Variable; 2],
    }

    crate::impl_visitable!(Deposit {
        amount => "amount,public",
        salts,
    });

    fn deposit(amount: u32, salts: [u32; 2]) -> Deposit {
        Deposit {
            amount: Variable::assigned(KoalaBear::from_u32(amount)),
            salts: salts.map(|s| Variable::assigned(KoalaBear::from_u32(s))),
        }
    }

    #[test]
    fn test_from_assignment() {
        let mut circuit = deposit(100, [7, 9]);
        let witness = Witness::from_assignment(&mut circuit).expect("witness");

        assert_eq!(
            witness.public,
            vec![("amount".to_owned(), KoalaBear::from_u32(100))]
        );
        assert_eq!(
            witness.secret_values(),
            vec![KoalaBear::from_u32(7), KoalaBear::from_u32(9)]
        );
        assert_eq!(witness.secret[1].0, "salts_1");
    }

    #[test]
    fn test_order_matches_allocation() {
        let mut circuit = deposit(1, [2, 3]);
        let mut cs = ConstraintSystem::new();
        cs.allocate(&mut circuit).expect("allocate");
        let witness = Witness::from_assignment(&mut circuit).expect("witness");

        let public_names: Vec<_> = witness.public.iter().map(|(n, _)| n.clone()).collect();
        let secret_names: Vec<_> = witness.secret.iter().map(|(n, _)| n.clone()).collect();
        assert_eq!(&cs.public_inputs()[1..], public_names.as_slice());
        assert_eq!(cs.secret_inputs(), secret_names.as_slice());
        assert_eq!(circuit.salts[1].id(), 1);
    }

    #[test]
    fn test_unassigned_leaf_rejected() {
        let mut circuit = deposit(1, [2, 3]);
        circuit.salts[0] = Variable::new();
        assert_eq!(
            Witness::from_assignment(&mut circuit),
            Err(FrontendError::Unassigned {
                name: "salts_0".to_owned()
            })
        );
    }

    #[test]
    fn test_postcard_encoding() {
        let mut circuit = deposit(42, [5, 6]);
        let witness = Witness::from_assignment(&mut circuit).expect("witness");
        let bytes = witness.to_bytes().expect("encode");
        assert_eq!(Witness::from_bytes(&bytes).expect("decode"), witness);

        assert!(matches!(
            Witness::from_bytes(&bytes[..bytes.len() / 2]),
            Err(FrontendError::Encoding(_))
        ));
    }
}
