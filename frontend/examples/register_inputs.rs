//! Registers the inputs of a small transfer circuit, assigns them and
//! encodes the resulting witness.
//!
//! Run with `RUST_LOG=debug` to see each wire as it is registered.

use std::collections::BTreeMap;
use std::time::Instant;

use frontend::{impl_visitable, ConstraintSystem, KoalaBear, Variable, Witness};
use p3_field::PrimeCharacteristicRing;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct Note {
    value: Variable,
    owner: Variable,
    blinding: Variable,
}

impl_visitable!(Note {
    value,
    owner,
    blinding => "r",
});

#[derive(Default)]
struct Transfer {
    inputs: [Note; 2],
    outputs: [Note; 2],
    fee: Variable,
    nullifiers: [Variable; 2],
    header: Header,
    // not walked; only logs a warning
    memo: BTreeMap<String, Variable>,
    cs: ConstraintSystem,
}

#[derive(Default)]
struct Header {
    root: Variable,
    epoch: Variable,
}

impl_visitable!(Header { root, epoch });

impl_visitable!(Transfer {
    inputs,
    outputs,
    fee => "fee,public",
    nullifiers => "nf,public",
    header => ",embed",
    memo,
    cs => "-",
});

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(42);
    let mut circuit = Transfer::default();

    let start = Instant::now();
    let mut cs = ConstraintSystem::new();
    cs.allocate(&mut circuit).expect("allocate");
    println!(
        "registered {} public / {} secret inputs in {:?}",
        cs.nb_public_inputs(),
        cs.nb_secret_inputs(),
        start.elapsed()
    );
    println!("public: {:?}", cs.public_inputs());
    println!("secret: {:?}", cs.secret_inputs());

    for note in circuit.inputs.iter_mut().chain(circuit.outputs.iter_mut()) {
        note.value.assign_u64(rng.random_range(0..1_000_000));
        note.owner.assign(KoalaBear::from_u32(rng.random_range(0..1u32 << 30)));
        note.blinding.assign(KoalaBear::from_u32(rng.random_range(0..1u32 << 30)));
    }
    circuit.fee.assign_u64(10);
    for nf in circuit.nullifiers.iter_mut() {
        nf.assign(KoalaBear::from_u32(rng.random_range(0..1u32 << 30)));
    }
    circuit.header.root.assign(KoalaBear::from_u32(rng.random_range(0..1u32 << 30)));
    circuit.header.epoch.assign_u64(7);

    let witness = Witness::from_assignment(&mut circuit).expect("witness");
    let bytes = witness.to_bytes().expect("encode");
    println!(
        "witness: {} public, {} secret, {} bytes",
        witness.public.len(),
        witness.secret.len(),
        bytes.len()
    );

    let decoded = Witness::from_bytes(&bytes).expect("decode");
    assert_eq!(decoded, witness);
    assert_eq!(decoded.public[0].0, "fee");
}
