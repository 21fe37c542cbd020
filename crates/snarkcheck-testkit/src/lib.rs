//! Seeded Groth16 fixtures for snarkcheck tests.
//!
//! Runs the arkworks prover over the toy circuits in [`circuits`]. Nothing
//! here ships in the verifier; it only exists so tests have honest proofs
//! to check.

pub mod circuits;

use ark_ec::pairing::Pairing;
use ark_groth16::{Groth16, Proof, VerifyingKey};
use ark_relations::r1cs::ConstraintSynthesizer;
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};

pub use circuits::{SquareCircuit, SquaresCircuit, SumCircuit};

pub fn test_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// An honest (key, proof, public inputs) triple.
#[derive(Clone)]
pub struct Fixture<E: Pairing> {
    pub vk: VerifyingKey<E>,
    pub proof: Proof<E>,
    pub public_inputs: Vec<E::ScalarField>,
}

/// Setup over `shape`, then prove `witness`. Deterministic for a given seed.
pub fn fixture<E, C>(
    shape: C,
    witness: C,
    public_inputs: Vec<E::ScalarField>,
    seed: u64,
) -> Fixture<E>
where
    E: Pairing,
    C: ConstraintSynthesizer<E::ScalarField>,
{
    let mut rng = StdRng::seed_from_u64(seed);
    let (pk, vk) = Groth16::<E>::circuit_specific_setup(shape, &mut rng).expect("setup failed");
    let proof = Groth16::<E>::prove(&pk, witness, &mut rng).expect("proving failed");
    Fixture {
        vk,
        proof,
        public_inputs,
    }
}

/// Toy circuit `x * x == y` proven for witness `x`; public input `[x^2]`.
pub fn square_fixture<E: Pairing>(x: u64, seed: u64) -> Fixture<E> {
    let x = E::ScalarField::from(x);
    fixture(
        SquareCircuit::empty(),
        SquareCircuit::with_witness(x),
        vec![x * x],
        seed,
    )
}

/// One public input per entry of `xs` (possibly none).
pub fn squares_fixture<E: Pairing>(xs: &[u64], seed: u64) -> Fixture<E> {
    let xs: Vec<E::ScalarField> = xs.iter().map(|x| E::ScalarField::from(*x)).collect();
    fixture(
        SquaresCircuit::empty(xs.len()),
        SquaresCircuit::with_witness(&xs),
        SquaresCircuit::public_inputs(&xs),
        seed,
    )
}

/// Private values summing to the single public input.
pub fn sum_fixture<E: Pairing>(values: &[u64], seed: u64) -> Fixture<E> {
    let witness = SumCircuit::<E::ScalarField>::with_witness(values);
    let total = witness.total;
    fixture(SumCircuit::empty(values.len()), witness, vec![total], seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Bls12_381;
    use ark_bn254::Bn254;

    #[test]
    fn square_fixture_verifies_with_arkworks() {
        let f = square_fixture::<Bn254>(3, 7);
        assert_eq!(f.vk.gamma_abc_g1.len(), 2);
        assert!(Groth16::<Bn254>::verify(&f.vk, &f.public_inputs, &f.proof).unwrap());
    }

    #[test]
    fn squares_fixture_bls() {
        let f = squares_fixture::<Bls12_381>(&[2, 3, 4], 7);
        assert_eq!(f.public_inputs.len(), 3);
        assert!(Groth16::<Bls12_381>::verify(&f.vk, &f.public_inputs, &f.proof).unwrap());
    }

    #[test]
    fn fixtures_are_deterministic() {
        let a = square_fixture::<Bn254>(3, 11);
        let b = square_fixture::<Bn254>(3, 11);
        assert_eq!(a.proof, b.proof);
        assert_eq!(a.vk, b.vk);
    }
}
