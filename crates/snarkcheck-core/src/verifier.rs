// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Groth16 verifier using arkworks pairings.
//!
//! Algorithm:
//! 1. Compute vk_x = IC[0] + Σ signals[i]·IC[i+1]
//! 2. Check: e(A,B) == e(alpha,beta) · e(vk_x,gamma) · e(C,delta)
//!
//! arkworks writes the target group additively, so the product on the
//! right is a sum of [`PairingOutput`](ark_ec::pairing::PairingOutput)s.

use ark_ec::pairing::Pairing;
use ark_ec::AffineRepr;
use tracing::{debug, instrument};

use crate::curve::Curve;
use crate::error::{MalformedInput, Result};
use crate::types::{G1Point, Proof, PublicSignals, VerificationKey};

/// Fail fast when the signal count does not match the key.
pub fn check_signal_count(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        debug!(expected, actual, "public signal count mismatch");
        return Err(MalformedInput::SignalCount { expected, actual });
    }
    Ok(())
}

/// vk_x = ic[0] + Σ signals[i]·ic[i+1]
pub fn prepare_inputs<E: Curve>(ic: &[G1Point<E>], signals: &PublicSignals<E>) -> Result<E::G1> {
    let (constant, coefficients) = ic.split_first().ok_or(MalformedInput::EmptyIc)?;
    check_signal_count(coefficients.len(), signals.len())?;

    let mut acc = constant.as_affine().into_group();
    for (base, scalar) in coefficients.iter().zip(signals.as_slice()) {
        acc += *base.as_affine() * *scalar;
    }
    Ok(acc)
}

/// Verify a Groth16 proof, evaluating all four pairings.
///
/// `Ok(false)` means the inputs were well formed but the proof does not
/// satisfy the pairing equation. Errors are reserved for malformed input.
#[instrument(skip_all, fields(curve = %E::ID, n_public = vk.n_public()))]
pub fn verify<E: Curve>(
    vk: &VerificationKey<E>,
    signals: &PublicSignals<E>,
    proof: &Proof<E>,
) -> Result<bool> {
    let vk_x = prepare_inputs(vk.ic(), signals)?;

    let lhs = E::pairing(*proof.a().as_affine(), *proof.b().as_affine());
    let rhs = E::pairing(*vk.alpha_g1().as_affine(), *vk.beta_g2().as_affine())
        + E::pairing(vk_x, *vk.gamma_g2().as_affine())
        + E::pairing(*proof.c().as_affine(), *vk.delta_g2().as_affine());

    let accepted = lhs == rhs;
    debug!(accepted, "pairing check");
    Ok(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Bn254, Fr, G1Affine, G1Projective};

    fn generator() -> G1Point<Bn254> {
        G1Point::new(G1Affine::generator()).unwrap()
    }

    #[test]
    fn linear_combination() {
        let ic = vec![generator(), generator(), generator()];
        let signals = PublicSignals::<Bn254>::new(vec![Fr::from(2u64), Fr::from(5u64)]);
        let vk_x = prepare_inputs(&ic, &signals).unwrap();
        assert_eq!(vk_x, G1Projective::from(G1Affine::generator()) * Fr::from(8u64));
    }

    #[test]
    fn no_public_inputs() {
        let ic = vec![generator()];
        let vk_x = prepare_inputs(&ic, &PublicSignals::<Bn254>::new(vec![])).unwrap();
        assert_eq!(vk_x, G1Projective::from(G1Affine::generator()));
    }

    #[test]
    fn count_mismatch() {
        let ic = vec![generator(), generator()];
        let err = prepare_inputs(&ic, &PublicSignals::<Bn254>::new(vec![])).unwrap_err();
        assert_eq!(err, MalformedInput::SignalCount { expected: 1, actual: 0 });
    }

    #[test]
    fn empty_ic() {
        let err = prepare_inputs::<Bn254>(&[], &PublicSignals::new(vec![])).unwrap_err();
        assert_eq!(err, MalformedInput::EmptyIc);
    }
}
