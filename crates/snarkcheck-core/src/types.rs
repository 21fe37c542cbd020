// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Type definitions for Groth16 verification.
//!
//! Every point type here is validated on construction (on the curve, then
//! in the prime-order subgroup), so a [`VerificationKey`] or [`Proof`] that
//! exists is already safe to pair.

use core::fmt;

use ark_ec::AffineRepr;
use ark_serialize::CanonicalSerialize;
use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::curve::Curve;
use crate::error::{MalformedInput, PointFault, Result};
use crate::field::{field_from_be_bytes, field_from_biguint};

/// A validated point in G1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G1Point<E: Curve>(E::G1Affine);

/// A validated point in G2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct G2Point<E: Curve>(E::G2Affine);

impl<E: Curve> G1Point<E> {
    pub fn new(point: E::G1Affine) -> core::result::Result<Self, PointFault> {
        E::check_g1(&point)?;
        Ok(Self(point))
    }

    pub fn identity() -> Self {
        Self(E::G1Affine::zero())
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_affine(&self) -> &E::G1Affine {
        &self.0
    }
}

impl<E: Curve> G2Point<E> {
    pub fn new(point: E::G2Affine) -> core::result::Result<Self, PointFault> {
        E::check_g2(&point)?;
        Ok(Self(point))
    }

    pub fn identity() -> Self {
        Self(E::G2Affine::zero())
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    pub fn as_affine(&self) -> &E::G2Affine {
        &self.0
    }
}

fn g1_at<E: Curve>(point: E::G1Affine, location: impl Into<String>) -> Result<G1Point<E>> {
    G1Point::new(point).map_err(|fault| fault.at(location))
}

fn g2_at<E: Curve>(point: E::G2Affine, location: impl Into<String>) -> Result<G2Point<E>> {
    G2Point::new(point).map_err(|fault| fault.at(location))
}

/// Groth16 verification key.
///
/// `ic` is a unified vector: `ic[0]` is the constant term, `ic[1..]` are the
/// coefficients for the public inputs, in circuit order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationKey<E: Curve> {
    alpha_g1: G1Point<E>,
    beta_g2: G2Point<E>,
    gamma_g2: G2Point<E>,
    delta_g2: G2Point<E>,
    ic: Vec<G1Point<E>>,
}

impl<E: Curve> VerificationKey<E> {
    /// Assemble a key from already-validated points.
    ///
    /// Refuses an empty `ic` and a key whose alpha, beta, gamma or delta is
    /// the identity; no honest setup produces either.
    pub fn new(
        alpha_g1: G1Point<E>,
        beta_g2: G2Point<E>,
        gamma_g2: G2Point<E>,
        delta_g2: G2Point<E>,
        ic: Vec<G1Point<E>>,
    ) -> Result<Self> {
        if ic.is_empty() {
            return Err(MalformedInput::EmptyIc);
        }
        let degenerate = [
            ("alpha_g1", alpha_g1.is_identity()),
            ("beta_g2", beta_g2.is_identity()),
            ("gamma_g2", gamma_g2.is_identity()),
            ("delta_g2", delta_g2.is_identity()),
        ];
        if let Some((location, _)) = degenerate.into_iter().find(|(_, zero)| *zero) {
            return Err(MalformedInput::DegenerateKey { location });
        }
        Ok(Self {
            alpha_g1,
            beta_g2,
            gamma_g2,
            delta_g2,
            ic,
        })
    }

    /// Validate raw affine points and assemble a key.
    pub fn from_affine(
        alpha_g1: E::G1Affine,
        beta_g2: E::G2Affine,
        gamma_g2: E::G2Affine,
        delta_g2: E::G2Affine,
        ic: Vec<E::G1Affine>,
    ) -> Result<Self> {
        let ic = ic
            .into_iter()
            .enumerate()
            .map(|(i, p)| g1_at(p, format!("vk.ic[{i}]")))
            .collect::<Result<Vec<_>>>()?;
        Self::new(
            g1_at(alpha_g1, "vk.alpha_g1")?,
            g2_at(beta_g2, "vk.beta_g2")?,
            g2_at(gamma_g2, "vk.gamma_g2")?,
            g2_at(delta_g2, "vk.delta_g2")?,
            ic,
        )
    }

    pub fn from_arkworks(vk: &ark_groth16::VerifyingKey<E>) -> Result<Self> {
        Self::from_affine(
            vk.alpha_g1,
            vk.beta_g2,
            vk.gamma_g2,
            vk.delta_g2,
            vk.gamma_abc_g1.clone(),
        )
    }

    pub fn to_arkworks(&self) -> ark_groth16::VerifyingKey<E> {
        ark_groth16::VerifyingKey {
            alpha_g1: self.alpha_g1.0,
            beta_g2: self.beta_g2.0,
            gamma_g2: self.gamma_g2.0,
            delta_g2: self.delta_g2.0,
            gamma_abc_g1: self.ic.iter().map(|p| p.0).collect(),
        }
    }

    pub fn alpha_g1(&self) -> &G1Point<E> {
        &self.alpha_g1
    }

    pub fn beta_g2(&self) -> &G2Point<E> {
        &self.beta_g2
    }

    pub fn gamma_g2(&self) -> &G2Point<E> {
        &self.gamma_g2
    }

    pub fn delta_g2(&self) -> &G2Point<E> {
        &self.delta_g2
    }

    pub fn ic(&self) -> &[G1Point<E>] {
        &self.ic
    }

    /// Number of public signals this key expects.
    pub fn n_public(&self) -> usize {
        self.ic.len() - 1
    }

    /// fingerprint = sha256(curve_tag ++ alpha ++ beta ++ gamma ++ delta ++ ic[0..n]),
    /// points in compressed canonical form.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut hasher = Sha256::new();
        hasher.update([E::ID.tag()]);
        absorb(&mut hasher, &self.alpha_g1.0);
        absorb(&mut hasher, &self.beta_g2.0);
        absorb(&mut hasher, &self.gamma_g2.0);
        absorb(&mut hasher, &self.delta_g2.0);
        for p in &self.ic {
            absorb(&mut hasher, &p.0);
        }
        Fingerprint(hasher.finalize().into())
    }
}

fn absorb(hasher: &mut Sha256, point: &impl CanonicalSerialize) {
    let mut buf = Vec::new();
    point
        .serialize_compressed(&mut buf)
        .expect("serializing into a Vec cannot fail");
    hasher.update(&buf);
}

/// Content address of a verification key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

/// Groth16 proof: `a` and `c` in G1, `b` in G2.
///
/// The identity is a legal group element here; the pairing check decides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proof<E: Curve> {
    a: G1Point<E>,
    b: G2Point<E>,
    c: G1Point<E>,
}

impl<E: Curve> Proof<E> {
    pub fn new(a: G1Point<E>, b: G2Point<E>, c: G1Point<E>) -> Self {
        Self { a, b, c }
    }

    pub fn from_affine(a: E::G1Affine, b: E::G2Affine, c: E::G1Affine) -> Result<Self> {
        Ok(Self {
            a: g1_at(a, "proof.a")?,
            b: g2_at(b, "proof.b")?,
            c: g1_at(c, "proof.c")?,
        })
    }

    pub fn from_arkworks(proof: &ark_groth16::Proof<E>) -> Result<Self> {
        Self::from_affine(proof.a, proof.b, proof.c)
    }

    pub fn to_arkworks(&self) -> ark_groth16::Proof<E> {
        ark_groth16::Proof {
            a: self.a.0,
            b: self.b.0,
            c: self.c.0,
        }
    }

    pub fn a(&self) -> &G1Point<E> {
        &self.a
    }

    pub fn b(&self) -> &G2Point<E> {
        &self.b
    }

    pub fn c(&self) -> &G1Point<E> {
        &self.c
    }
}

/// Ordered public signals. Order must match the circuit's declared
/// public-input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicSignals<E: Curve>(Vec<E::ScalarField>);

impl<E: Curve> PublicSignals<E> {
    pub fn new(values: Vec<E::ScalarField>) -> Self {
        Self(values)
    }

    /// Range-checked: every value must be below the scalar field modulus.
    pub fn from_biguints(values: &[BigUint]) -> Result<Self> {
        values
            .iter()
            .enumerate()
            .map(|(index, v)| {
                field_from_biguint(v).ok_or(MalformedInput::ScalarOutOfRange { index })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Range-checked, big-endian byte strings of any length.
    pub fn from_be_bytes<B: AsRef<[u8]>>(values: &[B]) -> Result<Self> {
        values
            .iter()
            .enumerate()
            .map(|(index, v)| {
                field_from_be_bytes(v.as_ref()).ok_or(MalformedInput::ScalarOutOfRange { index })
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[E::ScalarField] {
        &self.0
    }
}

impl<E: Curve> From<Vec<E::ScalarField>> for PublicSignals<E> {
    fn from(values: Vec<E::ScalarField>) -> Self {
        Self(values)
    }
}
