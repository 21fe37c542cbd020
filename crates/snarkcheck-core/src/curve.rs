// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Pairing-friendly curves the verifier runs over.
//!
//! Field, group and pairing arithmetic come from arkworks. [`Curve`] adds
//! the few hooks the verifier and the codecs need on top of
//! [`Pairing`]: building affine points from raw coordinates, reading them
//! back, and the on-curve / subgroup checks.

use core::fmt;

use ark_ec::pairing::Pairing;
use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_bls12_381::Bls12_381;
use ark_bn254::Bn254;

use crate::error::PointFault;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveId {
    Bn254,
    Bls12_381,
}

impl CurveId {
    /// Name used in snarkjs `curve` fields.
    pub fn snarkjs_name(self) -> &'static str {
        match self {
            CurveId::Bn254 => "bn128",
            CurveId::Bls12_381 => "bls12381",
        }
    }

    /// Accepts the snarkjs names plus the common aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bn128" | "bn254" | "alt_bn128" => Some(CurveId::Bn254),
            "bls12381" | "bls12_381" | "bls12-381" => Some(CurveId::Bls12_381),
            _ => None,
        }
    }

    /// Domain-separation byte for key fingerprints.
    pub(crate) fn tag(self) -> u8 {
        match self {
            CurveId::Bn254 => 1,
            CurveId::Bls12_381 => 2,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.snarkjs_name())
    }
}

pub type G2Coords<F> = ([F; 2], [F; 2]);

/// A pairing engine the verifier knows how to take apart.
///
/// Coordinate constructors are *unchecked*; validation happens when the
/// result is wrapped in [`G1Point`](crate::G1Point) / [`G2Point`](crate::G2Point).
pub trait Curve: Pairing {
    const ID: CurveId;

    fn g1_from_xy(x: Self::BaseField, y: Self::BaseField) -> Self::G1Affine;

    /// `x` and `y` are `[c0, c1]` in the quadratic extension.
    fn g2_from_xy(x: [Self::BaseField; 2], y: [Self::BaseField; 2]) -> Self::G2Affine;

    /// `None` for the identity.
    fn g1_xy(p: &Self::G1Affine) -> Option<(Self::BaseField, Self::BaseField)>;

    fn g2_xy(p: &Self::G2Affine) -> Option<G2Coords<Self::BaseField>>;

    fn check_g1(p: &Self::G1Affine) -> Result<(), PointFault>;

    fn check_g2(p: &Self::G2Affine) -> Result<(), PointFault>;
}

fn check_affine<P: SWCurveConfig>(p: &Affine<P>) -> Result<(), PointFault> {
    if !p.is_on_curve() {
        return Err(PointFault::NotOnCurve);
    }
    if !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err(PointFault::NotInSubgroup);
    }
    Ok(())
}

impl Curve for Bn254 {
    const ID: CurveId = CurveId::Bn254;

    fn g1_from_xy(x: Self::BaseField, y: Self::BaseField) -> Self::G1Affine {
        ark_bn254::G1Affine::new_unchecked(x, y)
    }

    fn g2_from_xy(x: [Self::BaseField; 2], y: [Self::BaseField; 2]) -> Self::G2Affine {
        ark_bn254::G2Affine::new_unchecked(
            ark_bn254::Fq2::new(x[0], x[1]),
            ark_bn254::Fq2::new(y[0], y[1]),
        )
    }

    fn g1_xy(p: &Self::G1Affine) -> Option<(Self::BaseField, Self::BaseField)> {
        (!p.infinity).then_some((p.x, p.y))
    }

    fn g2_xy(p: &Self::G2Affine) -> Option<G2Coords<Self::BaseField>> {
        (!p.infinity).then_some(([p.x.c0, p.x.c1], [p.y.c0, p.y.c1]))
    }

    fn check_g1(p: &Self::G1Affine) -> Result<(), PointFault> {
        check_affine(p)
    }

    fn check_g2(p: &Self::G2Affine) -> Result<(), PointFault> {
        check_affine(p)
    }
}

impl Curve for Bls12_381 {
    const ID: CurveId = CurveId::Bls12_381;

    fn g1_from_xy(x: Self::BaseField, y: Self::BaseField) -> Self::G1Affine {
        ark_bls12_381::G1Affine::new_unchecked(x, y)
    }

    fn g2_from_xy(x: [Self::BaseField; 2], y: [Self::BaseField; 2]) -> Self::G2Affine {
        ark_bls12_381::G2Affine::new_unchecked(
            ark_bls12_381::Fq2::new(x[0], x[1]),
            ark_bls12_381::Fq2::new(y[0], y[1]),
        )
    }

    fn g1_xy(p: &Self::G1Affine) -> Option<(Self::BaseField, Self::BaseField)> {
        (!p.infinity).then_some((p.x, p.y))
    }

    fn g2_xy(p: &Self::G2Affine) -> Option<G2Coords<Self::BaseField>> {
        (!p.infinity).then_some(([p.x.c0, p.x.c1], [p.y.c0, p.y.c1]))
    }

    fn check_g1(p: &Self::G1Affine) -> Result<(), PointFault> {
        check_affine(p)
    }

    fn check_g2(p: &Self::G2Affine) -> Result<(), PointFault> {
        check_affine(p)
    }
}
