// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkjs JSON: `verification_key.json`, `proof.json`, `public.json`.
//!
//! # Layout
//!
//! - **Coordinates / scalars**: base-10 strings (`0x` hex also accepted).
//! - **G1**: `[x, y, z]`. **G2**: `[[x0, x1], [y0, y1], [z0, z1]]`, each pair
//!   `[c0, c1]` in the quadratic extension.
//! - `z = 1` is an affine point, `z = 0` the identity. Anything else is
//!   refused rather than normalized.
//!
//! Values at or above the field modulus are refused, never reduced.

use ark_ec::AffineRepr;
use ark_ff::{One, PrimeField, Zero};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use tracing::debug;

use snarkcheck_core::field::{field_from_biguint, field_to_biguint, parse_biguint};
use snarkcheck_core::{
    Curve, CurveId, G1Point, G2Point, MalformedInput, Proof, PublicSignals, Result,
    VerificationKey,
};

pub const PROTOCOL: &str = "groth16";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnarkjsVerificationKey {
    pub protocol: String,
    pub curve: String,
    #[serde(rename = "nPublic", default, skip_serializing_if = "Option::is_none")]
    pub n_public: Option<usize>,
    pub vk_alpha_1: Vec<String>,
    pub vk_beta_2: Vec<Vec<String>>,
    pub vk_gamma_2: Vec<Vec<String>>,
    pub vk_delta_2: Vec<Vec<String>>,
    #[serde(rename = "IC")]
    pub ic: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnarkjsProof {
    pub pi_a: Vec<String>,
    pub pi_b: Vec<Vec<String>>,
    pub pi_c: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
}

/// A public signal as it appears in `public.json`. snarkjs writes strings;
/// some tools write small values as bare numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Signal {
    Text(String),
    Number(u64),
}

// ── Decoding ──

fn coordinate<F: PrimeField>(raw: &str, location: &str) -> Result<F> {
    let value = parse_biguint(raw).ok_or_else(|| {
        MalformedInput::encoding(location, format!("not an unsigned integer: {raw:?}"))
    })?;
    field_from_biguint(&value).ok_or_else(|| {
        MalformedInput::encoding(location, "coordinate is not below the field modulus")
    })
}

fn g1<E: Curve>(raw: &[String], location: &str) -> Result<E::G1Affine> {
    let [x, y, z] = raw else {
        return Err(MalformedInput::encoding(
            location,
            format!("expected 3 coordinates, found {}", raw.len()),
        ));
    };
    let z: E::BaseField = coordinate(z, location)?;
    if z.is_zero() {
        return Ok(E::G1Affine::zero());
    }
    if !z.is_one() {
        return Err(MalformedInput::encoding(location, "z must be 0 or 1"));
    }
    Ok(E::g1_from_xy(coordinate(x, location)?, coordinate(y, location)?))
}

fn pair<E: Curve>(raw: &[String], location: &str) -> Result<[E::BaseField; 2]> {
    let [c0, c1] = raw else {
        return Err(MalformedInput::encoding(
            location,
            format!("expected [c0, c1], found {} elements", raw.len()),
        ));
    };
    Ok([coordinate(c0, location)?, coordinate(c1, location)?])
}

fn g2<E: Curve>(raw: &[Vec<String>], location: &str) -> Result<E::G2Affine> {
    let [x, y, z] = raw else {
        return Err(MalformedInput::encoding(
            location,
            format!("expected 3 coordinate pairs, found {}", raw.len()),
        ));
    };
    let [z0, z1] = pair::<E>(z, location)?;
    if z0.is_zero() && z1.is_zero() {
        return Ok(E::G2Affine::zero());
    }
    if !(z0.is_one() && z1.is_zero()) {
        return Err(MalformedInput::encoding(location, "z must be [0, 0] or [1, 0]"));
    }
    Ok(E::g2_from_xy(pair::<E>(x, location)?, pair::<E>(y, location)?))
}

pub(crate) fn check_curve<E: Curve>(name: &str) -> Result<()> {
    match CurveId::from_name(name) {
        Some(id) if id == E::ID => Ok(()),
        Some(_) => Err(MalformedInput::CurveMismatch {
            expected: E::ID,
            found: name.to_string(),
        }),
        None => Err(MalformedInput::UnsupportedCurve(name.to_string())),
    }
}

fn check_protocol(protocol: &str) -> Result<()> {
    if protocol.eq_ignore_ascii_case(PROTOCOL) {
        Ok(())
    } else {
        Err(MalformedInput::UnsupportedProtocol(protocol.to_string()))
    }
}

pub fn decode_verification_key<E: Curve>(raw: &SnarkjsVerificationKey) -> Result<VerificationKey<E>> {
    check_protocol(&raw.protocol)?;
    check_curve::<E>(&raw.curve)?;
    if let Some(n) = raw.n_public {
        if n.checked_add(1) != Some(raw.ic.len()) {
            return Err(MalformedInput::encoding(
                "nPublic",
                format!("declares {n} public inputs but IC has {} points", raw.ic.len()),
            ));
        }
    }

    let ic = raw
        .ic
        .iter()
        .enumerate()
        .map(|(i, p)| g1::<E>(p, &format!("IC[{i}]")))
        .collect::<Result<Vec<_>>>()?;
    let vk = VerificationKey::from_affine(
        g1::<E>(&raw.vk_alpha_1, "vk_alpha_1")?,
        g2::<E>(&raw.vk_beta_2, "vk_beta_2")?,
        g2::<E>(&raw.vk_gamma_2, "vk_gamma_2")?,
        g2::<E>(&raw.vk_delta_2, "vk_delta_2")?,
        ic,
    )?;
    debug!(curve = %E::ID, n_public = vk.n_public(), "decoded snarkjs verification key");
    Ok(vk)
}

pub fn decode_proof<E: Curve>(raw: &SnarkjsProof) -> Result<Proof<E>> {
    if let Some(protocol) = &raw.protocol {
        check_protocol(protocol)?;
    }
    if let Some(curve) = &raw.curve {
        check_curve::<E>(curve)?;
    }
    Proof::from_affine(
        g1::<E>(&raw.pi_a, "pi_a")?,
        g2::<E>(&raw.pi_b, "pi_b")?,
        g1::<E>(&raw.pi_c, "pi_c")?,
    )
}

pub fn decode_public_signals<E: Curve>(raw: &[Signal]) -> Result<PublicSignals<E>> {
    let values = raw
        .iter()
        .enumerate()
        .map(|(i, s)| match s {
            Signal::Number(n) => Ok((*n).into()),
            Signal::Text(t) => parse_biguint(t).ok_or_else(|| {
                MalformedInput::encoding(
                    format!("public[{i}]"),
                    format!("not an unsigned integer: {t:?}"),
                )
            }),
        })
        .collect::<Result<Vec<BigUint>>>()?;
    PublicSignals::from_biguints(&values)
}

fn from_json<T: serde::de::DeserializeOwned>(json: &str, location: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| MalformedInput::encoding(location, e))
}

pub fn parse_verification_key<E: Curve>(json: &str) -> Result<VerificationKey<E>> {
    decode_verification_key(&from_json(json, "verification key")?)
}

pub fn parse_proof<E: Curve>(json: &str) -> Result<Proof<E>> {
    decode_proof(&from_json(json, "proof")?)
}

pub fn parse_public_signals<E: Curve>(json: &str) -> Result<PublicSignals<E>> {
    decode_public_signals(&from_json::<Vec<Signal>>(json, "public signals")?)
}

// ── Encoding ──

fn decimal<F: PrimeField>(value: &F) -> String {
    field_to_biguint(value).to_string()
}

pub fn encode_g1<E: Curve>(point: &G1Point<E>) -> Vec<String> {
    match E::g1_xy(point.as_affine()) {
        Some((x, y)) => vec![decimal(&x), decimal(&y), "1".into()],
        None => vec!["0".into(), "1".into(), "0".into()],
    }
}

pub fn encode_g2<E: Curve>(point: &G2Point<E>) -> Vec<Vec<String>> {
    let pair = |c: [E::BaseField; 2]| vec![decimal(&c[0]), decimal(&c[1])];
    match E::g2_xy(point.as_affine()) {
        Some((x, y)) => vec![pair(x), pair(y), vec!["1".into(), "0".into()]],
        None => vec![
            vec!["0".into(), "0".into()],
            vec!["1".into(), "0".into()],
            vec!["0".into(), "0".into()],
        ],
    }
}

pub fn encode_verification_key<E: Curve>(vk: &VerificationKey<E>) -> SnarkjsVerificationKey {
    SnarkjsVerificationKey {
        protocol: PROTOCOL.into(),
        curve: E::ID.snarkjs_name().into(),
        n_public: Some(vk.n_public()),
        vk_alpha_1: encode_g1(vk.alpha_g1()),
        vk_beta_2: encode_g2(vk.beta_g2()),
        vk_gamma_2: encode_g2(vk.gamma_g2()),
        vk_delta_2: encode_g2(vk.delta_g2()),
        ic: vk.ic().iter().map(encode_g1).collect(),
    }
}

pub fn encode_proof<E: Curve>(proof: &Proof<E>) -> SnarkjsProof {
    SnarkjsProof {
        pi_a: encode_g1(proof.a()),
        pi_b: encode_g2(proof.b()),
        pi_c: encode_g1(proof.c()),
        protocol: Some(PROTOCOL.into()),
        curve: Some(E::ID.snarkjs_name().into()),
    }
}

pub fn encode_public_signals<E: Curve>(signals: &PublicSignals<E>) -> Vec<String> {
    signals.as_slice().iter().map(decimal).collect()
}
