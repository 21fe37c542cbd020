// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Arkworks canonical hex JSON.
//!
//! # Byte order
//!
//! - **G1/G2 points**: arkworks canonical form (LE). Compressed and
//!   uncompressed encodings are both accepted, told apart by length.
//!   Encoding always writes uncompressed.
//! - **Scalars**: `0x`-prefixed big-endian, written as 32 bytes. Shorter
//!   non-empty strings are read as left-padded; longer ones are refused.
//!
//! Points are deserialized without arkworks' own checks and then validated
//! by the core types, so an off-curve point reports as
//! [`MalformedInput::NotOnCurve`] whichever codec it came through.

use ark_ec::AffineRepr;
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use snarkcheck_core::{
    Curve, G1Point, G2Point, MalformedInput, Proof, PublicSignals, Result, VerificationKey,
};

use crate::snarkjs::check_curve;

/// Serialized verification key (hex strings)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexVerificationKey {
    pub curve: String,
    pub alpha_g1: String,
    pub beta_g2: String,
    pub gamma_g2: String,
    pub delta_g2: String,
    /// ic\[0\] = constant term, ic\[1..\] = public input coefficients
    pub ic: Vec<String>,
}

/// Serialized Groth16 proof (hex strings)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HexProof {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<String>,
    pub a: String,
    pub b: String,
    pub c: String,
}

// ── Decoding ──

fn bytes(raw: &str, location: &str) -> Result<Vec<u8>> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    hex::decode(digits).map_err(|e| MalformedInput::encoding(location, format!("invalid hex: {e}")))
}

/// Decode one affine point, picking compressed or uncompressed by length.
fn point<P: AffineRepr>(raw: &str, location: &str) -> Result<P> {
    let bytes = bytes(raw, location)?;
    let zero = P::zero();
    let compress = if bytes.len() == zero.compressed_size() {
        Compress::Yes
    } else if bytes.len() == zero.uncompressed_size() {
        Compress::No
    } else {
        return Err(MalformedInput::encoding(
            location,
            format!(
                "expected {} or {} bytes, found {}",
                zero.compressed_size(),
                zero.uncompressed_size(),
                bytes.len()
            ),
        ));
    };
    P::deserialize_with_mode(bytes.as_slice(), compress, Validate::No)
        .map_err(|e| MalformedInput::encoding(location, e))
}

pub fn decode_verification_key<E: Curve>(raw: &HexVerificationKey) -> Result<VerificationKey<E>> {
    check_curve::<E>(&raw.curve)?;
    let ic = raw
        .ic
        .iter()
        .enumerate()
        .map(|(i, p)| point::<E::G1Affine>(p, &format!("ic[{i}]")))
        .collect::<Result<Vec<_>>>()?;
    let vk = VerificationKey::from_affine(
        point(&raw.alpha_g1, "alpha_g1")?,
        point(&raw.beta_g2, "beta_g2")?,
        point(&raw.gamma_g2, "gamma_g2")?,
        point(&raw.delta_g2, "delta_g2")?,
        ic,
    )?;
    debug!(curve = %E::ID, n_public = vk.n_public(), "decoded hex verification key");
    Ok(vk)
}

pub fn decode_proof<E: Curve>(raw: &HexProof) -> Result<Proof<E>> {
    if let Some(curve) = &raw.curve {
        check_curve::<E>(curve)?;
    }
    Proof::from_affine(point(&raw.a, "a")?, point(&raw.b, "b")?, point(&raw.c, "c")?)
}

pub const SCALAR_BYTES: usize = 32;

fn scalar_bytes(raw: &str, location: &str) -> Result<Vec<u8>> {
    let bytes = bytes(raw, location)?;
    if bytes.is_empty() {
        return Err(MalformedInput::encoding(location, "empty scalar"));
    }
    if bytes.len() > SCALAR_BYTES {
        return Err(MalformedInput::encoding(
            location,
            format!("scalar longer than {SCALAR_BYTES} bytes: {}", bytes.len()),
        ));
    }
    Ok(bytes)
}

pub fn decode_public_signals<E: Curve>(raw: &[String]) -> Result<PublicSignals<E>> {
    let values = raw
        .iter()
        .enumerate()
        .map(|(i, s)| scalar_bytes(s, &format!("public[{i}]")))
        .collect::<Result<Vec<_>>>()?;
    PublicSignals::from_be_bytes(&values)
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
    decode_public_signals(&from_json::<Vec<String>>(json, "public signals")?)
}

// ── Encoding ──

fn uncompressed(point: &impl CanonicalSerialize) -> String {
    let mut bytes = Vec::new();
    point
        .serialize_uncompressed(&mut bytes)
        .expect("serializing into a Vec cannot fail");
    hex::encode(&bytes)
}

pub fn encode_g1<E: Curve>(point: &G1Point<E>) -> String {
    uncompressed(point.as_affine())
}

pub fn encode_g2<E: Curve>(point: &G2Point<E>) -> String {
    uncompressed(point.as_affine())
}

/// Big-endian hex with `0x` prefix.
pub fn encode_scalar<F: PrimeField>(value: &F) -> String {
    format!("0x{}", hex::encode(value.into_bigint().to_bytes_be()))
}

pub fn encode_verification_key<E: Curve>(vk: &VerificationKey<E>) -> HexVerificationKey {
    HexVerificationKey {
        curve: E::ID.snarkjs_name().into(),
        alpha_g1: encode_g1(vk.alpha_g1()),
        beta_g2: encode_g2(vk.beta_g2()),
        gamma_g2: encode_g2(vk.gamma_g2()),
        delta_g2: encode_g2(vk.delta_g2()),
        ic: vk.ic().iter().map(encode_g1).collect(),
    }
}

pub fn encode_proof<E: Curve>(proof: &Proof<E>) -> HexProof {
    HexProof {
        curve: Some(E::ID.snarkjs_name().into()),
        a: encode_g1(proof.a()),
        b: encode_g2(proof.b()),
        c: encode_g1(proof.c()),
    }
}

pub fn encode_public_signals<E: Curve>(signals: &PublicSignals<E>) -> Vec<String> {
    signals.as_slice().iter().map(encode_scalar).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Bn254, Fq, Fr, G1Affine, G2Affine};
    use ark_ff::UniformRand;
    use snarkcheck_core::field::modulus;
    use snarkcheck_testkit::test_rng;

    fn compressed(point: &impl CanonicalSerialize) -> String {
        let mut bytes = Vec::new();
        point.serialize_compressed(&mut bytes).unwrap();
        hex::encode(bytes)
    }

    #[test]
    fn encode_scalar_length() {
        let fr = Fr::rand(&mut test_rng());
        let hex = encode_scalar(&fr);
        assert_eq!(hex.len(), 66); // "0x" + 64 hex chars
        assert!(hex[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn encode_scalar_zero() {
        let hex = encode_scalar(&Fr::from(0u64));
        assert!(hex.starts_with("0x"));
        assert!(hex[2..].chars().all(|c| c == '0'));
    }

    #[test]
    fn scalars_decode_with_or_without_prefix() {
        let raw = vec!["0x09".to_string(), "10".to_string(), encode_scalar(&Fr::from(7u64))];
        let s = decode_public_signals::<Bn254>(&raw).unwrap();
        assert_eq!(
            s.as_slice(),
            &[Fr::from(9u64), Fr::from(16u64), Fr::from(7u64)]
        );
    }

    #[test]
    fn scalar_at_modulus_refused() {
        let p = modulus::<Fr>().to_bytes_be();
        let raw = vec![encode_scalar(&Fr::from(1u64)), hex::encode(p)];
        let err = decode_public_signals::<Bn254>(&raw).unwrap_err();
        assert_eq!(err, MalformedInput::ScalarOutOfRange { index: 1 });
    }

    #[test]
    fn scalar_bad_hex() {
        let err = decode_public_signals::<Bn254>(&["0xzz".to_string()]).unwrap_err();
        assert!(matches!(err, MalformedInput::Encoding { ref location, .. } if location == "public[0]"));
    }

    #[test]
    fn empty_scalar_refused() {
        for raw in ["", "0x"] {
            let err = decode_public_signals::<Bn254>(&[raw.to_string()]).unwrap_err();
            assert_eq!(err, MalformedInput::encoding("public[0]", "empty scalar"));
        }
    }

    #[test]
    fn oversized_scalar_refused() {
        let padded = format!("0x00{}", &encode_scalar(&Fr::from(9u64))[2..]);
        let err = decode_public_signals::<Bn254>(&[padded]).unwrap_err();
        assert!(matches!(err, MalformedInput::Encoding { ref location, .. } if location == "public[0]"));
    }

    #[test]
    fn compressed_and_uncompressed_agree() {
        let g = G2Affine::generator();
        let a: G2Affine = point(&uncompressed(&g), "b").unwrap();
        let b: G2Affine = point(&compressed(&g), "b").unwrap();
        assert_eq!(a, g);
        assert_eq!(b, g);
    }

    #[test]
    fn wrong_length_refused() {
        let err = point::<G1Affine>("0x0102", "a").unwrap_err();
        assert!(matches!(err, MalformedInput::Encoding { ref location, .. } if location == "a"));
    }

    #[test]
    fn off_curve_point_classified() {
        let bad = Bn254::g1_from_xy(Fq::from(1u64), Fq::from(3u64));
        let proof = HexProof {
            curve: None,
            a: uncompressed(&bad),
            b: uncompressed(&G2Affine::generator()),
            c: uncompressed(&G1Affine::generator()),
        };
        assert_eq!(
            decode_proof::<Bn254>(&proof).unwrap_err(),
            MalformedInput::NotOnCurve {
                location: "proof.a".into()
            }
        );
    }

    #[test]
    fn proof_curve_must_match() {
        let g1 = uncompressed(&G1Affine::generator());
        let proof = HexProof {
            curve: Some("bls12381".into()),
            a: g1.clone(),
            b: uncompressed(&G2Affine::generator()),
            c: g1,
        };
        assert!(matches!(
            decode_proof::<Bn254>(&proof),
            Err(MalformedInput::CurveMismatch { .. })
        ));
    }
}
