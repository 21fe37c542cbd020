// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # snarkcheck-codec
//!
//! Reads and writes the three artifacts a Groth16 verification needs
//! (verification key, proof, public signals) in two JSON layouts.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`snarkjs`] | `verification_key.json` / `proof.json` / `public.json` as snarkjs writes them |
//! | [`canonical`] | Arkworks canonical point encodings as hex strings |
//!
//! Every decoder returns [`MalformedInput`] on failure, the same error the
//! verifier itself uses, so callers can tell "bad input" from "proof
//! rejected" with one match.
//!
//! ## Typical flow
//!
//! ```rust,no_run
//! use snarkcheck_codec::{decode_bundle, Format};
//! use snarkcheck_core::{verify, Bn254};
//!
//! # fn example(vk: &str, proof: &str, public: &str) -> snarkcheck_core::Result<bool> {
//! let format = Format::detect(vk)?;
//! let bundle = decode_bundle::<Bn254>(format, vk, proof, public)?;
//! verify(&bundle.vk, &bundle.signals, &bundle.proof)
//! # }
//! ```

use core::fmt;

use serde_json::Value;

use snarkcheck_core::{Curve, CurveId, MalformedInput, Proof, PublicSignals, Result, VerificationKey};

pub mod canonical;
pub mod snarkjs;

/// Which JSON layout the files are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Snarkjs,
    Canonical,
}

impl Format {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "snarkjs" => Some(Format::Snarkjs),
            "hex" | "canonical" | "arkworks" => Some(Format::Canonical),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Snarkjs => "snarkjs",
            Format::Canonical => "hex",
        }
    }

    /// Sniff the layout from the verification key's field names.
    pub fn detect(vk_json: &str) -> Result<Self> {
        let value = object(vk_json)?;
        if value.get("vk_alpha_1").is_some() {
            Ok(Format::Snarkjs)
        } else if value.get("alpha_g1").is_some() {
            Ok(Format::Canonical)
        } else {
            Err(MalformedInput::encoding(
                "verification key",
                "neither vk_alpha_1 nor alpha_g1 present",
            ))
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn object(json: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| MalformedInput::encoding("verification key", e))?;
    if !value.is_object() {
        return Err(MalformedInput::encoding(
            "verification key",
            "expected a JSON object",
        ));
    }
    Ok(value)
}

/// Read the `curve` field of a verification key in either layout.
pub fn detect_curve(vk_json: &str) -> Result<CurveId> {
    let value = object(vk_json)?;
    let name = value
        .get("curve")
        .and_then(Value::as_str)
        .ok_or_else(|| MalformedInput::encoding("curve", "missing or not a string"))?;
    CurveId::from_name(name).ok_or_else(|| MalformedInput::UnsupportedCurve(name.to_string()))
}

/// A decoded, validated (key, proof, signals) triple.
#[derive(Clone, Debug)]
pub struct Bundle<E: Curve> {
    pub vk: VerificationKey<E>,
    pub proof: Proof<E>,
    pub signals: PublicSignals<E>,
}

pub fn decode_verification_key<E: Curve>(format: Format, json: &str) -> Result<VerificationKey<E>> {
    match format {
        Format::Snarkjs => snarkjs::parse_verification_key(json),
        Format::Canonical => canonical::parse_verification_key(json),
    }
}

pub fn decode_bundle<E: Curve>(
    format: Format,
    vk_json: &str,
    proof_json: &str,
    public_json: &str,
) -> Result<Bundle<E>> {
    let bundle = match format {
        Format::Snarkjs => Bundle {
            vk: snarkjs::parse_verification_key(vk_json)?,
            proof: snarkjs::parse_proof(proof_json)?,
            signals: snarkjs::parse_public_signals(public_json)?,
        },
        Format::Canonical => Bundle {
            vk: canonical::parse_verification_key(vk_json)?,
            proof: canonical::parse_proof(proof_json)?,
            signals: canonical::parse_public_signals(public_json)?,
        },
    };
    tracing::debug!(%format, curve = %E::ID, signals = bundle.signals.len(), "decoded bundle");
    Ok(bundle)
}

/// The three files, pretty-printed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedBundle {
    pub vk: String,
    pub proof: String,
    pub public: String,
}

pub fn encode_bundle<E: Curve>(
    format: Format,
    bundle: &Bundle<E>,
) -> serde_json::Result<EncodedBundle> {
    match format {
        Format::Snarkjs => Ok(EncodedBundle {
            vk: serde_json::to_string_pretty(&snarkjs::encode_verification_key(&bundle.vk))?,
            proof: serde_json::to_string_pretty(&snarkjs::encode_proof(&bundle.proof))?,
            public: serde_json::to_string_pretty(&snarkjs::encode_public_signals(
                &bundle.signals,
            ))?,
        }),
        Format::Canonical => Ok(EncodedBundle {
            vk: serde_json::to_string_pretty(&canonical::encode_verification_key(&bundle.vk))?,
            proof: serde_json::to_string_pretty(&canonical::encode_proof(&bundle.proof))?,
            public: serde_json::to_string_pretty(&canonical::encode_public_signals(
                &bundle.signals,
            ))?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names() {
        assert_eq!(Format::from_name("snarkjs"), Some(Format::Snarkjs));
        assert_eq!(Format::from_name("HEX"), Some(Format::Canonical));
        assert_eq!(Format::from_name("arkworks"), Some(Format::Canonical));
        assert_eq!(Format::from_name("gnark"), None);
        assert_eq!(Format::Canonical.to_string(), "hex");
    }

    #[test]
    fn detect_by_field_names() {
        assert_eq!(
            Format::detect(r#"{"vk_alpha_1": [], "curve": "bn128"}"#),
            Ok(Format::Snarkjs)
        );
        assert_eq!(
            Format::detect(r#"{"alpha_g1": "00", "curve": "bn128"}"#),
            Ok(Format::Canonical)
        );
        assert!(Format::detect(r#"{"curve": "bn128"}"#).is_err());
        assert!(Format::detect("[1, 2]").is_err());
        assert!(Format::detect("not json").is_err());
    }

    #[test]
    fn detect_curve_names() {
        assert_eq!(detect_curve(r#"{"curve": "bn128"}"#), Ok(CurveId::Bn254));
        assert_eq!(
            detect_curve(r#"{"curve": "BLS12-381"}"#),
            Ok(CurveId::Bls12_381)
        );
        assert_eq!(
            detect_curve(r#"{"curve": "secp256k1"}"#),
            Err(MalformedInput::UnsupportedCurve("secp256k1".into()))
        );
        assert!(matches!(
            detect_curve(r#"{"protocol": "groth16"}"#),
            Err(MalformedInput::Encoding { .. })
        ));
    }
}
