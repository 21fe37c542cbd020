// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! snarkcheck-core: Groth16 proof verification over BN254 and BLS12-381.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`curve`] | `Curve` hooks over arkworks pairing engines |
//! | [`types`] | Validated points, verification key, proof, public signals |
//! | [`verifier`] | The four-pairing check |
//! | [`prepared`] | Precomputed keys and the memoizing [`Verifier`] |
//! | [`field`] | Non-reducing integer ↔ field conversion |

pub mod curve;
pub mod error;
pub mod field;
pub mod prepared;
pub mod types;
pub mod verifier;

pub use curve::{Curve, CurveId};
pub use error::{MalformedInput, PointFault, Result};
pub use prepared::{PreparedKey, Verifier, DEFAULT_CACHE_CAPACITY};
pub use types::{Fingerprint, G1Point, G2Point, Proof, PublicSignals, VerificationKey};
pub use verifier::verify;

pub use ark_bls12_381::Bls12_381;
pub use ark_bn254::Bn254;
