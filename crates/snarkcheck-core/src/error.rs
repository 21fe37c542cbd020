// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for malformed verifier inputs.
//!
//! A proof that decodes cleanly but fails the pairing check is *not* an
//! error: [`verify`](crate::verify) returns `Ok(false)` for it. Everything
//! in [`MalformedInput`] means the inputs never reached the pairing check.

use crate::curve::CurveId;

/// Why a candidate curve point was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PointFault {
    #[error("point is not on the curve")]
    NotOnCurve,

    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,
}

impl PointFault {
    /// Attach the location of the offending point (e.g. `"vk.ic[2]"`).
    pub fn at(self, location: impl Into<String>) -> MalformedInput {
        let location = location.into();
        match self {
            PointFault::NotOnCurve => MalformedInput::NotOnCurve { location },
            PointFault::NotInSubgroup => MalformedInput::NotInSubgroup { location },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedInput {
    #[error("expected {expected} public signals, got {actual}")]
    SignalCount { expected: usize, actual: usize },

    #[error("public signal {index} is not below the scalar field modulus")]
    ScalarOutOfRange { index: usize },

    #[error("{location}: point is not on the curve")]
    NotOnCurve { location: String },

    #[error("{location}: point is not in the prime-order subgroup")]
    NotInSubgroup { location: String },

    #[error("verification key has no IC points")]
    EmptyIc,

    #[error("verification key {location} is the identity")]
    DegenerateKey { location: &'static str },

    #[error("{location}: {reason}")]
    Encoding { location: String, reason: String },

    #[error("unsupported curve: {0}")]
    UnsupportedCurve(String),

    #[error("curve mismatch: expected {expected}, found {found}")]
    CurveMismatch { expected: CurveId, found: String },

    #[error("unsupported protocol: {0} (only groth16)")]
    UnsupportedProtocol(String),
}

impl MalformedInput {
    pub fn encoding(location: impl Into<String>, reason: impl ToString) -> Self {
        MalformedInput::Encoding {
            location: location.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = core::result::Result<T, MalformedInput>;
