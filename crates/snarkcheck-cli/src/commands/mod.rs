pub mod export;
pub mod inspect;
pub mod verify;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use snarkcheck_codec::Format;
use snarkcheck_core::MalformedInput;

use crate::output;
use crate::{FormatArg, Inputs};

pub const EXIT_OK: u8 = 0;
pub const EXIT_REJECTED: u8 = 1;
pub const EXIT_MALFORMED: u8 = 2;
pub const EXIT_ERROR: u8 = 3;

/// Contents of the three input files.
pub struct Files {
    pub vk: String,
    pub proof: String,
    pub public: String,
}

impl Files {
    pub fn read(inputs: &Inputs) -> Result<Self> {
        Ok(Self {
            vk: read(&inputs.vk, "verification key", "--vk", "SNARKCHECK_VK")?,
            proof: read(&inputs.proof, "proof", "--proof", "SNARKCHECK_PROOF")?,
            public: read(&inputs.public, "public signals", "--public", "SNARKCHECK_PUBLIC")?,
        })
    }
}

pub fn read(path: &Path, what: &str, flag: &str, env: &str) -> Result<String> {
    if !path.exists() {
        return Err(output::fail_with_hint(
            &format!("{what} not found: {}", path.display()),
            &format!("pass {flag} <path> or set {env}"),
        ));
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn resolve_format(arg: FormatArg, vk_json: &str) -> snarkcheck_core::Result<Format> {
    match arg.format() {
        Some(format) => Ok(format),
        None => Format::detect(vk_json),
    }
}

fn hint(err: &MalformedInput) -> Option<&'static str> {
    match err {
        MalformedInput::SignalCount { .. } => {
            Some("public.json must list one value per public input, in circuit order")
        }
        MalformedInput::CurveMismatch { .. } => {
            Some("the key and the proof were produced on different curves")
        }
        MalformedInput::Encoding { .. } => Some("check --format; auto-detection reads the key"),
        _ => None,
    }
}

/// Report input that never reached the pairing check.
pub fn malformed(err: &MalformedInput) -> u8 {
    tracing::debug!(error = %err, "malformed input");
    if output::is_json() {
        output::json_output(serde_json::json!({
            "accepted": false,
            "malformed": true,
            "error": err.to_string(),
        }));
    } else {
        output::error_msg(&format!("malformed input: {err}"));
        if let Some(hint) = hint(err) {
            output::info(&format!("hint: {hint}"));
        }
    }
    EXIT_MALFORMED
}
