use anyhow::Result;
use colored::Colorize;
use snarkcheck_codec::{decode_bundle, detect_curve, Format};
use snarkcheck_core::{verify, Bls12_381, Bn254, Curve, CurveId};

use super::{malformed, resolve_format, Files, EXIT_OK, EXIT_REJECTED};
use crate::output;
use crate::Inputs;

struct Outcome {
    curve: CurveId,
    format: Format,
    n_public: usize,
    accepted: bool,
}

fn check_as<E: Curve>(format: Format, files: &Files) -> snarkcheck_core::Result<(usize, bool)> {
    let bundle = decode_bundle::<E>(format, &files.vk, &files.proof, &files.public)?;
    let accepted = verify(&bundle.vk, &bundle.signals, &bundle.proof)?;
    Ok((bundle.vk.n_public(), accepted))
}

fn check(inputs: &Inputs, files: &Files) -> snarkcheck_core::Result<Outcome> {
    let format = resolve_format(inputs.format, &files.vk)?;
    let curve = detect_curve(&files.vk)?;
    let (n_public, accepted) = match curve {
        CurveId::Bn254 => check_as::<Bn254>(format, files)?,
        CurveId::Bls12_381 => check_as::<Bls12_381>(format, files)?,
    };
    Ok(Outcome {
        curve,
        format,
        n_public,
        accepted,
    })
}

pub fn run(inputs: &Inputs) -> Result<u8> {
    let files = Files::read(inputs)?;
    let outcome = match check(inputs, &files) {
        Ok(outcome) => outcome,
        Err(err) => return Ok(malformed(&err)),
    };
    tracing::info!(
        curve = %outcome.curve,
        format = %outcome.format,
        accepted = outcome.accepted,
        "verification finished"
    );

    if output::is_json() {
        output::json_output(serde_json::json!({
            "accepted": outcome.accepted,
            "malformed": false,
            "curve": outcome.curve.snarkjs_name(),
            "format": outcome.format.name(),
            "n_public": outcome.n_public,
        }));
    } else {
        output::label("curve", &outcome.curve.to_string());
        output::label("format", outcome.format.name());
        output::label("public inputs", &outcome.n_public.to_string());
        if outcome.accepted {
            output::success("proof accepted");
        } else {
            output::error_msg(&format!("proof {}", "rejected".bold()));
        }
    }

    Ok(if outcome.accepted {
        EXIT_OK
    } else {
        EXIT_REJECTED
    })
}
