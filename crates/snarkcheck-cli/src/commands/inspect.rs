use std::path::Path;

use anyhow::Result;
use snarkcheck_codec::{decode_verification_key, detect_curve, Format};
use snarkcheck_core::{Bls12_381, Bn254, Curve, CurveId, Fingerprint};

use super::{malformed, read, resolve_format, EXIT_OK};
use crate::output;
use crate::FormatArg;

fn summary_as<E: Curve>(format: Format, json: &str) -> snarkcheck_core::Result<(usize, Fingerprint)> {
    let vk = decode_verification_key::<E>(format, json)?;
    Ok((vk.n_public(), vk.fingerprint()))
}

pub fn run(path: &Path, format: FormatArg) -> Result<u8> {
    let json = read(path, "verification key", "--vk", "SNARKCHECK_VK")?;
    let summary = resolve_format(format, &json).and_then(|format| {
        let curve = detect_curve(&json)?;
        let (n_public, fingerprint) = match curve {
            CurveId::Bn254 => summary_as::<Bn254>(format, &json)?,
            CurveId::Bls12_381 => summary_as::<Bls12_381>(format, &json)?,
        };
        Ok((format, curve, n_public, fingerprint))
    });
    let (format, curve, n_public, fingerprint) = match summary {
        Ok(summary) => summary,
        Err(err) => return Ok(malformed(&err)),
    };

    if output::is_json() {
        output::json_output(serde_json::json!({
            "curve": curve.snarkjs_name(),
            "format": format.name(),
            "n_public": n_public,
            "fingerprint": fingerprint.to_hex(),
        }));
    } else {
        output::label("curve", &curve.to_string());
        output::label("format", format.name());
        output::label("public inputs", &n_public.to_string());
        output::label("fingerprint", &fingerprint.to_hex());
    }
    Ok(EXIT_OK)
}
