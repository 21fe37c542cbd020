use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use snarkcheck_codec::{decode_bundle, detect_curve, encode_bundle, EncodedBundle, Format};
use snarkcheck_core::{Bls12_381, Bn254, Curve, CurveId};

use super::{malformed, resolve_format, Files, EXIT_OK};
use crate::output;
use crate::Inputs;

fn convert_as<E: Curve>(
    from: Format,
    to: Format,
    files: &Files,
) -> Result<snarkcheck_core::Result<EncodedBundle>> {
    let bundle = match decode_bundle::<E>(from, &files.vk, &files.proof, &files.public) {
        Ok(bundle) => bundle,
        Err(err) => return Ok(Err(err)),
    };
    let encoded = encode_bundle(to, &bundle).context("failed to encode output")?;
    Ok(Ok(encoded))
}

fn write(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, format!("{contents}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

pub fn run(inputs: &Inputs, to: Format, out_dir: &Path) -> Result<u8> {
    let files = Files::read(inputs)?;
    let located = resolve_format(inputs.format, &files.vk)
        .and_then(|from| Ok((from, detect_curve(&files.vk)?)));
    let (from, curve) = match located {
        Ok(located) => located,
        Err(err) => return Ok(malformed(&err)),
    };

    let converted = match curve {
        CurveId::Bn254 => convert_as::<Bn254>(from, to, &files)?,
        CurveId::Bls12_381 => convert_as::<Bls12_381>(from, to, &files)?,
    };
    let encoded = match converted {
        Ok(encoded) => encoded,
        Err(err) => return Ok(malformed(&err)),
    };

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let written = [
        write(out_dir, "verification_key.json", &encoded.vk)?,
        write(out_dir, "proof.json", &encoded.proof)?,
        write(out_dir, "public.json", &encoded.public)?,
    ];
    tracing::info!(%curve, %from, %to, dir = %out_dir.display(), "exported");

    if output::is_json() {
        output::json_output(serde_json::json!({
            "curve": curve.snarkjs_name(),
            "from": from.name(),
            "to": to.name(),
            "files": written.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        }));
    } else {
        output::success(&format!("exported {from} -> {to}"));
        for path in &written {
            output::label("wrote", &path.display().to_string());
        }
    }
    Ok(EXIT_OK)
}
