// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! File-level tests: honest proofs written out in both layouts, read back,
//! and checked.

use ark_bls12_381::Bls12_381;
use ark_bn254::Bn254;
use snarkcheck_codec::{
    canonical, decode_bundle, detect_curve, encode_bundle, snarkjs, Bundle, EncodedBundle, Format,
};
use snarkcheck_core::{
    verify, Curve, CurveId, MalformedInput, Proof, PublicSignals, VerificationKey, Verifier,
};
use snarkcheck_testkit::{square_fixture, sum_fixture, Fixture};

fn bundle<E: Curve>(f: &Fixture<E>) -> Bundle<E> {
    Bundle {
        vk: VerificationKey::from_arkworks(&f.vk).unwrap(),
        proof: Proof::from_arkworks(&f.proof).unwrap(),
        signals: PublicSignals::new(f.public_inputs.clone()),
    }
}

fn files<E: Curve>(format: Format, f: &Fixture<E>) -> EncodedBundle {
    encode_bundle(format, &bundle(f)).unwrap()
}

fn check<E: Curve>(format: Format, files: &EncodedBundle) -> snarkcheck_core::Result<bool> {
    let b = decode_bundle::<E>(format, &files.vk, &files.proof, &files.public)?;
    verify(&b.vk, &b.signals, &b.proof)
}

// ── Toy circuit x * x == y through both layouts ──

#[test]
fn snarkjs_square_accepts_nine_rejects_sixteen() {
    let mut f = files(Format::Snarkjs, &square_fixture::<Bn254>(3, 1));
    assert_eq!(f.public.split_whitespace().collect::<String>(), r#"["9"]"#);
    assert_eq!(check::<Bn254>(Format::Snarkjs, &f), Ok(true));

    f.public = r#"["16"]"#.into();
    assert_eq!(check::<Bn254>(Format::Snarkjs, &f), Ok(false));
}

#[test]
fn hex_square_accepts_nine_rejects_sixteen() {
    let mut f = files(Format::Canonical, &square_fixture::<Bn254>(3, 2));
    assert_eq!(check::<Bn254>(Format::Canonical, &f), Ok(true));

    f.public = r#"["0x10"]"#.into();
    assert_eq!(check::<Bn254>(Format::Canonical, &f), Ok(false));
}

#[test]
fn bls12_381_through_both_layouts() {
    let fixture = square_fixture::<Bls12_381>(3, 3);
    for format in [Format::Snarkjs, Format::Canonical] {
        let f = files(format, &fixture);
        assert_eq!(detect_curve(&f.vk), Ok(CurveId::Bls12_381));
        assert_eq!(Format::detect(&f.vk), Ok(format));
        assert_eq!(check::<Bls12_381>(format, &f), Ok(true), "{format}");
    }
}

#[test]
fn layouts_convert_into_each_other() {
    let fixture = sum_fixture::<Bn254>(&[1300, 2300, 4234], 4);
    let snark = files(Format::Snarkjs, &fixture);
    let decoded =
        decode_bundle::<Bn254>(Format::Snarkjs, &snark.vk, &snark.proof, &snark.public).unwrap();
    let hex = encode_bundle(Format::Canonical, &decoded).unwrap();
    let back =
        decode_bundle::<Bn254>(Format::Canonical, &hex.vk, &hex.proof, &hex.public).unwrap();
    assert_eq!(back.vk, decoded.vk);
    assert_eq!(back.proof, decoded.proof);
    assert_eq!(back.signals, decoded.signals);
    assert_eq!(verify(&back.vk, &back.signals, &back.proof), Ok(true));
}

// ── Malformed files ──

#[test]
fn wrong_signal_count_is_malformed() {
    let mut f = files(Format::Snarkjs, &square_fixture::<Bn254>(3, 5));
    f.public = r#"["9", "9"]"#.into();
    assert_eq!(
        check::<Bn254>(Format::Snarkjs, &f),
        Err(MalformedInput::SignalCount {
            expected: 1,
            actual: 2
        })
    );
}

#[test]
fn n_public_disagreeing_with_ic_is_malformed() {
    let b = bundle(&square_fixture::<Bn254>(3, 6));
    let mut vk = snarkjs::encode_verification_key(&b.vk);
    vk.n_public = Some(2);
    let err = snarkjs::decode_verification_key::<Bn254>(&vk).unwrap_err();
    assert!(matches!(err, MalformedInput::Encoding { ref location, .. } if location == "nPublic"));
}

#[test]
fn huge_n_public_is_malformed() {
    let b = bundle(&square_fixture::<Bn254>(3, 6));
    let mut vk = snarkjs::encode_verification_key(&b.vk);
    vk.n_public = Some(usize::MAX);
    let err = snarkjs::decode_verification_key::<Bn254>(&vk).unwrap_err();
    assert!(matches!(err, MalformedInput::Encoding { ref location, .. } if location == "nPublic"));

    let json = serde_json::to_string(&vk).unwrap();
    assert!(snarkjs::parse_verification_key::<Bn254>(&json).is_err());
}

#[test]
fn proof_from_other_curve_is_malformed() {
    let vk = files(Format::Snarkjs, &square_fixture::<Bn254>(3, 7)).vk;
    let other = files(Format::Snarkjs, &square_fixture::<Bls12_381>(3, 7));
    let err = decode_bundle::<Bn254>(Format::Snarkjs, &vk, &other.proof, &other.public)
        .unwrap_err();
    assert!(matches!(err, MalformedInput::CurveMismatch { .. }), "{err}");
}

#[test]
fn wrong_protocol_is_malformed() {
    let f = files(Format::Snarkjs, &square_fixture::<Bn254>(3, 8));
    let vk = f.vk.replace("groth16", "plonk");
    assert_eq!(
        snarkjs::parse_verification_key::<Bn254>(&vk).unwrap_err(),
        MalformedInput::UnsupportedProtocol("plonk".into())
    );
}

#[test]
fn truncated_json_is_malformed() {
    let f = files(Format::Snarkjs, &square_fixture::<Bn254>(3, 9));
    let cut = &f.proof[..f.proof.len() / 2];
    assert!(matches!(
        snarkjs::parse_proof::<Bn254>(cut),
        Err(MalformedInput::Encoding { .. })
    ));
}

/// Flip every byte of the serialized proof in turn. No single-byte change
/// may turn into an accepted proof: each must decode to a malformed input
/// or be rejected by the pairing check.
#[test]
fn mutated_proof_bytes_never_accept() {
    let fixture = square_fixture::<Bn254>(3, 10);
    let b = bundle(&fixture);
    let proof = canonical::encode_proof(&b.proof);
    let verifier = Verifier::new();

    let fields = [&proof.a, &proof.b, &proof.c];
    for (which, original) in fields.iter().enumerate() {
        let bytes = hex::decode(original).unwrap();
        for i in 0..bytes.len() {
            let mut mutated = bytes.clone();
            mutated[i] ^= 0x01;
            let mut candidate = proof.clone();
            let encoded = hex::encode(&mutated);
            match which {
                0 => candidate.a = encoded,
                1 => candidate.b = encoded,
                _ => candidate.c = encoded,
            }
            let outcome = canonical::decode_proof::<Bn254>(&candidate)
                .and_then(|p| verifier.verify(&b.vk, &b.signals, &p));
            assert_ne!(outcome, Ok(true), "field {which}, byte {i} accepted");
        }
    }
    assert_eq!(verifier.verify(&b.vk, &b.signals, &b.proof), Ok(true));
}
