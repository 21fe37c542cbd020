// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Strict integer ↔ field-element conversion.
//!
//! `PrimeField::from_str` and friends reduce modulo p. Serialized inputs
//! must never be reduced: a value `>= p` is a different encoding, so these
//! helpers refuse it instead.

use ark_ff::{BigInteger, PrimeField};
use num_bigint::BigUint;

pub fn modulus<F: PrimeField>() -> BigUint {
    BigUint::from_bytes_le(&F::MODULUS.to_bytes_le())
}

/// `None` when `value >= p`.
pub fn field_from_biguint<F: PrimeField>(value: &BigUint) -> Option<F> {
    if *value >= modulus::<F>() {
        return None;
    }
    Some(F::from_le_bytes_mod_order(&value.to_bytes_le()))
}

pub fn field_to_biguint<F: PrimeField>(value: &F) -> BigUint {
    BigUint::from_bytes_le(&value.into_bigint().to_bytes_le())
}

/// Parse an unsigned integer written in base 10, or base 16 with a `0x`
/// prefix. Signs, separators and whitespace are refused.
pub fn parse_biguint(s: &str) -> Option<BigUint> {
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (s, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigUint::parse_bytes(digits.as_bytes(), radix)
}

/// Interpret big-endian bytes as an integer and lift it into the field.
pub fn field_from_be_bytes<F: PrimeField>(bytes: &[u8]) -> Option<F> {
    field_from_biguint(&BigUint::from_bytes_be(bytes))
}
