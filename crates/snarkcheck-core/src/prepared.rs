// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Key-derived precomputation and a memoizing verifier.
//!
//! [`PreparedKey`] fixes `e(alpha, beta)` and the negated, Miller-loop
//! prepared `gamma`/`delta`, so each check is one multi-Miller loop over
//! three pairs plus a final exponentiation:
//!
//! `ML(A,B) · ML(vk_x,-gamma) · ML(C,-delta)` ^ final `== e(alpha,beta)`
//!
//! [`Verifier`] caches prepared keys by [`Fingerprint`]. Results are the
//! same as [`verify`](crate::verify) whether or not a key was cached.

use std::collections::HashMap;
use std::sync::Arc;

use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::AffineRepr;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use crate::curve::Curve;
use crate::error::Result;
use crate::types::{Fingerprint, Proof, PublicSignals, VerificationKey};
use crate::verifier::{check_signal_count, prepare_inputs};

pub const DEFAULT_CACHE_CAPACITY: usize = 64;

pub struct PreparedKey<E: Curve> {
    vk: VerificationKey<E>,
    fingerprint: Fingerprint,
    alpha_beta: PairingOutput<E>,
    gamma_g2_neg: E::G2Prepared,
    delta_g2_neg: E::G2Prepared,
}

impl<E: Curve> PreparedKey<E> {
    pub fn new(vk: VerificationKey<E>) -> Self {
        let fingerprint = vk.fingerprint();
        Self::with_fingerprint(vk, fingerprint)
    }

    fn with_fingerprint(vk: VerificationKey<E>, fingerprint: Fingerprint) -> Self {
        let alpha_beta = E::pairing(*vk.alpha_g1().as_affine(), *vk.beta_g2().as_affine());
        let gamma_g2_neg = E::G2Prepared::from(-vk.gamma_g2().as_affine().into_group());
        let delta_g2_neg = E::G2Prepared::from(-vk.delta_g2().as_affine().into_group());
        Self {
            vk,
            fingerprint,
            alpha_beta,
            gamma_g2_neg,
            delta_g2_neg,
        }
    }

    pub fn verification_key(&self) -> &VerificationKey<E> {
        &self.vk
    }

    pub fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    #[instrument(skip_all, fields(curve = %E::ID, key = %self.fingerprint))]
    pub fn verify(&self, signals: &PublicSignals<E>, proof: &Proof<E>) -> Result<bool> {
        let vk_x = prepare_inputs(self.vk.ic(), signals)?;

        let g1 = [
            E::G1Prepared::from(*proof.a().as_affine()),
            E::G1Prepared::from(vk_x),
            E::G1Prepared::from(*proof.c().as_affine()),
        ];
        let g2 = [
            E::G2Prepared::from(*proof.b().as_affine()),
            self.gamma_g2_neg.clone(),
            self.delta_g2_neg.clone(),
        ];
        let accepted = E::final_exponentiation(E::multi_miller_loop(g1, g2))
            .is_some_and(|out| out == self.alpha_beta);

        debug!(accepted, "pairing check");
        Ok(accepted)
    }
}

/// Thread-safe verifier that memoizes [`PreparedKey`]s.
///
/// Concurrent misses on the same key each prepare it; the first insert
/// wins and the rest are discarded. Once `capacity` distinct keys are
/// cached, further keys are verified without being stored.
pub struct Verifier<E: Curve> {
    cache: RwLock<HashMap<Fingerprint, Arc<PreparedKey<E>>>>,
    capacity: usize,
}

impl<E: Curve> Default for Verifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Curve> Verifier<E> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    /// Fetch or build the prepared form of `vk`.
    pub fn prepare(&self, vk: &VerificationKey<E>) -> Arc<PreparedKey<E>> {
        let fingerprint = vk.fingerprint();
        if let Some(hit) = self.cache.read().get(&fingerprint) {
            if hit.verification_key() == vk {
                debug!(key = %fingerprint, "prepared key cache hit");
                return Arc::clone(hit);
            }
        }

        debug!(key = %fingerprint, "prepared key cache miss");
        let prepared = Arc::new(PreparedKey::with_fingerprint(vk.clone(), fingerprint));

        let mut cache = self.cache.write();
        if cache.len() >= self.capacity && !cache.contains_key(&fingerprint) {
            debug!(capacity = self.capacity, "prepared key cache full");
            return prepared;
        }
        let stored = cache
            .entry(fingerprint)
            .or_insert_with(|| Arc::clone(&prepared));
        if stored.verification_key() == vk {
            Arc::clone(stored)
        } else {
            prepared
        }
    }

    pub fn verify(
        &self,
        vk: &VerificationKey<E>,
        signals: &PublicSignals<E>,
        proof: &Proof<E>,
    ) -> Result<bool> {
        check_signal_count(vk.n_public(), signals.len())?;
        self.prepare(vk).verify(signals, proof)
    }

    pub fn cached_keys(&self) -> usize {
        self.cache.read().len()
    }

    pub fn clear(&self) {
        self.cache.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{G1Point, G2Point};
    use ark_bn254::{Bn254, G1Affine, G2Affine};
    use ark_ec::AffineRepr;

    fn key(n_public: usize) -> VerificationKey<Bn254> {
        let g1 = G1Point::new(G1Affine::generator()).unwrap();
        let g2 = G2Point::new(G2Affine::generator()).unwrap();
        VerificationKey::new(g1, g2, g2, g2, vec![g1; n_public + 1]).unwrap()
    }

    #[test]
    fn prepare_is_memoized() {
        let verifier = Verifier::<Bn254>::new();
        let vk = key(1);
        let first = verifier.prepare(&vk);
        let second = verifier.prepare(&vk);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(verifier.cached_keys(), 1);
    }

    #[test]
    fn verifier_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Verifier<Bn254>>();

        let verifier = Verifier::<Bn254>::new();
        let vk = key(1);
        let prepared: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| verifier.prepare(&vk))).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(prepared.iter().all(|p| p.verification_key() == &vk));
        assert_eq!(verifier.cached_keys(), 1);
    }

    #[test]
    fn capacity_bounds_cache() {
        let verifier = Verifier::<Bn254>::with_capacity(1);
        verifier.prepare(&key(1));
        verifier.prepare(&key(2));
        assert_eq!(verifier.cached_keys(), 1);
        verifier.clear();
        assert_eq!(verifier.cached_keys(), 0);
    }

    #[test]
    fn count_checked_before_preparing() {
        let verifier = Verifier::<Bn254>::new();
        let vk = key(2);
        let g1 = G1Point::new(G1Affine::generator()).unwrap();
        let g2 = G2Point::new(G2Affine::generator()).unwrap();
        let proof = Proof::new(g1, g2, g1);
        assert!(verifier
            .verify(&vk, &PublicSignals::new(vec![]), &proof)
            .is_err());
        assert_eq!(verifier.cached_keys(), 0);
    }
}
