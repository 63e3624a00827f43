// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hashing and relocation randomness for the Manu Cuckoo Filter.
//!
//! Each item is hashed exactly once into 32 bits. The fingerprint and the
//! primary bucket index are both carved out of that value, and the alternate
//! index is derived from the primary index and the fingerprint alone
//! (partial-key cuckoo hashing), so stored fingerprints can be moved between
//! their two buckets without the original key.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data_structures::manu_cuckoo_filter::bucket::{Fingerprint, EMPTY_SLOT};

/// FNV-1a 32-bit offset basis.
const FNV32_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime.
const FNV32_PRIME: u32 = 16_777_619;

/// A 32-bit hash over raw bytes.
///
/// Implementations must be pure: the same bytes always produce the same
/// value and no state carries over between calls.
pub trait HashFunction {
    /// Hash `bytes` into 32 bits.
    fn hash32(&self, bytes: &[u8]) -> u32;
}

impl<F> HashFunction for F
where
    F: Fn(&[u8]) -> u32,
{
    fn hash32(&self, bytes: &[u8]) -> u32 {
        self(bytes)
    }
}

/// 32-bit FNV-1a, the filter's default hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1a32;

impl HashFunction for Fnv1a32 {
    fn hash32(&self, bytes: &[u8]) -> u32 {
        bytes.iter().fold(FNV32_OFFSET_BASIS, |hash, &byte| {
            (hash ^ u32::from(byte)).wrapping_mul(FNV32_PRIME)
        })
    }
}

/// 64-bit FNV-1a from the `fnv` crate, folded down to 32 bits by XOR-ing
/// the two halves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fnv1a64Folded;

impl HashFunction for Fnv1a64Folded {
    fn hash32(&self, bytes: &[u8]) -> u32 {
        let mut hasher = fnv::FnvHasher::default();
        hasher.write(bytes);
        let wide = hasher.finish();
        ((wide >> 32) ^ wide) as u32
    }
}

/// Hash functions selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// 32-bit FNV-1a
    #[default]
    #[serde(rename = "fnv1a32")]
    Fnv1a32,

    /// 64-bit FNV-1a folded to 32 bits
    #[serde(rename = "fnv1a64-folded")]
    Fnv1a64Folded,
}

impl HashFunction for HashAlgorithm {
    fn hash32(&self, bytes: &[u8]) -> u32 {
        match self {
            HashAlgorithm::Fnv1a32 => Fnv1a32.hash32(bytes),
            HashAlgorithm::Fnv1a64Folded => Fnv1a64Folded.hash32(bytes),
        }
    }
}

/// Derive the fingerprint from an item hash.
///
/// The low byte is used, with zero remapped to one so a fingerprint never
/// collides with the empty slot marker. This makes `1` twice as likely as
/// any other value.
pub fn fingerprint(hash: u32) -> Fingerprint {
    match (hash & 0xff) as Fingerprint {
        EMPTY_SLOT => 1,
        fp => fp,
    }
}

/// Source of the slot picked for eviction during relocation.
pub trait SlotChooser {
    /// Pick a slot index in `0..bucket_size`.
    fn choose_slot(&mut self, bucket_size: usize) -> usize;
}

impl<F> SlotChooser for F
where
    F: FnMut(usize) -> usize,
{
    fn choose_slot(&mut self, bucket_size: usize) -> usize {
        self(bucket_size) % bucket_size
    }
}

/// Uniform slot chooser backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSlotChooser<R = StdRng> {
    rng: R,
}

impl RngSlotChooser<StdRng> {
    /// Chooser seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic chooser for reproducible relocation traces.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RngSlotChooser<R> {
    /// Wrap an arbitrary generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl Default for RngSlotChooser<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> SlotChooser for RngSlotChooser<R> {
    fn choose_slot(&mut self, bucket_size: usize) -> usize {
        self.rng.gen_range(0..bucket_size)
    }
}
