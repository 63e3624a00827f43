// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Fixed-size fingerprint buckets for the Manu Cuckoo Filter.

/// An 8-bit digest of an item stored in place of the item itself.
pub type Fingerprint = u8;

/// Number of fingerprint slots held by every bucket.
pub const BUCKET_SIZE: usize = 4;

/// Slot value marking an unused entry. Valid fingerprints are never zero.
pub const EMPTY_SLOT: Fingerprint = 0;

/// A row of the filter's table: `BUCKET_SIZE` fingerprint slots.
///
/// All operations scan the slots linearly, so their cost is bounded by
/// `BUCKET_SIZE` and never allocates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bucket {
    slots: [Fingerprint; BUCKET_SIZE],
}

impl Bucket {
    /// Create an empty bucket.
    pub const fn new() -> Self {
        Self {
            slots: [EMPTY_SLOT; BUCKET_SIZE],
        }
    }

    /// Store `fingerprint` in the first empty slot.
    ///
    /// Returns `false` without touching the bucket if every slot is occupied.
    pub fn insert(&mut self, fingerprint: Fingerprint) -> bool {
        debug_assert_ne!(fingerprint, EMPTY_SLOT);
        match self.slots.iter_mut().find(|slot| **slot == EMPTY_SLOT) {
            Some(slot) => {
                *slot = fingerprint;
                true
            }
            None => false,
        }
    }

    /// Returns true if any slot holds `fingerprint`.
    pub fn lookup(&self, fingerprint: Fingerprint) -> bool {
        self.slots.contains(&fingerprint)
    }

    /// Clear the first slot holding `fingerprint`.
    ///
    /// Only one occurrence is removed per call even if duplicates are stored.
    pub fn delete(&mut self, fingerprint: Fingerprint) -> bool {
        match self.slots.iter_mut().find(|slot| **slot == fingerprint) {
            Some(slot) => {
                *slot = EMPTY_SLOT;
                true
            }
            None => false,
        }
    }

    /// Write `fingerprint` into `slot` and return whatever was there before.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= BUCKET_SIZE`.
    pub fn swap(&mut self, slot: usize, fingerprint: Fingerprint) -> Fingerprint {
        std::mem::replace(&mut self.slots[slot], fingerprint)
    }

    /// Number of non-empty slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| **slot != EMPTY_SLOT).count()
    }

    /// Returns true if no slot is free.
    pub fn is_full(&self) -> bool {
        !self.slots.contains(&EMPTY_SLOT)
    }

    /// Returns true if every slot is free.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| *slot == EMPTY_SLOT)
    }

    /// Reset every slot to empty.
    pub fn clear(&mut self) {
        self.slots = [EMPTY_SLOT; BUCKET_SIZE];
    }

    /// Raw view of the slots, in slot order.
    pub fn slots(&self) -> &[Fingerprint; BUCKET_SIZE] {
        &self.slots
    }
}
