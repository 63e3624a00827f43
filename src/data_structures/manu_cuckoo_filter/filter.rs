// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Main implementation of the Manu Cuckoo Filter.

use tracing::{debug, trace, warn};

use crate::data_structures::manu_cuckoo_filter::bucket::{Bucket, Fingerprint, BUCKET_SIZE};
use crate::data_structures::manu_cuckoo_filter::config::ManuCuckooFilterConfig;
use crate::data_structures::manu_cuckoo_filter::error::{ManuCuckooFilterError, Result};
use crate::data_structures::manu_cuckoo_filter::hash::{
    fingerprint, Fnv1a32, HashFunction, RngSlotChooser, SlotChooser,
};

/// A cuckoo filter over byte-string keys.
///
/// Stores an 8-bit fingerprint per item in a fixed, power-of-two sized table
/// of 4-slot buckets. Every item has two candidate buckets; the second is
/// derived from the first and the fingerprint, which lets the insert path
/// relocate ("kick") stored fingerprints without knowing their keys.
///
/// The filter has a single owner: mutating operations take `&mut self` and
/// there is no internal locking. Wrap it in a lock to share it between
/// threads.
///
/// # Type Parameters
///
/// * `H` - The 32-bit hash applied to items. Defaults to FNV-1a.
/// * `S` - The slot chooser used while kicking. Defaults to an entropy
///   seeded `StdRng`.
///
/// # Examples
///
/// ```
/// use manu_filter_lib::data_structures::manu_cuckoo_filter::ManuCuckooFilter;
///
/// let mut filter = ManuCuckooFilter::new(1024);
///
/// filter.insert(b"hello").unwrap();
/// assert!(filter.lookup(b"hello"));
/// assert_eq!(filter.count(), 1);
///
/// assert!(filter.delete(b"hello"));
/// assert!(!filter.delete(b"hello"));
/// assert_eq!(filter.count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ManuCuckooFilter<H = Fnv1a32, S = RngSlotChooser> {
    /// Configuration the table was sized from
    config: ManuCuckooFilterConfig,

    /// Bucket table; its length is a power of two and never changes
    buckets: Box<[Bucket]>,

    /// `buckets.len() - 1`
    index_mask: u32,

    /// Stored fingerprints, kept in step with every successful insert and delete
    count: usize,

    /// Item hash
    hasher: H,

    /// Eviction slot source for the relocation loop
    chooser: S,
}

impl ManuCuckooFilter<Fnv1a32, RngSlotChooser> {
    /// Create a filter for roughly `capacity` fingerprints with the default
    /// kick budget, FNV-1a hashing and random slot selection.
    pub fn new(capacity: u32) -> Self {
        Self::with_config(ManuCuckooFilterConfig::new().with_capacity(capacity))
    }

    /// Create a filter from the given configuration with the default hash
    /// and slot chooser.
    pub fn with_config(config: ManuCuckooFilterConfig) -> Self {
        Self::with_parts(config, Fnv1a32, RngSlotChooser::from_entropy())
    }
}

impl<H: HashFunction, S: SlotChooser> ManuCuckooFilter<H, S> {
    /// Create a filter with an explicit hash function and slot chooser.
    ///
    /// Supplying a seeded chooser makes relocation fully reproducible.
    pub fn with_parts(config: ManuCuckooFilterConfig, hasher: H, chooser: S) -> Self {
        let bucket_count = config.bucket_count();
        debug!(
            capacity = config.capacity(),
            bucket_count,
            max_num_kicks = config.max_num_kicks(),
            "Creating cuckoo filter"
        );

        Self {
            buckets: vec![Bucket::new(); bucket_count].into_boxed_slice(),
            index_mask: (bucket_count - 1) as u32,
            count: 0,
            config,
            hasher,
            chooser,
        }
    }

    /// Add an item to the filter.
    ///
    /// Tries the item's primary bucket, then its alternate bucket, then
    /// relocates stored fingerprints for up to `max_num_kicks` rounds.
    ///
    /// # Errors
    ///
    /// Returns [`ManuCuckooFilterError::FilterFull`] if relocation runs out of
    /// kicks. The table is left exactly as it was before the call.
    pub fn insert(&mut self, item: &[u8]) -> Result<()> {
        let hash = self.hasher.hash32(item);
        let mut fp = fingerprint(hash);
        let mut index = self.primary_index(hash);

        if self.buckets[index as usize].insert(fp) {
            self.count += 1;
            return Ok(());
        }

        index = self.alternate_index(index, fp);
        if self.buckets[index as usize].insert(fp) {
            self.count += 1;
            return Ok(());
        }

        // Kicks start from the bucket that just refused the fingerprint
        let max_kicks = self.config.max_num_kicks();
        let mut trail: Vec<(u32, usize)> = Vec::new();
        for kick in 0..max_kicks {
            let slot = self.chooser.choose_slot(BUCKET_SIZE) % BUCKET_SIZE;
            trail.push((index, slot));

            fp = self.buckets[index as usize].swap(slot, fp);
            index = self.alternate_index(index, fp);

            if self.buckets[index as usize].insert(fp) {
                self.count += 1;
                trace!(kicks = kick + 1, "Inserted after relocation");
                return Ok(());
            }
        }

        self.rewind(&trail, fp);
        warn!(
            max_kicks,
            count = self.count,
            "Cuckoo filter is considered full, item not admitted"
        );
        Err(ManuCuckooFilterError::FilterFull {
            max_kicks,
            count: self.count,
        })
    }

    /// Returns true if the item may be in the filter.
    ///
    /// False positives are possible, false negatives are not.
    pub fn lookup(&self, item: &[u8]) -> bool {
        let hash = self.hasher.hash32(item);
        let fp = fingerprint(hash);
        let index = self.primary_index(hash);

        self.buckets[index as usize].lookup(fp)
            || self.buckets[self.alternate_index(index, fp) as usize].lookup(fp)
    }

    /// Remove one copy of the item's fingerprint.
    ///
    /// Returns true if a matching fingerprint was found and removed. If two
    /// items share a fingerprint and a bucket, either copy may be removed.
    pub fn delete(&mut self, item: &[u8]) -> bool {
        let hash = self.hasher.hash32(item);
        let fp = fingerprint(hash);
        let index = self.primary_index(hash);

        let deleted = self.buckets[index as usize].delete(fp) || {
            let alternate = self.alternate_index(index, fp);
            self.buckets[alternate as usize].delete(fp)
        };

        if deleted {
            self.count -= 1;
        }
        deleted
    }

    /// Number of stored fingerprints.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Alias for [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of buckets in the table.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of fingerprint slots.
    pub fn slot_capacity(&self) -> usize {
        self.buckets.len() * BUCKET_SIZE
    }

    /// Fraction of slots in use, between 0.0 and 1.0.
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.slot_capacity() as f64
    }

    /// Get the configuration of this filter.
    pub fn config(&self) -> &ManuCuckooFilterConfig {
        &self.config
    }

    /// Empty every bucket. The table keeps its size.
    pub fn clear(&mut self) {
        self.buckets.iter_mut().for_each(Bucket::clear);
        self.count = 0;
    }

    /// Hash an item with the filter's hash function.
    pub fn hash_item(&self, item: &[u8]) -> u32 {
        self.hasher.hash32(item)
    }

    /// Primary bucket index for an item hash.
    pub fn primary_index(&self, hash: u32) -> u32 {
        hash & self.index_mask
    }

    /// Alternate bucket index for a fingerprint stored at `index`.
    ///
    /// Self-inverse: `alternate_index(alternate_index(i, fp), fp) == i`.
    pub fn alternate_index(&self, index: u32, fp: Fingerprint) -> u32 {
        index ^ self.primary_index(self.hasher.hash32(&[fp]))
    }

    /// Undo the swaps of a failed relocation, newest first.
    ///
    /// `carried` is the fingerprint left over after the last kick. Once every
    /// swap is reversed, the fingerprint left in hand is the one the failed
    /// insert started with.
    fn rewind(&mut self, trail: &[(u32, usize)], mut carried: Fingerprint) {
        for &(index, slot) in trail.iter().rev() {
            carried = self.buckets[index as usize].swap(slot, carried);
        }
        trace!(kicks = trail.len(), rejected = carried, "Rewound relocation");
    }

    #[cfg(test)]
    fn bucket(&self, index: u32) -> &Bucket {
        &self.buckets[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::manu_cuckoo_filter::bucket::EMPTY_SLOT;

    fn seeded_filter(capacity: u32, seed: u64) -> ManuCuckooFilter<Fnv1a32, RngSlotChooser> {
        ManuCuckooFilter::with_parts(
            ManuCuckooFilterConfig::new().with_capacity(capacity),
            Fnv1a32,
            RngSlotChooser::seeded(seed),
        )
    }

    fn stored_fingerprints<H: HashFunction, S: SlotChooser>(filter: &ManuCuckooFilter<H, S>) -> usize {
        (0..filter.bucket_count() as u32)
            .map(|index| filter.bucket(index).occupied())
            .sum()
    }

    #[test]
    fn test_round_trip() {
        let mut filter = ManuCuckooFilter::new(0);
        assert_eq!(filter.count(), 0);

        filter.insert(b"foo").unwrap();
        assert!(filter.lookup(b"foo"));
        assert_eq!(filter.count(), 1);

        assert!(filter.delete(b"foo"));
        assert_eq!(filter.count(), 0);
        assert!(!filter.delete(b"foo"));
        assert_eq!(filter.count(), 0);
    }

    #[test]
    fn test_empty_construction() {
        let filter = ManuCuckooFilter::new(0);
        assert_eq!(filter.bucket_count(), 1);
        assert_eq!(filter.slot_capacity(), BUCKET_SIZE);
        assert!(filter.is_empty());
        assert!(!filter.lookup(b"anything"));
    }

    #[test]
    fn test_index_involution() {
        let filter = ManuCuckooFilter::new(1 << 16);
        let hash = filter.hash_item(b"ABCDEFGHIJKLMNOPRSTUWXYZ");
        let fp = fingerprint(hash);
        let i1 = filter.primary_index(hash);
        let i2 = filter.alternate_index(i1, fp);

        assert_eq!(filter.alternate_index(i2, fp), i1);
        assert_eq!(filter.alternate_index(i1, fp), i2);
    }

    #[test]
    fn test_indices_stay_in_table() {
        let filter = ManuCuckooFilter::new(1000);
        for i in 0..10_000u32 {
            let hash = filter.hash_item(&i.to_le_bytes());
            let i1 = filter.primary_index(hash);
            let i2 = filter.alternate_index(i1, fingerprint(hash));
            assert!((i1 as usize) < filter.bucket_count());
            assert!((i2 as usize) < filter.bucket_count());
        }
    }

    #[test]
    fn test_count_tracks_slots() {
        let mut filter = seeded_filter(256, 7);
        for i in 0..100u32 {
            filter.insert(format!("item-{i}").as_bytes()).unwrap();
        }
        for i in (0..100u32).step_by(3) {
            assert!(filter.delete(format!("item-{i}").as_bytes()));
        }

        assert_eq!(filter.count(), 100 - 34);
        assert_eq!(filter.count(), stored_fingerprints(&filter));
    }

    #[test]
    fn test_duplicates_occupy_separate_slots() {
        let mut filter = seeded_filter(1024, 1);
        filter.insert(b"dup").unwrap();
        filter.insert(b"dup").unwrap();
        assert_eq!(filter.count(), 2);

        assert!(filter.delete(b"dup"));
        assert!(filter.lookup(b"dup"));
        assert!(filter.delete(b"dup"));
        assert!(!filter.lookup(b"dup"));
    }

    #[test]
    fn test_full_filter_keeps_existing_items() {
        // Two buckets, eight slots
        let mut filter = seeded_filter(8, 3);
        let mut admitted = Vec::new();
        let mut rejected = 0;

        for i in 0..40u32 {
            let key = format!("key-{i}");
            match filter.insert(key.as_bytes()) {
                Ok(()) => admitted.push(key),
                Err(ManuCuckooFilterError::FilterFull { max_kicks, count }) => {
                    assert_eq!(max_kicks, 512);
                    assert_eq!(count, admitted.len());
                    rejected += 1;
                }
            }
        }

        assert!(rejected > 0, "an eight slot filter cannot take 40 items");
        assert!(filter.count() <= filter.slot_capacity());
        assert_eq!(filter.count(), admitted.len());
        assert_eq!(filter.count(), stored_fingerprints(&filter));
        for key in &admitted {
            assert!(filter.lookup(key.as_bytes()), "{key} lost after failed inserts");
        }
    }

    #[test]
    fn test_failed_insert_leaves_table_unchanged() {
        let mut filter = seeded_filter(8, 11);
        let mut failures = 0;
        for i in 0..64u32 {
            let snapshot = filter.buckets.clone();
            let count = filter.count();

            if filter.insert(format!("fill-{i}").as_bytes()).is_err() {
                failures += 1;
                assert_eq!(filter.buckets, snapshot);
                assert_eq!(filter.count(), count);
            }
        }
        assert!(failures >= 64 - 8);
    }

    #[test]
    fn test_same_item_fills_both_buckets() {
        let mut filter = seeded_filter(1 << 12, 5);
        let mut admitted = 0;
        while filter.insert(b"same").is_ok() {
            admitted += 1;
            assert!(admitted <= 2 * BUCKET_SIZE, "only two buckets can hold the item");
        }

        assert!(admitted >= BUCKET_SIZE);
        assert_eq!(filter.count(), admitted);
        assert!(filter.lookup(b"same"));
    }

    #[test]
    fn test_zero_kicks_fails_without_relocation() {
        let config = ManuCuckooFilterConfig::new()
            .with_capacity(0)
            .with_max_num_kicks(0);
        let mut chooser_calls = 0;
        let mut filter = ManuCuckooFilter::with_parts(config, Fnv1a32, |_: usize| -> usize {
            chooser_calls += 1;
            0
        });

        for i in 0..BUCKET_SIZE as u32 {
            filter.insert(format!("slot-{i}").as_bytes()).unwrap();
        }
        let err = filter.insert(b"overflow").unwrap_err();
        assert_eq!(err, ManuCuckooFilterError::FilterFull { max_kicks: 0, count: 4 });
        drop(filter);
        assert_eq!(chooser_calls, 0);
    }

    #[test]
    fn test_relocation_moves_fingerprint_to_alternate() {
        // Every item hashes to bucket 0 of 4 with fingerprint 0x10; the
        // fingerprint's own hash is 2, so its alternate bucket is 2.
        let hasher = |bytes: &[u8]| -> u32 { if bytes.len() == 1 { 2 } else { 0x10 } };
        let config = ManuCuckooFilterConfig::new().with_capacity(16);
        let mut filter = ManuCuckooFilter::with_parts(config, hasher, |_: usize| 0_usize);

        for _ in 0..2 * BUCKET_SIZE {
            filter.insert(b"collide").unwrap();
        }
        assert!(filter.bucket(0).is_full());
        assert!(filter.bucket(2).is_full());

        // Kicks bounce the same fingerprint between buckets 2 and 0
        let err = filter.insert(b"collide").unwrap_err();
        assert!(matches!(err, ManuCuckooFilterError::FilterFull { count: 8, .. }));
        assert_eq!(filter.bucket(0).slots(), &[0x10; BUCKET_SIZE]);
        assert_eq!(filter.bucket(1).slots(), &[EMPTY_SLOT; BUCKET_SIZE]);
    }

    #[test]
    fn test_clear_resets_slots() {
        let mut filter = seeded_filter(64, 9);
        for i in 0..20u32 {
            filter.insert(&i.to_be_bytes()).unwrap();
        }
        assert!(filter.load_factor() > 0.0);

        filter.clear();
        assert!(filter.is_empty());
        assert_eq!(filter.load_factor(), 0.0);
        assert_eq!(stored_fingerprints(&filter), 0);
        assert_eq!(filter.bucket_count(), 16);
    }
}
