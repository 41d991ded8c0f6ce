//! # Separate-Chaining Hash Table
//!
//! String keys are hashed (SDBM by default) and reduced modulo a prime
//! bucket count, the `limit`. Colliding entries share a bucket and are found
//! by linear scan.
//!
//! ```text
//!   storage: Vec<Option<Bucket<V>>>          limit = 7
//!
//!   [0] None
//!   [1] Some ─► [("abc", v)] ─ [("key1", v)]      appended in insert order
//!   [2] None
//!   ...
//!   [6] Some ─► [("a", v)] ─ [("Ω", v)]
//! ```
//!
//! ## Growth
//!
//! Before placing a new key, the table checks whether holding one more entry
//! would push it past `limit * load_factor_threshold`. If so the limit becomes
//! the next prime at or above `limit * growth_multiplier` and every entry is
//! rehashed into fresh storage. Removal never shrinks the table. Growth stops
//! at `MAX_CAPACITY` buckets; past that, buckets simply get longer.
//!
//! ```text
//!   7 ──(6th entry)──► 17 ──(13th entry)──► 37 ──(28th entry)──► 79
//! ```
//!
//! ## Thread Safety
//!
//! Mutation takes `&mut self`; wrap the table in a lock to share it.

use std::iter;

use log::{debug, info, trace, warn};

use crate::common::config::{HashTableConfig, MAX_CAPACITY};
use crate::common::exception::ConfigError;
use crate::container::hash_function::{bucket_index, KeyHasher, Sdbm};
use crate::container::hash_table::HashTable;
use crate::container::primes::next_prime;

#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

type Bucket<V> = Vec<Entry<V>>;

fn empty_storage<V>(limit: usize) -> Vec<Option<Bucket<V>>> {
    iter::repeat_with(|| None).take(limit).collect()
}

/// Separate-chaining hash table with string keys.
///
/// See the module-level documentation for layout and growth policy.
#[derive(Debug, Clone)]
pub struct ChainedHashTable<V, H = Sdbm> {
    /// One slot per bucket; `None` until a key first hashes there.
    storage: Vec<Option<Bucket<V>>>,
    /// Total entries across all buckets.
    len: usize,
    /// Bucket count. Always prime.
    limit: usize,
    config: HashTableConfig,
    hasher: H,
}

impl<V> ChainedHashTable<V, Sdbm> {
    /// Creates an empty table with 7 buckets and the SDBM hasher.
    pub fn new() -> Self {
        let config = HashTableConfig::default();
        Self {
            storage: empty_storage(config.initial_capacity),
            len: 0,
            limit: config.initial_capacity,
            config,
            hasher: Sdbm,
        }
    }

    /// Creates an empty table with the SDBM hasher and custom tuning.
    pub fn with_config(config: HashTableConfig) -> Result<Self, ConfigError> {
        Self::with_config_and_hasher(config, Sdbm)
    }
}

impl<V> Default for ChainedHashTable<V, Sdbm> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H: KeyHasher> ChainedHashTable<V, H> {
    /// Creates an empty table with custom tuning and hasher.
    ///
    /// # Arguments
    ///
    /// * `config` - Validated before use. A non-prime `initial_capacity` is
    ///   rounded up to the next prime.
    /// * `hasher` - Produces the raw hash that is reduced to a bucket index.
    pub fn with_config_and_hasher(config: HashTableConfig, hasher: H) -> Result<Self, ConfigError> {
        config.validate()?;

        let limit = next_prime(config.initial_capacity)
            .ok_or(ConfigError::CapacityTooLarge(config.initial_capacity))?;
        if limit != config.initial_capacity {
            info!(
                "Rounded initial capacity {} up to prime {}",
                config.initial_capacity, limit
            );
        }
        if !config.is_default() {
            info!("Creating hash table with {:?}", config);
        }

        Ok(Self {
            storage: empty_storage(limit),
            len: 0,
            limit,
            config,
            hasher,
        })
    }

    /// Inserts a key-value pair.
    ///
    /// Grows the table first if holding the new entry would cross the load
    /// factor threshold, i.e. the check runs against `len + 1`.
    ///
    /// # Returns
    ///
    /// `true` if stored, `false` if the key already exists. A duplicate
    /// leaves the table untouched: no overwrite and no resize.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> bool {
        let key = key.into();
        let mut index = self.index_of(&key);

        if self.bucket_contains(index, &key) {
            trace!("Insert rejected, key {:?} already present", key);
            return false;
        }

        if self.exceeds_threshold(self.len + 1) && self.resize() {
            index = self.index_of(&key);
        }

        debug!("Inserting key {:?} at index {} (limit {})", key, index, self.limit);
        self.storage[index]
            .get_or_insert_with(Vec::new)
            .push(Entry { key, value });
        self.len += 1;

        true
    }

    /// Deletes the entry for `key`, keeping the order of the rest of its bucket.
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed, `false` if the key was absent.
    pub fn remove(&mut self, key: &str) -> bool {
        let index = self.index_of(key);
        let Some(bucket) = self.storage[index].as_mut() else {
            trace!("Remove miss, no bucket at index {} for key {:?}", index, key);
            return false;
        };

        match bucket.iter().position(|entry| entry.key == key) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                debug!("Removed key {:?} from index {}", key, index);
                true
            }
            None => {
                trace!("Remove miss, key {:?} not in bucket {}", key, index);
                false
            }
        }
    }

    /// Point lookup. Never mutates the table.
    pub fn view(&self, key: &str) -> Option<&V> {
        let index = self.index_of(key);
        let found = self.storage[index]
            .as_ref()
            .and_then(|bucket| bucket.iter().find(|entry| entry.key == key))
            .map(|entry| &entry.value);

        if found.is_none() {
            trace!("View miss for key {:?} at index {}", key, index);
        }
        found
    }

    pub fn contains(&self, key: &str) -> bool {
        self.bucket_contains(self.index_of(key), key)
    }

    fn bucket_contains(&self, index: usize, key: &str) -> bool {
        self.storage[index]
            .as_ref()
            .is_some_and(|bucket| bucket.iter().any(|entry| entry.key == key))
    }

    /// Grows to the next prime at or above `limit * growth_multiplier` and
    /// rehashes every entry into the new storage.
    ///
    /// Normally driven by [`insert`](Self::insert); the limit only ever grows.
    ///
    /// # Returns
    ///
    /// `false`, leaving the table as is, when the next limit would exceed
    /// `MAX_CAPACITY`.
    pub fn resize(&mut self) -> bool {
        let old_limit = self.limit;
        let Some(new_limit) = old_limit
            .checked_mul(self.config.growth_multiplier)
            .filter(|&candidate| candidate <= MAX_CAPACITY)
            .and_then(next_prime)
        else {
            warn!(
                "Hash table at {} buckets cannot grow past {}, keeping current size",
                old_limit, MAX_CAPACITY
            );
            return false;
        };

        let old_storage = std::mem::replace(&mut self.storage, empty_storage(new_limit));
        self.limit = new_limit;

        for entry in old_storage.into_iter().flatten().flatten() {
            let index = bucket_index(&self.hasher, &entry.key, new_limit);
            self.storage[index].get_or_insert_with(Vec::new).push(entry);
        }

        info!(
            "Resized hash table from {} to {} buckets, relocated {} entries",
            old_limit, new_limit, self.len
        );
        true
    }

    /// `true` once the current entry count exceeds `limit * load_factor_threshold`.
    ///
    /// [`insert`](Self::insert) grows ahead of this predicate: it checks the
    /// prospective count `len + 1`, so under the default tuning this stays
    /// `false` after any sequence of inserts until growth stops at
    /// `MAX_CAPACITY`.
    pub fn is_needed_to_resize(&self) -> bool {
        self.exceeds_threshold(self.len)
    }

    fn exceeds_threshold(&self, count: usize) -> bool {
        count as f64 > self.limit as f64 * self.config.load_factor_threshold
    }

    fn index_of(&self, key: &str) -> usize {
        bucket_index(&self.hasher, key, self.limit)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current bucket count.
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.limit as f64
    }

    pub fn config(&self) -> &HashTableConfig {
        &self.config
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Keys stored at `index`, in bucket order.
    #[cfg(test)]
    fn bucket_keys(&self, index: usize) -> Vec<&str> {
        self.storage[index]
            .as_ref()
            .map(|bucket| bucket.iter().map(|entry| entry.key.as_str()).collect())
            .unwrap_or_default()
    }
}

impl<V, H: KeyHasher> HashTable<V> for ChainedHashTable<V, H> {
    fn insert(&mut self, key: String, value: V) -> bool {
        Self::insert(self, key, value)
    }

    fn remove(&mut self, key: &str) -> bool {
        Self::remove(self, key)
    }

    fn view(&self, key: &str) -> Option<&V> {
        Self::view(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }
}
