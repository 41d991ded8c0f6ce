use xxhash_rust::xxh3::xxh3_64;

/// Produces the raw, unreduced hash of a key.
///
/// The result may be negative; [`bucket_index`] folds it into `[0, limit)`.
pub trait KeyHasher {
    fn hash_key(&self, key: &str) -> i64;
}

/// SDBM string hash over wrapping 32-bit signed arithmetic.
///
/// For each UTF-16 code unit `c`:
/// `acc = c + (acc << 6) + (acc << 16) - acc`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sdbm;

impl Sdbm {
    /// The 32-bit accumulator before widening.
    pub fn hash32(key: &str) -> i32 {
        key.encode_utf16().fold(0i32, |acc, unit| {
            i32::from(unit)
                .wrapping_add(acc.wrapping_shl(6))
                .wrapping_add(acc.wrapping_shl(16))
                .wrapping_sub(acc)
        })
    }
}

impl KeyHasher for Sdbm {
    fn hash_key(&self, key: &str) -> i64 {
        i64::from(Self::hash32(key))
    }
}

/// xxh3-64 of the key's UTF-8 bytes, reinterpreted as signed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh3;

impl KeyHasher for Xxh3 {
    fn hash_key(&self, key: &str) -> i64 {
        xxh3_64(key.as_bytes()) as i64
    }
}

/// Maps `key` to a bucket in `[0, limit)`.
///
/// Uses the Euclidean remainder, `((h % limit) + limit) % limit`, so
/// negative hashes still land on a valid slot. `limit` must be non-zero.
pub fn bucket_index<H: KeyHasher + ?Sized>(hasher: &H, key: &str, limit: usize) -> usize {
    debug_assert!(limit > 0, "bucket_index called with limit 0");
    hasher.hash_key(key).rem_euclid(limit as i64) as usize
}
