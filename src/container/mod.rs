pub mod chained_hash_table;
pub mod hash_function;
pub mod hash_table;
pub mod primes;

pub use chained_hash_table::ChainedHashTable;
pub use hash_function::{bucket_index, KeyHasher, Sdbm, Xxh3};
pub use hash_table::HashTable;
