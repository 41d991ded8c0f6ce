pub mod common;
pub mod container;

pub use common::config::HashTableConfig;
pub use common::exception::ConfigError;
pub use container::chained_hash_table::ChainedHashTable;
pub use container::hash_table::HashTable;
