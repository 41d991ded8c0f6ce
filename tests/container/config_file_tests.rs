use std::io::Write;

use hashyt::{ChainedHashTable, ConfigError, HashTableConfig};
use tempfile::NamedTempFile;

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            "initial_capacity = 13\nload_factor_threshold = 0.5\ngrowth_multiplier = 3\n",
        );
        let config = HashTableConfig::load(file.path()).unwrap();
        assert_eq!(config.initial_capacity, 13);
        assert_eq!(config.load_factor_threshold, 0.5);
        assert_eq!(config.growth_multiplier, 3);

        let mut table = ChainedHashTable::with_config(config).unwrap();
        for i in 0..7 {
            table.insert(format!("k{}", i), i);
        }
        // 7 > 6.5 on the 7th insert: next_prime(39) = 41
        assert_eq!(table.limit(), 41);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = HashTableConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_invalid_file_contents() {
        let file = write_config("growth_multiplier = 1\n");
        let err = HashTableConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidGrowthMultiplier(1)));
    }

    #[test]
    fn test_oversized_values_in_file() {
        let file = write_config(&format!("initial_capacity = {}\n", i64::MAX));
        let err = HashTableConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::CapacityTooLarge(_)));

        let file = write_config("growth_multiplier = 4611686018427387903\n");
        let err = HashTableConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::GrowthMultiplierTooLarge(_)));
    }
}
