use hashyt::container::hash_function::{bucket_index, KeyHasher, Sdbm, Xxh3};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_function() {
        let hash = Sdbm.hash_key("test_key");
        assert_ne!(hash, 0);
        assert_eq!(hash, Sdbm.hash_key("test_key"));
    }

    #[test]
    fn test_index_depends_on_limit() {
        // The reason a resize has to rehash.
        assert_eq!(bucket_index(&Sdbm, "a", 7), 6);
        assert_eq!(bucket_index(&Sdbm, "a", 17), 12);
    }

    #[test]
    fn test_hashers_disagree() {
        assert_ne!(Sdbm.hash_key("test_key"), Xxh3.hash_key("test_key"));
    }

    #[test]
    fn test_hasher_as_trait_object() {
        let hashers: Vec<Box<dyn KeyHasher>> = vec![Box::new(Sdbm), Box::new(Xxh3)];
        for hasher in &hashers {
            let index = bucket_index(hasher.as_ref(), "some key", 37);
            assert!(index < 37);
        }
    }
}
