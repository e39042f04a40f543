#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for HMAC key policy validation and generation.

use proptest::prelude::*;
use sceau_mac_core::{
    HashAlgorithm, HmacKeyFormat, HmacKeyManager, HmacParams, KeyError, MIN_KEY_SIZE_BYTES,
    MIN_TAG_SIZE_BYTES,
};

/// Strategy over the hashes the policy table supports.
fn supported_hash() -> impl Strategy<Value = HashAlgorithm> {
    prop_oneof![
        Just(HashAlgorithm::Sha1),
        Just(HashAlgorithm::Sha256),
        Just(HashAlgorithm::Sha512),
    ]
}

/// Strategy over every hash variant, supported or not.
fn any_hash() -> impl Strategy<Value = HashAlgorithm> {
    prop_oneof![
        Just(HashAlgorithm::Unknown),
        Just(HashAlgorithm::Sha1),
        Just(HashAlgorithm::Sha224),
        Just(HashAlgorithm::Sha256),
        Just(HashAlgorithm::Sha384),
        Just(HashAlgorithm::Sha512),
    ]
}

/// Strategy over params that must pass `validate_params`.
fn valid_params() -> impl Strategy<Value = HmacParams> {
    supported_hash().prop_flat_map(|hash| {
        let max = hash.max_tag_size().expect("supported hash has a ceiling");
        (MIN_TAG_SIZE_BYTES..=max).prop_map(move |tag_size| HmacParams { hash, tag_size })
    })
}

/// Strategy over formats that must pass `validate_key_format`.
fn valid_format() -> impl Strategy<Value = HmacKeyFormat> {
    (valid_params(), MIN_KEY_SIZE_BYTES..=128u32)
        .prop_map(|(params, key_size)| HmacKeyFormat { params, key_size })
}

proptest! {
    /// Every (hash, tag_size) pair inside the policy range validates.
    #[test]
    fn in_range_params_validate(params in valid_params()) {
        let manager = HmacKeyManager::new();
        prop_assert!(manager.validate_params(&params).is_ok());
    }

    /// Any tag below the minimum is rejected, whatever the hash.
    #[test]
    fn undersized_tag_always_rejected(
        hash in any_hash(),
        tag_size in 0..MIN_TAG_SIZE_BYTES,
    ) {
        let manager = HmacKeyManager::new();
        let err = manager
            .validate_params(&HmacParams { hash, tag_size })
            .expect_err("undersized tag should be rejected");
        prop_assert!(matches!(err, KeyError::InvalidArgument(_)));
        prop_assert!(err.to_string().contains("too small"));
    }

    /// Any tag above the hash's ceiling is rejected.
    #[test]
    fn oversized_tag_always_rejected(hash in supported_hash(), excess in 1..1024u32) {
        let manager = HmacKeyManager::new();
        let max = hash.max_tag_size().expect("supported hash has a ceiling");
        let err = manager
            .validate_params(&HmacParams { hash, tag_size: max + excess })
            .expect_err("oversized tag should be rejected");
        prop_assert!(err.to_string().contains("too big"));
    }

    /// Any key_size below the minimum is rejected before params are looked at.
    #[test]
    fn undersized_key_size_always_rejected(
        hash in any_hash(),
        tag_size in 0..256u32,
        key_size in 0..MIN_KEY_SIZE_BYTES,
    ) {
        let manager = HmacKeyManager::new();
        let format = HmacKeyFormat {
            params: HmacParams { hash, tag_size },
            key_size,
        };
        let err = manager
            .validate_key_format(&format)
            .expect_err("undersized key_size should be rejected");
        prop_assert!(err.to_string().contains("key_size"));
    }

    /// Round trip: any format that validates yields a key that validates,
    /// with material of exactly the requested length.
    #[test]
    fn generated_keys_validate(format in valid_format()) {
        let manager = HmacKeyManager::new();
        manager
            .validate_key_format(&format)
            .expect("format should validate");

        let key = manager.create_key(&format).expect("create_key should succeed");
        prop_assert_eq!(key.key_material.len(), format.key_size as usize);
        prop_assert_eq!(key.params, format.params);
        prop_assert_eq!(key.version, manager.version());
        prop_assert!(manager.validate_key(&key).is_ok());
    }
}
