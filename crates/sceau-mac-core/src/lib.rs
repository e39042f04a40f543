//! `sceau-mac-core` — HMAC key-lifecycle policy core for SCEAU.
//!
//! This crate is the audit target for MAC key policy: zero network, zero
//! async, zero primitive dependencies. It decides whether a key, a parameter
//! set, or a key-creation request meets the security minimums, and it mints
//! fresh key material. Tag computation itself lives elsewhere and only ever
//! sees keys that passed validation here.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod key;
pub mod manager;
pub mod params;

pub use error::KeyError;
pub use key::{HmacKey, HmacKeyFormat, KeyMaterial};
pub use manager::{
    version_is_compatible, EntropySource, HmacKeyManager, OsEntropy, MIN_KEY_SIZE_BYTES,
    MIN_TAG_SIZE_BYTES, VERSION,
};
pub use params::{HashAlgorithm, HmacParams};
