//! HMAC key manager: policy validation and key generation.
//!
//! This module provides:
//! - [`HmacKeyManager::validate_params`] — tag-size range and hash support
//! - [`HmacKeyManager::validate_key_format`] — key-size minimum, then params
//! - [`HmacKeyManager::validate_key`] — version, material length, then params
//! - [`HmacKeyManager::create_key`] — mint fresh key material
//!
//! # Trust-The-Caller Generation
//!
//! `create_key` performs no validation of its own. Generation is a pure
//! "fill with randomness and stamp the current version" step; the caller
//! must run `validate_key_format` first. Keeping the two separate means
//! policy changes never touch the generation path and each is testable in
//! isolation.
//!
//! # Statelessness
//!
//! Every operation is a pure function over its arguments, the immutable
//! policy constants, and the manager's supported version. The manager holds
//! no mutable state, so any number of threads may share one instance.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::error::KeyError;
use crate::key::{HmacKey, HmacKeyFormat, KeyMaterial};
use crate::params::HmacParams;

// ---------------------------------------------------------------------------
// Policy constants
// ---------------------------------------------------------------------------

/// Minimum key material length in bytes (128 bits).
pub const MIN_KEY_SIZE_BYTES: u32 = 16;

/// Minimum authentication-tag length in bytes.
pub const MIN_TAG_SIZE_BYTES: u32 = 10;

/// Current key version. Stamped on every generated key; keys stamped newer
/// are rejected by [`HmacKeyManager::validate_key`].
pub const VERSION: u32 = 0;

// ---------------------------------------------------------------------------
// Entropy capability
// ---------------------------------------------------------------------------

/// Fallible source of cryptographically secure random bytes.
///
/// Injected into [`HmacKeyManager`] so tests can substitute deterministic or
/// failure-injecting sources. Thread safety is the implementor's contract;
/// the manager never retries a failed fill.
pub trait EntropySource {
    /// Fill `buf` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Entropy`] if the source cannot produce the
    /// requested bytes. Partial fills must be reported as failure.
    fn fill(&self, buf: &mut [u8]) -> Result<(), KeyError>;
}

/// Operating-system CSPRNG, backed by [`OsRng`].
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<(), KeyError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| KeyError::Entropy(format!("CSPRNG fill failed: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Version compatibility
// ---------------------------------------------------------------------------

/// Returns `true` iff a key stamped `key_version` may be used by a manager
/// supporting `supported` — a key is never newer than its manager.
#[must_use]
pub const fn version_is_compatible(key_version: u32, supported: u32) -> bool {
    key_version <= supported
}

// ---------------------------------------------------------------------------
// HmacKeyManager
// ---------------------------------------------------------------------------

/// Key-lifecycle gatekeeper for HMAC keys.
///
/// Validates params, key formats, and keys against the policy minimums, and
/// mints fresh key material. Stateless apart from the supported version and
/// the entropy handle; every method is re-entrant.
#[derive(Clone, Copy, Debug)]
pub struct HmacKeyManager<E = OsEntropy> {
    entropy: E,
    version: u32,
}

impl HmacKeyManager<OsEntropy> {
    /// Manager backed by the operating-system CSPRNG, supporting [`VERSION`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entropy: OsEntropy,
            version: VERSION,
        }
    }
}

impl Default for HmacKeyManager<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> HmacKeyManager<E> {
    /// Manager with an injected entropy source.
    #[must_use]
    pub const fn with_entropy(entropy: E) -> Self {
        Self {
            entropy,
            version: VERSION,
        }
    }

    /// Override the supported version. Intended for tests exercising the
    /// version-compatibility path; production managers use [`VERSION`].
    #[must_use]
    pub const fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    /// The newest key version this manager stamps and accepts.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Validate an authentication-tag configuration.
    ///
    /// Checks, in order: tag size meets the minimum, the hash has a policy
    /// entry, tag size does not exceed the hash's ceiling. Pure; no side
    /// effects.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidArgument`] naming the violated limit.
    pub fn validate_params(&self, params: &HmacParams) -> Result<(), KeyError> {
        if params.tag_size < MIN_TAG_SIZE_BYTES {
            return Err(KeyError::InvalidArgument(format!(
                "tag_size {} is too small (minimum {MIN_TAG_SIZE_BYTES})",
                params.tag_size
            )));
        }
        let Some(max_tag_size) = params.hash.max_tag_size() else {
            return Err(KeyError::InvalidArgument(format!(
                "hash type {} is not supported",
                params.hash.as_str()
            )));
        };
        if params.tag_size > max_tag_size {
            return Err(KeyError::InvalidArgument(format!(
                "tag_size {} is too big for hash type {} (maximum {max_tag_size})",
                params.tag_size,
                params.hash.as_str()
            )));
        }
        Ok(())
    }

    /// Validate a key-creation request.
    ///
    /// The key-size check runs first, so when both the size and the params
    /// are bad the size error surfaces.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::InvalidArgument`] if `key_size` is below the
    /// minimum or the params are invalid.
    pub fn validate_key_format(&self, format: &HmacKeyFormat) -> Result<(), KeyError> {
        if format.key_size < MIN_KEY_SIZE_BYTES {
            return Err(KeyError::InvalidArgument(format!(
                "key_size {} is too small (minimum {MIN_KEY_SIZE_BYTES})",
                format.key_size
            )));
        }
        self.validate_params(&format.params)
    }

    /// Validate a key before it may reach the MAC primitive.
    ///
    /// Version compatibility is checked first, then material length, then
    /// params.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::VersionMismatch`] if the key is stamped newer
    /// than this manager supports, or [`KeyError::InvalidArgument`] if the
    /// material is too short or the params are invalid.
    pub fn validate_key(&self, key: &HmacKey) -> Result<(), KeyError> {
        if !version_is_compatible(key.version, self.version) {
            return Err(KeyError::VersionMismatch {
                key_version: key.version,
                supported: self.version,
            });
        }
        if key.key_material.len() < MIN_KEY_SIZE_BYTES as usize {
            return Err(KeyError::InvalidArgument(format!(
                "key_value is too short: {} bytes (minimum {MIN_KEY_SIZE_BYTES})",
                key.key_material.len()
            )));
        }
        self.validate_params(&key.params)
    }

    /// Mint a new key from a creation request.
    ///
    /// Performs **no validation** — the caller must have run
    /// [`validate_key_format`](Self::validate_key_format) first. Copies the
    /// params verbatim, fills `key_size` bytes from the entropy source, and
    /// stamps the manager's current version.
    ///
    /// # Errors
    ///
    /// Returns [`KeyError::Entropy`] if the source cannot produce the
    /// requested bytes. The partially filled buffer is scrubbed before the
    /// error propagates.
    pub fn create_key(&self, format: &HmacKeyFormat) -> Result<HmacKey, KeyError> {
        let mut bytes = vec![0u8; format.key_size as usize];
        if let Err(e) = self.entropy.fill(&mut bytes) {
            bytes.zeroize();
            return Err(e);
        }
        // `bytes` capacity equals its length, so the move into KeyMaterial
        // never reallocates and leaves no unscrubbed copy behind.
        Ok(HmacKey {
            version: self.version,
            params: format.params,
            key_material: KeyMaterial::new(bytes),
        })
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
