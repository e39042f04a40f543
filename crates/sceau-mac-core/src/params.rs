//! HMAC tag parameters and the hash-algorithm policy table.
//!
//! The per-hash maximum tag size is policy data, fixed at compile time: an
//! HMAC tag can never exceed the digest length of its underlying hash, and
//! this crate additionally refuses hashes it has no policy entry for.

use serde::{Deserialize, Serialize};

/// Hash algorithm underlying an HMAC key.
///
/// Only [`Sha1`](Self::Sha1), [`Sha256`](Self::Sha256) and
/// [`Sha512`](Self::Sha512) are accepted by the policy table. The remaining
/// variants exist so that rejected inputs stay representable — a key format
/// deserialized from an untrusted source may well name a hash this crate
/// refuses to mint keys for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// Placeholder for an unrecognized hash. Never supported.
    Unknown,
    /// SHA-1 (20-byte digest). Accepted for legacy interop.
    Sha1,
    /// SHA-224. Not in the policy table.
    Sha224,
    /// SHA-256 (32-byte digest).
    Sha256,
    /// SHA-384. Not in the policy table.
    Sha384,
    /// SHA-512 (64-byte digest).
    Sha512,
}

impl HashAlgorithm {
    /// Return the conventional name of this hash (used in error messages).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Sha1 => "SHA1",
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }

    /// Maximum authentication-tag size in bytes for this hash, or `None`
    /// if the hash is not supported for HMAC keys.
    ///
    /// The ceiling is the digest length: SHA1 → 20, SHA256 → 32, SHA512 → 64.
    #[must_use]
    pub const fn max_tag_size(self) -> Option<u32> {
        match self {
            Self::Sha1 => Some(20),
            Self::Sha256 => Some(32),
            Self::Sha512 => Some(64),
            Self::Unknown | Self::Sha224 | Self::Sha384 => None,
        }
    }
}

/// Authentication-tag configuration for an HMAC key.
///
/// Valid iff `tag_size` lies in the closed range from the policy minimum to
/// the hash's ceiling — checked by `HmacKeyManager::validate_params`, never
/// by construction, so a deserialized or caller-built value may be invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacParams {
    /// Hash algorithm used by the HMAC construction.
    pub hash: HashAlgorithm,
    /// Length of the produced authentication tag, in bytes.
    pub tag_size: u32,
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
