//! Error types for `sceau-mac-core`.

use thiserror::Error;

/// Errors produced by key validation and generation.
#[derive(Debug, Error)]
pub enum KeyError {
    /// A policy violation in params, a key format, or a key (tag size out of
    /// range, unsupported hash, key material too short). The message names
    /// the offending field and the limit violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Key stamped with a version newer than this manager supports — the key
    /// must not be trusted or used.
    #[error("key version {key_version} is newer than supported version {supported}")]
    VersionMismatch {
        /// Version stamped on the rejected key.
        key_version: u32,
        /// Newest version this manager accepts.
        supported: u32,
    },

    /// CSPRNG failure during key generation. Fatal — generation never
    /// retries or substitutes weaker randomness.
    #[error("entropy source failure: {0}")]
    Entropy(String),
}
