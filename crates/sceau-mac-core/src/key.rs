//! Key objects: generation requests and usable HMAC keys.
//!
//! A [`HmacKeyFormat`] is a request — sizes and params, no secret. A
//! [`HmacKey`] is the usable secret, built only by the manager's generation
//! path. Keys are immutable once created; rotation replaces them wholesale.

use secrecy::{ExposeSecret, SecretSlice};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::params::HmacParams;

// ---------------------------------------------------------------------------
// KeyMaterial
// ---------------------------------------------------------------------------

/// Raw secret bytes underlying an HMAC key.
///
/// Wraps [`SecretSlice<u8>`] from the `secrecy` crate: zeroized on drop,
/// masked `Debug` output, and access only through an explicit, auditable
/// [`expose`](Self::expose) call.
pub struct KeyMaterial {
    inner: SecretSlice<u8>,
}

impl KeyMaterial {
    /// Take ownership of `bytes` as secret key material.
    ///
    /// The bytes are zeroized when the material is dropped.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: bytes.into(),
        }
    }

    /// Length of the key material in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.expose_secret().len()
    }

    /// Returns `true` if the material is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.expose_secret().is_empty()
    }

    /// Expose the secret bytes to hand them to the MAC primitive.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        self.inner.expose_secret()
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyMaterial(***)")
    }
}

// ---------------------------------------------------------------------------
// Key format and key
// ---------------------------------------------------------------------------

/// A request to create an HMAC key — not itself usable for tag computation.
///
/// Valid iff `key_size` meets the policy minimum and `params` pass
/// `HmacKeyManager::validate_params`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmacKeyFormat {
    /// Tag configuration the generated key will carry.
    pub params: HmacParams,
    /// Requested key material length, in bytes.
    pub key_size: u32,
}

/// A usable HMAC key.
///
/// Produced by `HmacKeyManager::create_key`, which stamps the manager's
/// current version. Deliberately not serde-serializable — the secret never
/// passes through a generic serializer; wire encoding is the registry's
/// concern.
#[derive(Debug)]
pub struct HmacKey {
    /// Policy generation that produced this key. Keys stamped newer than a
    /// manager's supported version are rejected by validation.
    pub version: u32,
    /// Tag configuration copied verbatim from the creating format.
    pub params: HmacParams,
    /// The secret bytes.
    pub key_material: KeyMaterial,
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
