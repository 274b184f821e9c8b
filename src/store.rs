//! The key-value cookie accessor.

use crate::encoding::{decode, encode};
use crate::error::KeyError;
use crate::expiry::{Expiry, EPOCH};
use crate::jar::Jar;
use crate::wire::{parse_jar, serialize_entry, Attributes};

/// Attribute names a cookie key must not collide with.
const RESERVED_KEYS: [&str; 5] = ["expires", "max-age", "path", "domain", "secure"];

fn validate_key(key: &str) -> Result<(), KeyError> {
    if key.is_empty() {
        return Err(KeyError::Empty);
    }
    for reserved in RESERVED_KEYS {
        if key.eq_ignore_ascii_case(reserved) {
            return Err(KeyError::Reserved(reserved.to_string()));
        }
    }
    Ok(())
}

/// Stateless key-value accessor over a [`Jar`] backend.
///
/// Every operation re-reads the live jar string; nothing is cached between
/// calls. The backend provides merge-on-write, so a set touches exactly one
/// named entry.
pub struct CookieStore<J: Jar> {
    jar: J,
}

impl<J: Jar> CookieStore<J> {
    pub fn new(jar: J) -> Self {
        Self { jar }
    }

    /// The backend this store was constructed with.
    pub fn jar(&self) -> &J {
        &self.jar
    }

    /// Look up the decoded value stored under `key`.
    ///
    /// Returns `None` for an empty key, an absent key, or a value that
    /// decodes to the empty string. The leftmost matching entry wins.
    pub fn get_item(&self, key: &str) -> Option<String> {
        if key.is_empty() {
            return None;
        }
        let encoded = encode(key).to_string();
        let raw = self.jar.read();
        parse_jar(&raw)
            .into_iter()
            .find(|(name, _)| *name == encoded)
            .map(|(_, value)| decode(&value))
            .filter(|value| !value.is_empty())
    }

    /// Create or overwrite the cookie named `key`.
    ///
    /// Returns `false` only when key validation fails; the jar write itself
    /// cannot fail. Callers must never pre-encode `key` or `value`.
    pub fn set_item(&self, key: &str, value: &str, attributes: &Attributes) -> bool {
        self.try_set_item(key, value, attributes).is_ok()
    }

    /// [`set_item`](Self::set_item) with the validation failure as a typed
    /// error.
    pub fn try_set_item(
        &self,
        key: &str,
        value: &str,
        attributes: &Attributes,
    ) -> Result<(), KeyError> {
        if let Err(error) = validate_key(key) {
            tracing::debug!(key = %key, error = %error, "rejected cookie key");
            return Err(error);
        }
        let entry = serialize_entry(key, value, attributes);
        tracing::debug!(key = %key, "writing cookie entry");
        self.jar.write(&entry);
        Ok(())
    }

    /// Expire the cookie named `key` by overwriting it with an empty value
    /// and a past `expires` date.
    ///
    /// Returns `false` without mutation when the key is absent. A `true`
    /// result reflects prior existence only: `path`/`domain` must match the
    /// scope the cookie was written with for a scope-matching backend to
    /// actually evict it, and no post-write check is made.
    pub fn remove_item(&self, key: &str, path: Option<&str>, domain: Option<&str>) -> bool {
        if !self.has_item(key) {
            return false;
        }
        let attributes = Attributes {
            expiry: Some(Expiry::Absolute(EPOCH.to_string())),
            path: path.map(str::to_string),
            domain: domain.map(str::to_string),
            secure: false,
        };
        let entry = serialize_entry(key, "", &attributes);
        tracing::debug!(key = %key, "expiring cookie entry");
        self.jar.write(&entry);
        true
    }

    /// Whether a cookie named `key` exists. Pure predicate, no side effects.
    pub fn has_item(&self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        let encoded = encode(key).to_string();
        let raw = self.jar.read();
        parse_jar(&raw).iter().any(|(name, _)| *name == encoded)
    }

    /// Decoded cookie names, in jar order. An empty jar yields an empty
    /// vector.
    pub fn keys(&self) -> Vec<String> {
        let raw = self.jar.read();
        parse_jar(&raw)
            .into_iter()
            .map(|(name, _)| decode(&name))
            .collect()
    }

    /// Decoded `(name, value)` pairs, in jar order.
    pub fn entries(&self) -> Vec<(String, String)> {
        let raw = self.jar.read();
        parse_jar(&raw)
            .into_iter()
            .map(|(name, value)| (decode(&name), decode(&value)))
            .collect()
    }

    /// Number of cookies currently in the jar.
    pub fn len(&self) -> usize {
        parse_jar(&self.jar.read()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
