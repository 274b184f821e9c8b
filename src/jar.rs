//! Jar backends.
//!
//! A [`Jar`] is the seam between the store and whatever owns the cookies:
//! reading yields the full serialized jar, and writing one
//! `name=value[; attributes]` entry upserts or expires exactly that named
//! entry without disturbing the others. The merge-on-write contract lives
//! entirely in the backend, the way a browser host provides it for
//! `document.cookie`.

use std::sync::{Mutex, PoisonError};

use cookie::Cookie;
use time::{Duration, OffsetDateTime};

/// A cookie jar exposed as a single read/write string resource.
pub trait Jar {
    /// Read the current serialized jar: semicolon-separated `name=value`
    /// pairs, names and values percent-encoded.
    fn read(&self) -> String;

    /// Upsert or expire one named entry. An entry carrying a past `expires`
    /// date or a non-positive `max-age` evicts the name; anything else
    /// replaces the value in place or appends a new entry.
    fn write(&self, entry: &str);
}

/// In-memory jar preserving insertion order.
///
/// Entries are kept exactly as written (still percent-encoded). Expiry is
/// evaluated once, at write time; a future `max-age` or `expires` clause is
/// accepted and then forgotten, which matches session-scoped use. Scope
/// clauses (`domain`, `path`) on a write are accepted but not matched
/// against earlier writes: entries are keyed by name alone.
#[derive(Debug, Default)]
pub struct MemoryJar {
    entries: Mutex<Vec<(String, String)>>,
}

impl MemoryJar {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, String)>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn is_expired(cookie: &Cookie<'_>) -> bool {
        if let Some(max_age) = cookie.max_age() {
            return max_age <= Duration::ZERO;
        }
        if let Some(expires) = cookie.expires().and_then(|e| e.datetime()) {
            return expires <= OffsetDateTime::now_utc();
        }
        false
    }
}

impl Jar for MemoryJar {
    fn read(&self) -> String {
        self.lock()
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, entry: &str) {
        let parsed = match Cookie::parse(entry) {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::debug!(entry = %entry, error = %error, "discarding unparseable jar write");
                return;
            }
        };
        let name = parsed.name().to_string();

        let mut entries = self.lock();
        if Self::is_expired(&parsed) {
            entries.retain(|(existing, _)| *existing != name);
            return;
        }

        let value = parsed.value().to_string();
        match entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => entries.push((name, value)),
        }
    }
}
