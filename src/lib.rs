//! # docjar
//!
//! A `document.cookie`-style key-value accessor over pluggable cookie jar
//! backends.
//!
//! `docjar` exposes the familiar five-operation cookie surface — get, set,
//! remove, existence check, key enumeration — on top of a minimal `Jar`
//! trait (`read` the whole serialized jar, `write` one entry). The jar
//! backend owns merge-on-write semantics, exactly like a browser host; the
//! store itself is stateless and re-reads the live jar string on every call.
//!
//! ## Quick Start
//!
//! ```rust
//! use docjar::jar::MemoryJar;
//! use docjar::store::CookieStore;
//! use docjar::wire::Attributes;
//!
//! let store = CookieStore::new(MemoryJar::new());
//! store.set_item("session", "abc; 123", &Attributes::default());
//! assert_eq!(store.get_item("session").as_deref(), Some("abc; 123"));
//! assert_eq!(store.keys(), vec!["session".to_string()]);
//! ```
//!
//! ## Modules
//!
//! - [`store`] - The `CookieStore` accessor itself
//! - [`jar`] - The `Jar` backend trait and the in-memory backend
//! - [`wire`] - Pure jar parsing and entry serialization
//! - [`expiry`] - Expiry variants and clause rendering
//! - [`encoding`] - Percent-encoding of names and values
//! - [`error`] - Key validation errors
//!
//! ## Encoding contract
//!
//! Names and values are percent-encoded on write and percent-decoded on
//! read, so the reserved cookie-syntax characters (`;`, `=`, whitespace,
//! `%`) never appear unescaped inside an entry. Callers must never
//! pre-encode.

pub mod encoding;
pub mod error;
pub mod expiry;
pub mod jar;
pub mod store;
pub mod wire;
