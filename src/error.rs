//! Key validation errors.

use thiserror::Error;

/// Rejection reasons for a cookie key.
///
/// A key must be non-empty and must not collide, case-insensitively, with a
/// reserved cookie attribute name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("cookie key is empty")]
    Empty,
    #[error("cookie key collides with reserved attribute `{0}`")]
    Reserved(String),
}
