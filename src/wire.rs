//! Pure jar parsing and entry serialization.
//!
//! Nothing in this module touches a backend: [`parse_jar`] turns a
//! serialized jar string into ordered raw pairs, and [`serialize_entry`]
//! renders one entry the way a `Set-Cookie`-style write expects it. Names
//! and values stay percent-encoded at this layer; decoding is the store's
//! concern.

use crate::encoding::encode;
use crate::expiry::Expiry;

/// Write-time attributes for one cookie entry.
///
/// `path` and `domain` are appended verbatim, unvalidated and unescaped;
/// the caller is responsible for RFC 2965-compliant values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    /// Lifetime of the entry; `None` means a session cookie.
    pub expiry: Option<Expiry>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
}

/// Split a serialized jar into ordered `(name, value)` pairs.
///
/// Pairs are returned in jar order, still percent-encoded, with whitespace
/// around separators trimmed. A segment without `=` becomes a pair with an
/// empty value. Empty segments are skipped, so an empty jar yields an empty
/// vector rather than a single empty name.
pub fn parse_jar(raw: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for segment in raw.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        match segment.split_once('=') {
            Some((name, value)) => {
                pairs.push((name.trim().to_string(), value.trim().to_string()));
            }
            None => pairs.push((segment.to_string(), String::new())),
        }
    }

    pairs
}

/// Render one jar entry: percent-encoded `name=value` followed by the
/// expiry, domain, path, and secure clauses in that order.
pub fn serialize_entry(key: &str, value: &str, attributes: &Attributes) -> String {
    let mut entry = format!("{}={}", encode(key), encode(value));

    if let Some(expiry) = &attributes.expiry {
        entry.push_str(&expiry.clause());
    }
    if let Some(domain) = &attributes.domain {
        entry.push_str("; domain=");
        entry.push_str(domain);
    }
    if let Some(path) = &attributes.path {
        entry.push_str("; path=");
        entry.push_str(path);
    }
    if attributes.secure {
        entry.push_str("; secure");
    }

    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_jar_ordered_pairs() {
        let pairs = parse_jar("a=1; b=2;c=3");
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
                ("c".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_jar_empty_string_yields_no_pairs() {
        assert!(parse_jar("").is_empty());
        assert!(parse_jar("  ;  ; ").is_empty());
    }

    #[test]
    fn test_parse_jar_valueless_segment() {
        let pairs = parse_jar("secure; a=1");
        assert_eq!(pairs[0], ("secure".to_string(), String::new()));
        assert_eq!(pairs[1], ("a".to_string(), "1".to_string()));
    }

    #[test]
    fn test_parse_jar_trims_whitespace_around_names() {
        let pairs = parse_jar("  a = 1 ;  b=2");
        assert_eq!(pairs[0], ("a".to_string(), "1".to_string()));
        assert_eq!(pairs[1], ("b".to_string(), "2".to_string()));
    }

    #[test]
    fn test_serialize_entry_session_cookie() {
        assert_eq!(
            serialize_entry("k", "v", &Attributes::default()),
            "k=v"
        );
    }

    #[test]
    fn test_serialize_entry_encodes_name_and_value() {
        let entry = serialize_entry("a key", "a;value=x", &Attributes::default());
        assert_eq!(entry, "a%20key=a%3Bvalue%3Dx");
    }

    #[test]
    fn test_serialize_entry_clause_order() {
        let attributes = Attributes {
            expiry: Some(Expiry::MaxAge(60)),
            path: Some("/app".to_string()),
            domain: Some("example.com".to_string()),
            secure: true,
        };
        assert_eq!(
            serialize_entry("k", "v", &attributes),
            "k=v; max-age=60; domain=example.com; path=/app; secure"
        );
    }
}
