//! Cookie expiry variants and clause rendering.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Fixed far-future absolute date used for effectively non-expiring cookies.
pub const FAR_FUTURE: &str = "Fri, 31 Dec 9999 23:59:59 GMT";

/// Fixed past date used to expire an entry on the backend's next access.
pub const EPOCH: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// IMF-fixdate, the canonical GMT form cookie attributes use.
const COOKIE_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// How long a cookie entry lives.
///
/// Omitting an `Expiry` on write produces a session cookie, cleared by the
/// backend at the end of the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiry {
    /// Relative lifetime in seconds, emitted as a `max-age` clause.
    MaxAge(i64),
    /// A pre-formatted absolute time, emitted verbatim as an `expires`
    /// clause. The caller is responsible for a well-formed date string.
    Absolute(String),
    /// A point in time, emitted as an IMF-fixdate `expires` clause.
    At(OffsetDateTime),
    /// Far-future `expires` clause (year 9999), effectively non-expiring.
    Never,
}

impl Expiry {
    /// Render this expiry as a `; max-age=...` or `; expires=...` clause.
    pub fn clause(&self) -> String {
        match self {
            Expiry::MaxAge(seconds) => format!("; max-age={seconds}"),
            Expiry::Absolute(when) => format!("; expires={when}"),
            Expiry::At(when) => format!("; expires={}", format_http_date(*when)),
            Expiry::Never => format!("; expires={FAR_FUTURE}"),
        }
    }
}

/// Format a point in time as an IMF-fixdate string in GMT,
/// e.g. `Thu, 01 Jan 1970 00:00:00 GMT`.
pub fn format_http_date(when: OffsetDateTime) -> String {
    // The description contains only always-available components, so
    // formatting cannot fail for an in-range datetime.
    when.to_offset(UtcOffset::UTC)
        .format(&COOKIE_DATE)
        .unwrap_or_else(|_| EPOCH.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_max_age_clause() {
        assert_eq!(Expiry::MaxAge(31536000).clause(), "; max-age=31536000");
        assert_eq!(Expiry::MaxAge(0).clause(), "; max-age=0");
    }

    #[test]
    fn test_absolute_clause_is_verbatim() {
        let expiry = Expiry::Absolute("Wed, 21 Oct 2026 07:28:00 GMT".to_string());
        assert_eq!(expiry.clause(), "; expires=Wed, 21 Oct 2026 07:28:00 GMT");
    }

    #[test]
    fn test_never_clause_is_far_future() {
        assert_eq!(Expiry::Never.clause(), "; expires=Fri, 31 Dec 9999 23:59:59 GMT");
    }

    #[test]
    fn test_at_clause_formats_gmt() {
        let expiry = Expiry::At(datetime!(1970-01-01 0:00 UTC));
        assert_eq!(expiry.clause(), format!("; expires={EPOCH}"));
    }

    #[test]
    fn test_at_clause_converts_offset_to_gmt() {
        // 02:30 at +02:30 is midnight GMT.
        let expiry = Expiry::At(datetime!(2030-06-15 2:30 +2:30));
        assert_eq!(expiry.clause(), "; expires=Sat, 15 Jun 2030 00:00:00 GMT");
    }
}
