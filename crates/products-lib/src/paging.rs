//! Pagination parameters for catalog listings.
//!
//! Query strings are parsed leniently: a value is read as its leading
//! integer (`"2abc"` is 2, `"1.5"` is 1) and anything without leading digits
//! is "not a number". Out-of-range values are never rejected; they simply
//! select an empty window.

use std::ops::Range;

use serde::Serialize;

/// Page used when the caller does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_LIMIT: i64 = 10;

/// A requested page of results.
///
/// `None` in either position means the raw value was not a number; it
/// serializes as `null` and selects no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Some(DEFAULT_PAGE),
            limit: Some(DEFAULT_LIMIT),
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page: Some(page),
            limit: Some(limit),
        }
    }

    /// Build a request from raw query values, applying defaults for absent ones.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: page.map_or(Some(DEFAULT_PAGE), parse_leading_int),
            limit: limit.map_or(Some(DEFAULT_LIMIT), parse_leading_int),
        }
    }

    /// Index range selected within a collection of `len` items.
    ///
    /// The nominal window is `[(page - 1) * limit, (page - 1) * limit + limit)`.
    /// Negative bounds count back from the end and both bounds are clamped to
    /// `[0, len]`, so the result is always safe to slice with.
    pub fn window(&self, len: usize) -> Range<usize> {
        let (Some(page), Some(limit)) = (self.page, self.limit) else {
            return 0..0;
        };

        let start = page.saturating_sub(1).saturating_mul(limit);
        let end = start.saturating_add(limit);

        let start = resolve_bound(start, len);
        let end = resolve_bound(end, len);
        if end <= start {
            0..0
        } else {
            start..end
        }
    }
}

/// Parse the leading decimal integer of `raw`.
///
/// Leading whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Returns `None` when no digit follows. Values beyond the
/// `i64` range saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value = rest[..digits_len]
        .bytes()
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        });

    Some(if negative { -value } else { value })
}

fn resolve_bound(bound: i64, len: usize) -> usize {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if bound < 0 {
        len_i.saturating_add(bound).max(0)
    } else {
        bound.min(len_i)
    };
    usize::try_from(resolved).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_integers() {
        assert_eq!(parse_leading_int("2"), Some(2));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("2abc"), Some(2));
        assert_eq!(parse_leading_int("1.5"), Some(1));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn defaults_apply_to_absent_values() {
        let request = PageRequest::from_query(None, None);
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page, Some(1));
        assert_eq!(request.limit, Some(10));
    }

    #[test]
    fn window_selects_contiguous_slice() {
        assert_eq!(PageRequest::new(1, 2).window(5), 0..2);
        assert_eq!(PageRequest::new(2, 2).window(5), 2..4);
        assert_eq!(PageRequest::new(3, 2).window(5), 4..5);
    }

    #[test]
    fn window_past_end_is_empty() {
        assert!(PageRequest::new(4, 2).window(5).is_empty());
        assert!(PageRequest::new(100, 10).window(3).is_empty());
    }

    #[test]
    fn window_with_non_numeric_values_is_empty() {
        let request = PageRequest::from_query(Some("abc"), Some("10"));
        assert_eq!(request.page, None);
        assert!(request.window(3).is_empty());

        let request = PageRequest::from_query(Some("1"), Some("many"));
        assert!(request.window(3).is_empty());
    }

    #[test]
    fn negative_bounds_count_from_end() {
        // page 0 => [-limit, 0): the end bound is 0, so nothing is selected.
        assert!(PageRequest::new(0, 2).window(5).is_empty());
        // page -1, limit 2 => [-4, -2) => [1, 3)
        assert_eq!(PageRequest::new(-1, 2).window(5), 1..3);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert!(PageRequest::new(i64::MAX, i64::MAX).window(3).is_empty());
        assert!(PageRequest::new(i64::MIN, i64::MAX).window(3).len() <= 3);
    }
}
