//! Year resolution and year-range formatting

use crate::options::EndYear;

/// Resolve optional start/end years against the current year.
///
/// A missing start year defaults to `now`; a missing or `Auto` end year
/// also resolves to `now`. Never memoized: callers pass a fresh `now`.
pub fn resolve_years(start_year: Option<i32>, end_year: Option<EndYear>, now: i32) -> (i32, i32) {
    let start = start_year.unwrap_or(now);
    let end = match end_year {
        Some(EndYear::Year(year)) => year,
        Some(EndYear::Auto) | None => now,
    };
    (start, end)
}

/// Format a year range like "2020-2026", or a single year.
///
/// When `start >= end` the result is the END year alone. No ordering check
/// is performed here; the validator rejects inverted ranges upstream.
///
/// # Examples
/// ```
/// use copyright_core::format_year_range;
///
/// assert_eq!(format_year_range(2020, 2026), "2020-2026");
/// assert_eq!(format_year_range(2026, 2026), "2026");
/// assert_eq!(format_year_range(2026, 2020), "2020");
/// ```
pub fn format_year_range(start: i32, end: i32) -> String {
    if start < end {
        format!("{}-{}", start, end)
    } else {
        end.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_defaults_to_now() {
        assert_eq!(resolve_years(None, None, 2026), (2026, 2026));
    }

    #[test]
    fn test_resolve_auto_end() {
        assert_eq!(
            resolve_years(Some(2020), Some(EndYear::Auto), 2026),
            (2020, 2026)
        );
    }

    #[test]
    fn test_resolve_explicit_end() {
        assert_eq!(
            resolve_years(Some(2020), Some(EndYear::Year(2025)), 2026),
            (2020, 2025)
        );
    }

    #[test]
    fn test_resolve_explicit_end_without_start() {
        // Start falls back to now even when that inverts the range
        assert_eq!(
            resolve_years(None, Some(EndYear::Year(2020)), 2026),
            (2026, 2020)
        );
    }

    #[test]
    fn test_format_range() {
        assert_eq!(format_year_range(2020, 2026), "2020-2026");
    }

    #[test]
    fn test_format_equal_years() {
        assert_eq!(format_year_range(2026, 2026), "2026");
    }

    #[test]
    fn test_format_inverted_uses_end() {
        assert_eq!(format_year_range(2026, 2020), "2020");
    }
}
