//! Option validation

use crate::error::CopyrightError;
use crate::options::CopyrightOptions;
use crate::years::resolve_years;

/// Check that the owner is not blank and the resolved range is ordered.
///
/// Years are resolved against `current_year` with the same rule used for
/// rendering, so `endYear: "auto"` is compared with the year at call time.
pub fn validate_options(
    options: &CopyrightOptions,
    current_year: i32,
) -> Result<(), CopyrightError> {
    if is_blank(&options.owner) {
        return Err(CopyrightError::EmptyOwner);
    }

    let (start, end) = resolve_years(options.start_year, options.end_year, current_year);
    if end < start {
        return Err(CopyrightError::InvalidYearRange { start, end });
    }

    Ok(())
}

/// Blank after trimming whitespace and the byte-order mark
fn is_blank(s: &str) -> bool {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::EndYear;
    use pretty_assertions::assert_eq;

    const NOW: i32 = 2026;

    #[test]
    fn test_empty_owner() {
        let result = validate_options(&CopyrightOptions::new(""), NOW);
        assert_eq!(result, Err(CopyrightError::EmptyOwner));
    }

    #[test]
    fn test_whitespace_owner() {
        let result = validate_options(&CopyrightOptions::new("   \t\n"), NOW);
        assert_eq!(result, Err(CopyrightError::EmptyOwner));
    }

    #[test]
    fn test_byte_order_mark_owner() {
        for owner in ["\u{FEFF}", " \u{FEFF}\t"] {
            let result = validate_options(&CopyrightOptions::new(owner), NOW);
            assert_eq!(result, Err(CopyrightError::EmptyOwner));
        }
        assert!(validate_options(&CopyrightOptions::new("\u{FEFF}ACME"), NOW).is_ok());
    }

    #[test]
    fn test_inverted_range() {
        let options = CopyrightOptions::new("Test")
            .with_start_year(2025)
            .with_end_year(2020);
        let err = validate_options(&options, NOW).unwrap_err();
        assert_eq!(
            err,
            CopyrightError::InvalidYearRange {
                start: 2025,
                end: 2020
            }
        );
        assert_eq!(
            err.to_string(),
            "End year (2020) cannot be less than start year (2025)"
        );
    }

    #[test]
    fn test_future_start_with_auto_end() {
        let options = CopyrightOptions::new("Test")
            .with_start_year(2030)
            .with_end_year(EndYear::Auto);
        assert_eq!(
            validate_options(&options, NOW),
            Err(CopyrightError::InvalidYearRange {
                start: 2030,
                end: 2026
            })
        );
    }

    #[test]
    fn test_past_end_without_start() {
        // Start defaults to now, which is after the explicit end
        let options = CopyrightOptions::new("Test").with_end_year(2020);
        assert!(validate_options(&options, NOW).is_err());
    }

    #[test]
    fn test_valid_options() {
        assert!(validate_options(&CopyrightOptions::new("Test"), NOW).is_ok());
        assert!(validate_options(
            &CopyrightOptions::new("Test")
                .with_start_year(2020)
                .with_end_year(2026),
            NOW
        )
        .is_ok());
        assert!(validate_options(
            &CopyrightOptions::new("Test")
                .with_start_year(2026)
                .with_end_year(EndYear::Auto),
            NOW
        )
        .is_ok());
    }

    #[test]
    fn test_owner_checked_before_years() {
        let options = CopyrightOptions::new(" ")
            .with_start_year(2025)
            .with_end_year(2020);
        assert_eq!(validate_options(&options, NOW), Err(CopyrightError::EmptyOwner));
    }
}
