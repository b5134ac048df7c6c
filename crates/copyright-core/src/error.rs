use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopyrightError {
    #[error("Owner name is required and cannot be empty")]
    EmptyOwner,

    #[error("End year ({end}) cannot be less than start year ({start})")]
    InvalidYearRange { start: i32, end: i32 },

    #[error("Target element not found: {0}")]
    TargetNotFound(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("Invalid options: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CopyrightError {
    fn from(err: serde_json::Error) -> Self {
        CopyrightError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_year_range_message_embeds_both_years() {
        let err = CopyrightError::InvalidYearRange {
            start: 2025,
            end: 2020,
        };
        assert_eq!(
            err.to_string(),
            "End year (2020) cannot be less than start year (2025)"
        );
    }

    #[test]
    fn test_target_not_found_message() {
        let err = CopyrightError::TargetNotFound("#footer".to_string());
        assert_eq!(err.to_string(), "Target element not found: #footer");
    }
}
