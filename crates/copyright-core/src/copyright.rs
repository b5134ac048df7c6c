//! The copyright notice object

use crate::clock::{SystemClock, YearSource};
use crate::error::CopyrightError;
use crate::html::wrap_html;
use crate::options::{CopyrightOptions, OptionsPatch, RenderOptions};
use crate::template::{parse_template, TemplateContext};
use crate::validate::validate_options;
use crate::years::resolve_years;
use std::fmt;

/// A validated copyright notice.
///
/// Holds its own copy of the options and a year source. Nothing is cached:
/// every `get_text` reads the current year again.
///
/// ```
/// use copyright_core::{Copyright, CopyrightOptions, FixedYear};
///
/// let notice = Copyright::with_clock(
///     CopyrightOptions::new("John Doe").with_start_year(2020),
///     FixedYear(2026),
/// )
/// .unwrap();
/// assert_eq!(notice.get_text(), "\u{00A9} 2020-2026 John Doe");
/// ```
#[derive(Debug, Clone)]
pub struct Copyright<C: YearSource = SystemClock> {
    options: CopyrightOptions,
    clock: C,
}

impl Copyright<SystemClock> {
    /// Validate `options` against the system clock and build a notice
    ///
    /// # Errors
    /// `EmptyOwner` for a blank owner, `InvalidYearRange` when the resolved
    /// end year precedes the start year
    pub fn new(options: CopyrightOptions) -> Result<Self, CopyrightError> {
        Self::with_clock(options, SystemClock)
    }

    /// Same as [`Copyright::new`]
    pub fn create(options: CopyrightOptions) -> Result<Self, CopyrightError> {
        Self::new(options)
    }
}

impl<C: YearSource> Copyright<C> {
    pub fn with_clock(options: CopyrightOptions, clock: C) -> Result<Self, CopyrightError> {
        validate_options(&options, clock.current_year())?;
        Ok(Self { options, clock })
    }

    pub fn options(&self) -> &CopyrightOptions {
        &self.options
    }

    /// Merge `patch` into the current options.
    ///
    /// The merged options are validated as a whole before being committed;
    /// on error the stored options are untouched.
    pub fn set_options(&mut self, patch: &OptionsPatch) -> Result<&mut Self, CopyrightError> {
        let merged = self.options.merged(patch);
        if let Err(err) = validate_options(&merged, self.clock.current_year()) {
            tracing::debug!(error = %err, "rejected options update");
            return Err(err);
        }
        self.options = merged;
        Ok(self)
    }

    /// Start and end year as they would be rendered right now
    pub fn resolved_years(&self) -> (i32, i32) {
        resolve_years(
            self.options.start_year,
            self.options.end_year,
            self.clock.current_year(),
        )
    }

    /// Plain-text notice
    pub fn get_text(&self) -> String {
        let (start_year, end_year) = self.resolved_years();
        let ctx = TemplateContext {
            owner: &self.options.owner,
            start_year,
            end_year,
        };
        tracing::debug!(
            custom_template = self.options.template.is_some(),
            format = %self.options.format.unwrap_or_default(),
            start_year,
            end_year,
            "rendering copyright notice"
        );
        parse_template(self.options.effective_template(), &ctx)
    }

    /// Notice wrapped in an HTML element, e.g. `<span>© 2026 John Doe</span>`
    pub fn to_html(&self, render: &RenderOptions) -> String {
        wrap_html(&self.get_text(), render)
    }
}

impl<C: YearSource> fmt::Display for Copyright<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_text())
    }
}
