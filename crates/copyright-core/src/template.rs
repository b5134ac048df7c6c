//! Template variable substitution
//!
//! Templates contain `{name}` placeholders where `name` is made of ASCII
//! letters, digits and underscores. Five names are recognised; anything else
//! is left in the output exactly as written, braces included.

use crate::years::format_year_range;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// The copyright sign, U+00A9
pub const COPYRIGHT_SYMBOL: &str = "\u{00A9}";

lazy_static! {
    /// `{identifier}` placeholder
    static ref PLACEHOLDER_PATTERN: Regex = Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap();
}

/// Resolved values for one render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateContext<'a> {
    pub owner: &'a str,
    pub start_year: i32,
    pub end_year: i32,
}

/// The fixed set of template variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVariable {
    Symbol,
    Year,
    Owner,
    StartYear,
    EndYear,
}

impl TemplateVariable {
    pub const ALL: [TemplateVariable; 5] = [
        TemplateVariable::Symbol,
        TemplateVariable::Year,
        TemplateVariable::Owner,
        TemplateVariable::StartYear,
        TemplateVariable::EndYear,
    ];

    /// Placeholder name as written inside braces
    pub fn name(self) -> &'static str {
        match self {
            TemplateVariable::Symbol => "symbol",
            TemplateVariable::Year => "year",
            TemplateVariable::Owner => "owner",
            TemplateVariable::StartYear => "startYear",
            TemplateVariable::EndYear => "endYear",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TemplateVariable::Symbol => "Copyright symbol (\u{00A9})",
            TemplateVariable::Year => "Year or year range (e.g. 2020-2026)",
            TemplateVariable::Owner => "Owner name",
            TemplateVariable::StartYear => "Start year only",
            TemplateVariable::EndYear => "End year only",
        }
    }

    /// Look up a placeholder name (case-sensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        TemplateVariable::ALL
            .into_iter()
            .find(|var| var.name() == name)
    }

    pub fn resolve(self, ctx: &TemplateContext<'_>) -> String {
        match self {
            TemplateVariable::Symbol => COPYRIGHT_SYMBOL.to_string(),
            TemplateVariable::Year => format_year_range(ctx.start_year, ctx.end_year),
            TemplateVariable::Owner => ctx.owner.to_string(),
            TemplateVariable::StartYear => ctx.start_year.to_string(),
            TemplateVariable::EndYear => ctx.end_year.to_string(),
        }
    }
}

/// Replace every known `{variable}` in `template` with its value.
///
/// Single left-to-right pass: substituted text is never scanned again, so an
/// owner named `{year}` comes out literally.
pub fn parse_template(template: &str, ctx: &TemplateContext<'_>) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            match TemplateVariable::from_name(key) {
                Some(var) => var.resolve(ctx),
                None => {
                    tracing::trace!(placeholder = key, "unknown template variable left as-is");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Placeholder identifiers in `template`, in order of appearance
pub fn template_placeholders(template: &str) -> Vec<&str> {
    PLACEHOLDER_PATTERN
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}
