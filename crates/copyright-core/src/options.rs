//! Notice configuration types

use crate::error::CopyrightError;
use crate::formats::CopyrightFormat;
use crate::style::StyleMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Element used by `to_html` / `render` when no tag is given
pub const DEFAULT_TAG: &str = "span";

/// Last year of the copyright period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndYear {
    /// Track the current year at render time
    Auto,
    Year(i32),
}

impl From<i32> for EndYear {
    fn from(year: i32) -> Self {
        EndYear::Year(year)
    }
}

impl fmt::Display for EndYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndYear::Auto => f.write_str("auto"),
            EndYear::Year(year) => write!(f, "{}", year),
        }
    }
}

impl FromStr for EndYear {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "auto" {
            return Ok(EndYear::Auto);
        }
        s.parse::<i32>()
            .map(EndYear::Year)
            .map_err(|_| format!("Invalid end year '{}': expected a year or \"auto\"", s))
    }
}

impl Serialize for EndYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EndYear::Auto => serializer.serialize_str("auto"),
            EndYear::Year(year) => serializer.serialize_i32(*year),
        }
    }
}

impl<'de> Deserialize<'de> for EndYear {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Year(i32),
            Keyword(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Year(year) => Ok(EndYear::Year(year)),
            Raw::Keyword(word) if word == "auto" => Ok(EndYear::Auto),
            Raw::Keyword(word) => Err(D::Error::custom(format!(
                "expected a year or \"auto\", got \"{}\"",
                word
            ))),
        }
    }
}

/// Configuration for a copyright notice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyrightOptions {
    /// Copyright holder; must not be blank. A missing key reads as empty
    /// so validation reports it as `EmptyOwner`.
    #[serde(default)]
    pub owner: String,
    /// First year; defaults to the current year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_year: Option<i32>,
    /// Last year; defaults to `Auto`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<EndYear>,
    /// Preset; defaults to `minimal`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<CopyrightFormat>,
    /// Custom template, takes precedence over `format`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl CopyrightOptions {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..Self::default()
        }
    }

    pub fn with_start_year(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    pub fn with_end_year(mut self, end: impl Into<EndYear>) -> Self {
        self.end_year = Some(end.into());
        self
    }

    pub fn with_format(mut self, format: CopyrightFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Parse options from JSON and validate them against the current year
    pub fn from_json(json: &str) -> Result<Self, CopyrightError> {
        let options: CopyrightOptions = serde_json::from_str(json)?;
        crate::validate::validate_options(&options, crate::clock::current_year())?;
        Ok(options)
    }

    /// Template that will be rendered: custom template, then preset, then `minimal`
    pub fn effective_template(&self) -> &str {
        match &self.template {
            Some(template) => template,
            None => self.format.unwrap_or_default().template(),
        }
    }

    /// Shallow merge: every field set in `patch` replaces the stored one
    pub fn merged(&self, patch: &OptionsPatch) -> CopyrightOptions {
        let mut merged = self.clone();
        if let Some(owner) = &patch.owner {
            merged.owner = owner.clone().unwrap_or_default();
        }
        if let Some(start_year) = patch.start_year {
            merged.start_year = start_year;
        }
        if let Some(end_year) = patch.end_year {
            merged.end_year = end_year;
        }
        if let Some(format) = patch.format {
            merged.format = format;
        }
        if let Some(template) = &patch.template {
            merged.template = template.clone();
        }
        merged
    }
}

/// Partial update for [`CopyrightOptions`].
///
/// Outer `None` leaves a field alone. For optional fields `Some(None)`
/// clears the stored value; in JSON that is an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsPatch {
    /// `Some(None)` clears the owner, which validation then rejects
    #[serde(default, deserialize_with = "present")]
    pub owner: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub start_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    pub end_year: Option<Option<EndYear>>,
    #[serde(default, deserialize_with = "present")]
    pub format: Option<Option<CopyrightFormat>>,
    #[serde(default, deserialize_with = "present")]
    pub template: Option<Option<String>>,
}

/// Distinguish an explicit `null` from a missing key
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl OptionsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CopyrightError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(Some(owner.into()));
        self
    }

    pub fn clear_owner(mut self) -> Self {
        self.owner = Some(None);
        self
    }

    pub fn start_year(mut self, year: i32) -> Self {
        self.start_year = Some(Some(year));
        self
    }

    pub fn clear_start_year(mut self) -> Self {
        self.start_year = Some(None);
        self
    }

    pub fn end_year(mut self, end: impl Into<EndYear>) -> Self {
        self.end_year = Some(Some(end.into()));
        self
    }

    pub fn clear_end_year(mut self) -> Self {
        self.end_year = Some(None);
        self
    }

    pub fn format(mut self, format: CopyrightFormat) -> Self {
        self.format = Some(Some(format));
        self
    }

    pub fn clear_format(mut self) -> Self {
        self.format = Some(None);
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(Some(template.into()));
        self
    }

    pub fn clear_template(mut self) -> Self {
        self.template = Some(None);
        self
    }
}

/// Presentation options for `to_html` and `render`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Element name; `span` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Value for the `class` attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Inline styles with camelCase property names
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub style: StyleMap,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, CopyrightError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(key, value);
        self
    }

    pub fn tag(&self) -> &str {
        self.tag.as_deref().unwrap_or(DEFAULT_TAG)
    }

    /// Class name, if set and non-empty
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref().filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"owner":"ACME","startYear":2020,"endYear":"auto","format":"full"}"#;
        let options: CopyrightOptions = serde_json::from_str(json).unwrap();
        assert_eq!(
            options,
            CopyrightOptions::new("ACME")
                .with_start_year(2020)
                .with_end_year(EndYear::Auto)
                .with_format(CopyrightFormat::Full)
        );
    }

    #[test]
    fn test_missing_owner_reports_empty_owner() {
        assert_eq!(
            CopyrightOptions::from_json(r#"{"startYear":2020}"#),
            Err(CopyrightError::EmptyOwner)
        );
    }

    #[test]
    fn test_null_owner_in_patch_clears() {
        let patch = OptionsPatch::from_json(r#"{"owner":null}"#).unwrap();
        assert_eq!(patch, OptionsPatch::new().clear_owner());
        let merged = CopyrightOptions::new("ACME").merged(&patch);
        assert_eq!(merged.owner, "");
    }

    #[test]
    fn test_end_year_numeric() {
        let options: CopyrightOptions =
            serde_json::from_str(r#"{"owner":"ACME","endYear":2025}"#).unwrap();
        assert_eq!(options.end_year, Some(EndYear::Year(2025)));
    }

    #[test]
    fn test_end_year_rejects_other_strings() {
        let result = serde_json::from_str::<CopyrightOptions>(r#"{"owner":"A","endYear":"soon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_skips_unset() {
        let json = serde_json::to_string(&CopyrightOptions::new("A").with_end_year(EndYear::Auto))
            .unwrap();
        assert_eq!(json, r#"{"owner":"A","endYear":"auto"}"#);
    }

    #[test]
    fn test_end_year_from_str() {
        assert_eq!("auto".parse::<EndYear>(), Ok(EndYear::Auto));
        assert_eq!(" 2024 ".parse::<EndYear>(), Ok(EndYear::Year(2024)));
        assert!("next".parse::<EndYear>().is_err());
    }

    #[test]
    fn test_effective_template_precedence() {
        let options = CopyrightOptions::new("A");
        assert_eq!(options.effective_template(), "{symbol} {year} {owner}");

        let options = options.with_format(CopyrightFormat::Standard);
        assert_eq!(
            options.effective_template(),
            "Copyright {symbol} {year} {owner}"
        );

        let options = options.with_template("{owner} {year}");
        assert_eq!(options.effective_template(), "{owner} {year}");
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let options = CopyrightOptions::new("John Doe").with_start_year(2020);
        let merged = options.merged(&OptionsPatch::new().owner("Jane Doe"));
        assert_eq!(merged, CopyrightOptions::new("Jane Doe").with_start_year(2020));
    }

    #[test]
    fn test_merge_clears_fields() {
        let options = CopyrightOptions::new("A")
            .with_start_year(2020)
            .with_template("{owner}");
        let merged = options.merged(&OptionsPatch::new().clear_start_year().clear_template());
        assert_eq!(merged, CopyrightOptions::new("A"));
    }

    #[test]
    fn test_patch_json_null_vs_missing() {
        let patch = OptionsPatch::from_json(r#"{"startYear":null,"format":"legal"}"#).unwrap();
        assert_eq!(patch.start_year, Some(None));
        assert_eq!(patch.end_year, None);
        assert_eq!(patch.format, Some(Some(CopyrightFormat::Legal)));
        assert!(!patch.is_empty());
        assert!(OptionsPatch::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_render_options_defaults() {
        let render = RenderOptions::new();
        assert_eq!(render.tag(), "span");
        assert_eq!(render.class_name(), None);
        assert!(render.style.is_empty());
    }

    #[test]
    fn test_render_options_json() {
        let render = RenderOptions::from_json(
            r#"{"tag":"footer","className":"legal","style":{"fontSize":"12px"}}"#,
        )
        .unwrap();
        assert_eq!(render.tag(), "footer");
        assert_eq!(render.class_name(), Some("legal"));
        assert_eq!(render.style.get("fontSize"), Some("12px"));
    }

    #[test]
    fn test_empty_class_name_is_ignored() {
        assert_eq!(RenderOptions::new().with_class_name("").class_name(), None);
    }
}
