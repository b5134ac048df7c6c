//! Copyright notice generation
//!
//! This crate builds copyright notice strings from a small set of options
//! (owner, year range, preset or custom template) and wraps them as HTML:
//! - Year resolution against the current year (`endYear: "auto"`)
//! - `{variable}` template substitution with four built-in presets
//! - Validation of owner and year ordering
//! - HTML string output and, with the `dom` feature, rendering through a
//!   host document
//!
//! # Feature Flags
//!
//! - `dom` (default): `DomHost` trait and `Copyright::render`

pub mod clock;
pub mod copyright;
#[cfg(feature = "dom")]
pub mod dom;
pub mod error;
pub mod formats;
pub mod html;
pub mod options;
pub mod style;
pub mod template;
pub mod validate;
pub mod years;

pub use clock::{current_year, FixedYear, SystemClock, YearSource};
pub use copyright::Copyright;
#[cfg(feature = "dom")]
pub use dom::{DomHost, RenderTarget};
pub use error::CopyrightError;
pub use formats::CopyrightFormat;
pub use html::wrap_html;
pub use options::{CopyrightOptions, EndYear, OptionsPatch, RenderOptions, DEFAULT_TAG};
pub use style::{camel_to_kebab, style_object_to_string, StyleMap};
pub use template::{
    parse_template, template_placeholders, TemplateContext, TemplateVariable, COPYRIGHT_SYMBOL,
};
pub use validate::validate_options;
pub use years::{format_year_range, resolve_years};
