//! Command-line arguments and their mapping onto notice options

use anyhow::{bail, Context, Result};
use clap::Parser;
use copyright_core::{CopyrightFormat, CopyrightOptions, EndYear, OptionsPatch, RenderOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "copyright-notice")]
#[command(version, about = "Generate copyright notices as text or HTML")]
pub struct Args {
    /// JSON file with notice options (owner, startYear, endYear, format, template)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Copyright holder (overrides the config file)
    #[arg(short, long)]
    pub owner: Option<String>,

    /// First year of copyright
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last year of copyright, or "auto" for the current year
    #[arg(long)]
    pub end_year: Option<EndYear>,

    /// Preset: minimal, standard, full or legal
    #[arg(short, long)]
    pub format: Option<CopyrightFormat>,

    /// Custom template, e.g. "{symbol} {year} - {owner}"
    #[arg(short, long)]
    pub template: Option<String>,

    /// Wrap the notice in an HTML element
    #[arg(long)]
    pub html: bool,

    /// Element name for --html
    #[arg(long, default_value = "span")]
    pub tag: String,

    /// class attribute for --html
    #[arg(long = "class")]
    pub class_name: Option<String>,

    /// Inline style for --html as camelCase key=value (repeatable)
    #[arg(long = "style", value_parser = parse_style_entry)]
    pub style: Vec<(String, String)>,

    /// Treat this as the current year
    #[arg(long)]
    pub now: Option<i32>,

    /// List template variables and exit
    #[arg(long)]
    pub list_variables: bool,

    /// List preset formats and exit
    #[arg(long)]
    pub list_formats: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse `fontSize=12px` into a style entry
pub fn parse_style_entry(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid style '{}': expected key=value", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Invalid style '{}': empty property name", s));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

impl Args {
    /// Flag values as a partial update over the config file
    pub fn patch(&self) -> OptionsPatch {
        OptionsPatch {
            owner: self.owner.clone().map(Some),
            start_year: self.start_year.map(Some),
            end_year: self.end_year.map(Some),
            format: self.format.map(Some),
            template: self.template.clone().map(Some),
        }
    }

    /// Options from the config file (if any) with flags applied on top
    pub fn options(&self) -> Result<CopyrightOptions> {
        let base = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config {}", path.display()))?;
                serde_json::from_str::<CopyrightOptions>(&raw)
                    .with_context(|| format!("Failed to parse config {}", path.display()))?
            }
            None => {
                if self.owner.is_none() {
                    bail!("--owner is required when no --config file is given");
                }
                CopyrightOptions::default()
            }
        };
        Ok(base.merged(&self.patch()))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            tag: Some(self.tag.clone()),
            class_name: self.class_name.clone(),
            style: self.style.iter().cloned().collect(),
        }
    }

    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
