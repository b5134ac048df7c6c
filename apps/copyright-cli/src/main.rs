//! Copyright notice CLI
//!
//! Prints a notice built from flags and/or a JSON config file.
//! Logs go to stderr so stdout carries only the notice.

mod args;

use anyhow::Result;
use args::Args;
use clap::Parser;
use copyright_core::{
    current_year, template_placeholders, Copyright, CopyrightFormat, FixedYear, TemplateVariable,
};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())
}

/// Placeholders in `template` that are not template variables
fn unknown_placeholders(template: &str) -> Vec<&str> {
    template_placeholders(template)
        .into_iter()
        .filter(|name| TemplateVariable::from_name(name).is_none())
        .collect()
}

/// Write the listing or notice selected by `args` to `out`.
///
/// Flags are merged over the config file and the result is validated once,
/// when the notice is built.
fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    if args.list_variables {
        for var in TemplateVariable::ALL {
            writeln!(out, "{{{}}}\t{}", var.name(), var.description())?;
        }
        return Ok(());
    }

    if args.list_formats {
        for format in CopyrightFormat::ALL {
            writeln!(out, "{}\t{}", format, format.template())?;
        }
        return Ok(());
    }

    let options = args.options()?;
    let now = args.now.unwrap_or_else(current_year);
    tracing::debug!(now, owner = %options.owner, "building notice");

    if let Some(template) = &options.template {
        for name in unknown_placeholders(template) {
            tracing::warn!("Unknown template variable {{{}}} will be printed as-is", name);
        }
    }

    let notice = Copyright::with_clock(options, FixedYear(now))?;

    if args.html {
        writeln!(out, "{}", notice.to_html(&args.render_options()))?;
    } else {
        writeln!(out, "{}", notice.get_text())?;
    }

    Ok(())
}
