//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use weeks_navigator::{NavigatorConfig, StartMatch};

use crate::config::NavigatorToml;
use crate::render::OutputFormat;

/// Parses a start-match name into the corresponding enum variant.
pub fn parse_start_match(s: &str) -> Result<StartMatch> {
    match s.to_lowercase().as_str() {
        "full-date" | "full" => Ok(StartMatch::FullDate),
        "day-of-month" | "day" => Ok(StartMatch::DayOfMonth),
        other => bail!("unknown start match: {other:?} (expected full-date or day-of-month)"),
    }
}

/// Parses an output format name into the corresponding enum variant.
pub fn parse_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?} (expected text or json)"),
    }
}

/// Builds a [`NavigatorConfig`] from the TOML section, with an optional
/// command-line override for the start-match rule.
pub fn build_navigator_config(
    toml: &NavigatorToml,
    start_match_override: Option<&str>,
) -> Result<NavigatorConfig> {
    let start_match = parse_start_match(start_match_override.unwrap_or(&toml.start_match))?;
    Ok(NavigatorConfig::new().with_start_match(start_match))
}
