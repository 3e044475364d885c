use anyhow::{Context, Result};
use tracing::debug;

use weeks_calendar::{CalendarYearProvider, Gregorian};
use weeks_navigator::resolve_month;

use crate::cli::YearArgs;
use crate::config::WeeksConfig;
use crate::convert;
use crate::render::{self, OutputFormat};

/// Run the `year` subcommand.
pub fn run(args: YearArgs) -> Result<()> {
    let config = WeeksConfig::load(&args.config)?;
    let format = convert::parse_format(args.format.as_deref().unwrap_or(&config.output.format))?;

    let calendar = Gregorian.full_calendar_year(args.year);
    debug!(year = args.year, days = calendar.day_count(), "year calendar generated");

    let months = match args.month.as_deref() {
        Some(name) => {
            let month = resolve_month(name, Gregorian.months_list())?;
            let entry = calendar
                .entry(month)
                .with_context(|| format!("{month} missing from {} calendar", args.year))?;
            std::slice::from_ref(entry)
        }
        None => calendar.months(),
    };

    match format {
        OutputFormat::Text => {
            let grids: Vec<String> = months
                .iter()
                .map(|m| render::month_grid(args.year, m))
                .collect();
            print!("{}", grids.join("\n"));
        }
        OutputFormat::Json => {
            let json = if args.month.is_some() {
                serde_json::to_string_pretty(&months[0])
            } else {
                serde_json::to_string_pretty(&calendar)
            }
            .context("failed to serialise calendar")?;
            println!("{json}");
        }
    }
    Ok(())
}
