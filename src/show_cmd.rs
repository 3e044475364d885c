use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use weeks_calendar::Gregorian;
use weeks_navigator::{DateInput, NavigatorConfig, WeekWindow, WeeksNavigator};

use crate::cli::{Move, ShowArgs};
use crate::config::WeeksConfig;
use crate::convert;
use crate::render::{self, OutputFormat};

/// One rendered step of a `show` run.
#[derive(Debug, Serialize)]
struct WeekReport {
    label: String,
    week: WeekWindow,
}

/// Run the `show` subcommand.
pub fn run(args: ShowArgs) -> Result<()> {
    let config = WeeksConfig::load(&args.config)?;
    let nav_config =
        convert::build_navigator_config(&config.navigator, args.start_match.as_deref())?;
    let format = convert::parse_format(args.format.as_deref().unwrap_or(&config.output.format))?;

    let start = args.start.as_deref().unwrap_or(&config.navigator.start);
    let input: DateInput = start
        .parse()
        .with_context(|| format!("failed to parse start date {start:?}"))?;
    let reports = navigate(input, nav_config, &args.moves)?;

    match format {
        OutputFormat::Text => {
            let blocks: Vec<String> = reports
                .iter()
                .map(|r| render::week_text(&r.label, &r.week))
                .collect();
            print!("{}", blocks.join("\n"));
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&reports).context("failed to serialise weeks")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Builds a navigator and records the week after construction and after
/// every move.
fn navigate(
    input: DateInput,
    config: NavigatorConfig,
    moves: &[Move],
) -> Result<Vec<WeekReport>> {
    let mut nav = WeeksNavigator::with_provider(input, Gregorian, config)
        .context("failed to create navigator")?;
    info!(start = %nav.start_date(), n_moves = moves.len(), "navigating");

    let mut reports = vec![WeekReport {
        label: format!("Start {}", nav.start_date()),
        week: nav.week().clone(),
    }];
    for (i, m) in moves.iter().enumerate() {
        let week = match m {
            Move::Next => nav.increment_week(),
            Move::Prev => nav.decrement_week(),
            Move::Reset => nav.reset_week(),
        }
        .with_context(|| format!("move {} ({m:?}) failed", i + 1))?;
        reports.push(WeekReport {
            label: format!("{:?} #{}", m, i + 1),
            week: week.clone(),
        });
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use weeks_calendar::Weekday;

    #[test]
    fn records_one_report_per_move() {
        let reports = navigate(
            "2023-07-10".parse().unwrap(),
            NavigatorConfig::new(),
            &[Move::Next, Move::Prev, Move::Prev, Move::Reset],
        )
        .unwrap();
        assert_eq!(reports.len(), 5);
        let mondays: Vec<u8> = reports
            .iter()
            .map(|r| r.week.get(Weekday::Monday).unwrap().day)
            .collect();
        assert_eq!(mondays, vec![10, 17, 10, 3, 10]);
        assert_eq!(reports[0].week, reports[4].week);
    }

    #[test]
    fn reports_serialise_as_week_maps() {
        let reports =
            navigate("2023-07-10".parse().unwrap(), NavigatorConfig::new(), &[]).unwrap();
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["week"]["Monday"]["day"], 10);
        assert_eq!(json[0]["week"]["Monday"]["start_date"], true);
    }
}
