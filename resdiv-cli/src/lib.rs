//! Shared argument handling and output for the `resdiv` and `resdiv3` tools.

use clap::ValueEnum;
use resdiv::report;
use resdiv::{PairSearchResult, ResDivError, Series, TapSearchResult};
use tracing_subscriber::filter::LevelFilter;

pub const PAIR_USAGE: &str = "resdiv [-s <res series>] <Vin> <Vout> <Verror_max>
 where <res series> is one of 24(default), 12, 6 or 3";

pub const TAP_USAGE: &str = "resdiv3 [-s <res series>] <Vin1> <Vin2> <Vout1> <Vout2> <Verror_max>
 where <res series> is one of 24(default), 12, 6 or 3";

pub const PAIR_DIAGRAM: &str = "
   | Vin
  | | R1
   | Vout
  | | R2
  GND
";

pub const TAP_DIAGRAM: &str = "
   | VinX
   |
  | |
  | | R1
  | |
   |
   | Vout1 @ Vin1
   |
  | |
  | | R2
  | |
   |
   | Vout2 @ Vin2
   |
  | |
  | | R3
  | |
   |
  GND
";

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// One report line per match
    Human,
    /// JSON document with summary and deviations
    Json,
}

/// `-s` value parser; rejects anything but 24, 12, 6 and 3.
pub fn parse_series(s: &str) -> Result<Series, ResDivError> {
    s.parse()
}

/// Parse the positional voltages once clap has accepted the options.
///
/// Returns the first value that is not a number.
pub fn parse_volts(values: &[String]) -> Result<Vec<f64>, String> {
    values
        .iter()
        .map(|v| v.trim().parse::<f64>().map_err(|_| v.clone()))
        .collect()
}

/// Log to stderr so stdout only carries results.
pub fn init_tracing(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn output_pairs(result: &PairSearchResult, format: OutputFormat) -> i32 {
    match format {
        OutputFormat::Human => {
            for candidate in &result.candidates {
                println!("{}", report::pair_line(candidate, &result.target));
            }
            0
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "target": result.target,
                "max_error": result.max_error,
                "summary": result.summary,
                "candidates": result.candidates.iter().map(|c| {
                    let dev = c.deviation(&result.target);
                    serde_json::json!({
                        "r1": c.r1,
                        "r2": c.r2,
                        "vout": c.vout,
                        "diff": dev.diff,
                        "percent": dev.percent,
                    })
                }).collect::<Vec<_>>(),
            });
            print_json(&output)
        }
    }
}

pub fn output_taps(result: &TapSearchResult, format: OutputFormat) -> i32 {
    match format {
        OutputFormat::Human => {
            for candidate in &result.candidates {
                println!("{}", report::tap_lines(candidate, &result.targets));
            }
            0
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "targets": result.targets,
                "max_error": result.max_error,
                "summary": result.summary,
                "candidates": result.candidates.iter().map(|c| {
                    let [dev1, dev2] = c.deviations(&result.targets);
                    serde_json::json!({
                        "r1": c.r1,
                        "r2": c.r2,
                        "r3": c.r3,
                        "vout1": c.vout1,
                        "vout2": c.vout2,
                        "diff1": dev1.diff,
                        "percent1": dev1.percent,
                        "diff2": dev2.diff,
                        "percent2": dev2.percent,
                    })
                }).collect::<Vec<_>>(),
            });
            print_json(&output)
        }
    }
}

fn print_json(output: &serde_json::Value) -> i32 {
    match serde_json::to_string_pretty(output) {
        Ok(text) => {
            println!("{}", text);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_volts() {
        assert_eq!(parse_volts(&strings(&["5", "3.3", "0.05"])).unwrap(), vec![5.0, 3.3, 0.05]);
        assert_eq!(parse_volts(&strings(&["-1.5"])).unwrap(), vec![-1.5]);
        assert!(parse_volts(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_parse_volts_reports_first_bad_value() {
        let err = parse_volts(&strings(&["5", "five", "x"])).unwrap_err();
        assert_eq!(err, "five");
    }

    #[test]
    fn test_parse_series_rejects_unknown() {
        assert_eq!(parse_series("12").unwrap(), Series::E12);
        assert!(parse_series("7").unwrap_err().to_string().contains("Unknown series E7"));
    }
}
