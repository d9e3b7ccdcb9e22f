//! resdiv3 - find three-resistor dividers with two output taps.

use clap::Parser;
use resdiv::{DividerCore, Series};
use resdiv_cli::{init_tracing, output_taps, parse_series, parse_volts, OutputFormat, TAP_DIAGRAM, TAP_USAGE};
use std::process;

#[derive(Parser)]
#[command(name = "resdiv3")]
#[command(about = "Two-tap resistor divider search over the E24/E12/E6/E3 series", long_about = None)]
#[command(version)]
#[command(after_help = TAP_DIAGRAM)]
struct Cli {
    /// Resistor series: 24 (default), 12, 6 or 3
    #[arg(short, long, value_name = "SERIES", default_value = "24", value_parser = parse_series)]
    series: Series,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// <Vin1> <Vin2> <Vout1> <Vout2> <Verror_max>
    #[arg(value_name = "VOLTS", allow_negative_numbers = true)]
    values: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let volts = match parse_volts(&cli.values) {
        Ok(volts) => volts,
        Err(bad) => {
            eprintln!("Error: '{}' is not a voltage", bad);
            eprintln!("{}", TAP_DIAGRAM);
            eprintln!("{}", TAP_USAGE);
            return 1;
        }
    };

    let (vin, vout, max_error) = match volts.as_slice() {
        [vin1, vin2, vout1, vout2, max_error] => ([*vin1, *vin2], [*vout1, *vout2], *max_error),
        _ => {
            eprintln!("{}", TAP_DIAGRAM);
            eprintln!("{}", TAP_USAGE);
            return 1;
        }
    };

    match DividerCore::find_taps(vin, vout, max_error, cli.series) {
        Ok(result) => output_taps(&result, cli.format),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
