//! resdiv - find two-resistor dividers from the standard resistor series.

use clap::Parser;
use resdiv::{DividerCore, Series};
use resdiv_cli::{init_tracing, output_pairs, parse_series, parse_volts, OutputFormat, PAIR_DIAGRAM, PAIR_USAGE};
use std::process;

#[derive(Parser)]
#[command(name = "resdiv")]
#[command(about = "Two-resistor divider search over the E24/E12/E6/E3 series", long_about = None)]
#[command(version)]
#[command(after_help = PAIR_DIAGRAM)]
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

    /// <Vin> <Vout> <Verror_max>
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
            eprintln!("{}", PAIR_USAGE);
            return 1;
        }
    };

    let (vin, vout, max_error) = match volts.as_slice() {
        [vin, vout, max_error] => (*vin, *vout, *max_error),
        _ => {
            eprintln!("{}", PAIR_USAGE);
            return 1;
        }
    };

    match DividerCore::find_pairs(vin, vout, max_error, cli.series) {
        Ok(result) => output_pairs(&result, cli.format),
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}
