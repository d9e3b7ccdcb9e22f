//! Find a divider for a given input and output voltage and print the matches.

use resdiv::prelude::*;
use resdiv::report;

fn main() -> Result<(), ResDivError> {
    let args: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();

    let (vin, vout, max_error) = match args.as_slice() {
        [vin, vout, max_error] => (*vin, *vout, *max_error),
        [] => (5.0, 3.3, 0.05),
        _ => {
            eprintln!("Usage: cargo run --example find_divider [<Vin> <Vout> <Verror_max>]");
            std::process::exit(1);
        }
    };

    let result = DividerCore::find_pairs(vin, vout, max_error, Series::E12)?;

    println!(
        "{} -> {} V within {} V ({} series, R1 {:?})",
        vin, vout, max_error, result.summary.series, result.summary.multiplier
    );
    println!(
        "Matches: {} of {}",
        result.summary.matches, result.summary.evaluated
    );
    println!();

    for candidate in &result.candidates {
        println!("  {}", report::pair_line(candidate, &result.target));
    }

    if result.is_empty() {
        println!("No divider found; try a larger error or the E24 series.");
    }
    Ok(())
}
