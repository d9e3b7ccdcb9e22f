//! resdiv - resistor divider search over the standard decade series
//!
//! This library searches the E24/E12/E6/E3 resistor values for two-resistor
//! dividers, and for three-resistor dividers with two taps, whose output
//! voltages land within an absolute error of the requested targets.
//!
//! # Quick Start
//!
//! ```no_run
//! use resdiv::{DividerCore, Series};
//!
//! let result = DividerCore::find_pairs(5.0, 3.3, 0.05, Series::E24).unwrap();
//!
//! for candidate in &result.candidates {
//!     println!("{}", resdiv::report::pair_line(candidate, &result.target));
//! }
//! ```
//!
//! # Circuits
//!
//! ```text
//!    | Vin                        | VinX
//!   | | R1                       | | R1
//!    | Vout                       | Vout1 @ Vin1
//!   | | R2                       | | R2
//!   GND                           | Vout2 @ Vin2
//!                                | | R3
//!                                GND
//! ```
//!
//! - **Pair search**: every (R1, R2) combination of the selected series
//! - **Two-tap search**: every (R1, R2, R3) combination, both taps in tolerance
//! - **Decade scaling**: R1 is moved up one or two decades for small ratios

pub mod core;
pub mod model;
pub mod report;
pub mod search;
pub mod series;

// Re-export main types
pub use core::{DividerCore, PairSearchResult, ResDivError, SearchSummary, TapSearchResult};
pub use model::{divider_output, Multiplier};
pub use report::Deviation;
pub use search::{
    search_pairs, search_taps, Candidate, DividerTarget, PairRequest, TapCandidate, TapRequest,
};
pub use series::{Series, E24_VALUES};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Candidate, DividerCore, DividerTarget, Multiplier, PairSearchResult, ResDivError, Series,
        TapCandidate, TapSearchResult,
    };
}
