//! Divider transfer function and decade scaling.

use serde::Serialize;

use crate::search::DividerTarget;

/// Output voltage of an unloaded two-resistor divider.
///
/// `r_top` sits between the input and the output node, `r_bottom` between the
/// output node and ground.
pub fn divider_output(vin: f64, r_top: f64, r_bottom: f64) -> f64 {
    vin * r_bottom / (r_top + r_bottom)
}

/// Decade applied to the top resistor for the whole search.
///
/// A single decade of values cannot express ratios much below 0.1, so the top
/// resistor is moved up by one or two decades when the target ratio is small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum Multiplier {
    #[default]
    X1,
    X10,
    X100,
}

impl Multiplier {
    pub fn factor(self) -> f64 {
        match self {
            Multiplier::X1 => 1.0,
            Multiplier::X10 => 10.0,
            Multiplier::X100 => 100.0,
        }
    }

    /// Multiplier for a single output/input ratio.
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio < 0.01 {
            Multiplier::X100
        } else if ratio < 0.1 {
            Multiplier::X10
        } else {
            Multiplier::X1
        }
    }

    pub fn for_target(target: &DividerTarget) -> Self {
        Self::for_ratio(target.ratio())
    }

    /// Largest multiplier needed by either tap.
    pub fn for_taps(targets: &[DividerTarget; 2]) -> Self {
        targets
            .iter()
            .map(Self::for_target)
            .max()
            .unwrap_or_default()
    }
}
