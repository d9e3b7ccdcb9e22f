//! Exhaustive search over the selected resistor series.
//!
//! Both searches are plain nested enumerations: R1 outermost, then R2, then
//! R3, each in ascending series order. Only R1 is scaled by the multiplier.
//! Results come out in that enumeration order, so identical requests always
//! produce identical output.

use serde::Serialize;

use crate::core::ResDivError;
use crate::model::{divider_output, Multiplier};
use crate::series::Series;

/// Input voltage and wanted output voltage of one divider tap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DividerTarget {
    pub vin: f64,
    pub vout: f64,
}

impl DividerTarget {
    pub fn new(vin: f64, vout: f64) -> Self {
        Self { vin, vout }
    }

    pub fn ratio(&self) -> f64 {
        self.vout / self.vin
    }

    fn exceeds_input(&self) -> bool {
        self.vout > self.vin
    }
}

/// A validated two-resistor search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairRequest {
    pub target: DividerTarget,
    pub max_error: f64,
    pub series: Series,
}

impl PairRequest {
    pub fn new(
        vin: f64,
        vout: f64,
        max_error: f64,
        series: Series,
    ) -> Result<Self, ResDivError> {
        let target = DividerTarget::new(vin, vout);
        if target.exceeds_input() {
            return Err(ResDivError::OutputExceedsInput { vin, vout });
        }
        Ok(Self {
            target,
            max_error,
            series,
        })
    }

    pub fn multiplier(&self) -> Multiplier {
        Multiplier::for_target(&self.target)
    }

    pub fn evaluated(&self) -> usize {
        self.series.count().pow(2)
    }

    /// Run the search with the multiplier derived from the target.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate> {
        search_pairs(*self, self.multiplier())
    }
}

/// A validated three-resistor, two-tap search.
///
/// Tap 1 is the node between R1 and R2, tap 2 the node between R2 and R3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TapRequest {
    pub targets: [DividerTarget; 2],
    pub max_error: f64,
    pub series: Series,
}

impl TapRequest {
    pub fn new(
        vin: [f64; 2],
        vout: [f64; 2],
        max_error: f64,
        series: Series,
    ) -> Result<Self, ResDivError> {
        let targets = [
            DividerTarget::new(vin[0], vout[0]),
            DividerTarget::new(vin[1], vout[1]),
        ];
        for (idx, target) in targets.iter().enumerate() {
            if target.exceeds_input() {
                return Err(ResDivError::TapOutputExceedsInput {
                    tap: idx + 1,
                    vin: target.vin,
                    vout: target.vout,
                });
            }
        }
        Ok(Self {
            targets,
            max_error,
            series,
        })
    }

    pub fn multiplier(&self) -> Multiplier {
        Multiplier::for_taps(&self.targets)
    }

    pub fn evaluated(&self) -> usize {
        self.series.count().pow(3)
    }

    pub fn candidates(&self) -> impl Iterator<Item = TapCandidate> {
        search_taps(*self, self.multiplier())
    }
}

/// A matching resistor pair. `r1` already includes the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Candidate {
    pub r1: f64,
    pub r2: f64,
    pub vout: f64,
}

/// A matching resistor triple and both tap voltages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TapCandidate {
    pub r1: f64,
    pub r2: f64,
    pub r3: f64,
    pub vout1: f64,
    pub vout2: f64,
}

fn within(calculated: f64, wanted: f64, max_error: f64) -> bool {
    (calculated - wanted).abs() < max_error
}

/// Every (R1, R2) pair whose output lies strictly within `max_error` of the target.
pub fn search_pairs(request: PairRequest, multiplier: Multiplier) -> impl Iterator<Item = Candidate> {
    let PairRequest {
        target,
        max_error,
        series,
    } = request;
    let scale = multiplier.factor();

    series
        .values()
        .flat_map(move |r1| {
            let r1 = r1 * scale;
            series.values().map(move |r2| Candidate {
                r1,
                r2,
                vout: divider_output(target.vin, r1, r2),
            })
        })
        .filter(move |c| within(c.vout, target.vout, max_error))
}

/// Every (R1, R2, R3) triple where both taps lie within `max_error`.
///
/// Tap 1 sees R1 + R2 on top and R3 below; tap 2 sees R1 on top and R2 + R3
/// below. Each tap is driven by its own input voltage.
pub fn search_taps(
    request: TapRequest,
    multiplier: Multiplier,
) -> impl Iterator<Item = TapCandidate> {
    let TapRequest {
        targets: [tap1, tap2],
        max_error,
        series,
    } = request;
    let scale = multiplier.factor();

    series
        .values()
        .flat_map(move |r1| {
            let r1 = r1 * scale;
            series.values().flat_map(move |r2| {
                series.values().map(move |r3| TapCandidate {
                    r1,
                    r2,
                    r3,
                    vout1: divider_output(tap1.vin, r1 + r2, r3),
                    vout2: divider_output(tap2.vin, r1, r2 + r3),
                })
            })
        })
        .filter(move |c| {
            within(c.vout1, tap1.vout, max_error) && within(c.vout2, tap2.vout, max_error)
        })
}
