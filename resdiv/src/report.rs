//! Report lines for matching dividers.
//!
//! The line layout is kept stable so existing scripts parsing the output keep
//! working, including the legacy percent figure (see [`Deviation`]).

use serde::Serialize;

use crate::search::{Candidate, DividerTarget, TapCandidate};

/// Deviation of a computed output from its target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deviation {
    /// `calculated - target`, in volts.
    pub diff: f64,
    /// `(calculated / target - 1) / 100`.
    ///
    /// Printed with a `%` sign but two orders of magnitude below a true
    /// percentage. Kept for output compatibility.
    pub percent: f64,
}

impl Deviation {
    pub fn between(calculated: f64, target: f64) -> Self {
        Self {
            diff: calculated - target,
            percent: (calculated / target - 1.0) / 100.0,
        }
    }
}

impl Candidate {
    pub fn deviation(&self, target: &DividerTarget) -> Deviation {
        Deviation::between(self.vout, target.vout)
    }
}

impl TapCandidate {
    pub fn deviations(&self, targets: &[DividerTarget; 2]) -> [Deviation; 2] {
        [
            Deviation::between(self.vout1, targets[0].vout),
            Deviation::between(self.vout2, targets[1].vout),
        ]
    }
}

pub fn pair_line(candidate: &Candidate, target: &DividerTarget) -> String {
    let dev = candidate.deviation(target);
    format!(
        "r1: {:.2}  r2: {:.2} Vout(diff): {:.6}({:.6}%)",
        candidate.r1, candidate.r2, dev.diff, dev.percent
    )
}

/// Two lines: the resistor triple, then both tap deviations.
pub fn tap_lines(candidate: &TapCandidate, targets: &[DividerTarget; 2]) -> String {
    let [dev1, dev2] = candidate.deviations(targets);
    format!(
        "r1: {:.2}  r2: {:.2}  r3: {:.2}\n  Vout1(diff): {:.6}({:.6}%) Vout2(diff): {:.6}({:.6}%)",
        candidate.r1,
        candidate.r2,
        candidate.r3,
        dev1.diff,
        dev1.percent,
        dev2.diff,
        dev2.percent
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::divider_output;

    #[test]
    fn test_deviation_legacy_percent() {
        let dev = Deviation::between(3.3, 3.0);
        assert!((dev.diff - 0.3).abs() < 1e-12);
        // 10% off is reported as 0.001
        assert!((dev.percent - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_pair_line() {
        let target = DividerTarget::new(5.0, 3.3);
        let candidate = Candidate {
            r1: 10.0,
            r2: 20.0,
            vout: divider_output(5.0, 10.0, 20.0),
        };
        assert_eq!(
            pair_line(&candidate, &target),
            "r1: 10.00  r2: 20.00 Vout(diff): 0.033333(0.000101%)"
        );
    }

    #[test]
    fn test_pair_line_negative_diff() {
        let target = DividerTarget::new(10.0, 5.0);
        let candidate = Candidate {
            r1: 11.0,
            r2: 10.0,
            vout: divider_output(10.0, 11.0, 10.0),
        };
        let line = pair_line(&candidate, &target);
        assert!(line.starts_with("r1: 11.00  r2: 10.00 Vout(diff): -0.238095("));
    }

    #[test]
    fn test_tap_lines() {
        let targets = [DividerTarget::new(10.0, 3.33), DividerTarget::new(10.0, 6.67)];
        let candidate = TapCandidate {
            r1: 10.0,
            r2: 10.0,
            r3: 10.0,
            vout1: divider_output(10.0, 20.0, 10.0),
            vout2: divider_output(10.0, 10.0, 20.0),
        };
        let text = tap_lines(&candidate, &targets);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "r1: 10.00  r2: 10.00  r3: 10.00");
        assert!(lines[1].starts_with("  Vout1(diff): 0.003333("));
        assert!(lines[1].contains(" Vout2(diff): -0.003333("));
    }
}
