//! Core search API shared by the library examples and the CLI tools.

use serde::Serialize;

use crate::model::Multiplier;
use crate::search::{Candidate, DividerTarget, PairRequest, TapCandidate, TapRequest};
use crate::series::Series;

#[derive(Debug, thiserror::Error)]
pub enum ResDivError {
    #[error("Unknown series E{0}; known series are E24, E12, E6 and E3 (use just the number of the series)")]
    InvalidSeries(String),
    #[error("Vout ({vout}) must not be bigger than Vin ({vin})")]
    OutputExceedsInput { vin: f64, vout: f64 },
    #[error("Vout{tap} ({vout}) must not be bigger than Vin{tap} ({vin})")]
    TapOutputExceedsInput { tap: usize, vin: f64, vout: f64 },
}

/// How a search was run and what it found.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSummary {
    pub series: Series,
    pub multiplier: Multiplier,
    pub evaluated: usize,
    pub matches: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PairSearchResult {
    pub target: DividerTarget,
    pub max_error: f64,
    pub summary: SearchSummary,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TapSearchResult {
    pub targets: [DividerTarget; 2],
    pub max_error: f64,
    pub summary: SearchSummary,
    pub candidates: Vec<TapCandidate>,
}

impl PairSearchResult {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl TapSearchResult {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Core search API used by the CLI tools.
pub struct DividerCore;

impl DividerCore {
    /// Find every resistor pair dividing `vin` down to `vout` within `max_error`.
    pub fn find_pairs(
        vin: f64,
        vout: f64,
        max_error: f64,
        series: Series,
    ) -> Result<PairSearchResult, ResDivError> {
        let request = PairRequest::new(vin, vout, max_error, series)?;
        let multiplier = request.multiplier();
        tracing::debug!(
            "Pair search: Vin={} Vout={} error<{} series={} multiplier={:?}",
            vin,
            vout,
            max_error,
            series,
            multiplier
        );

        let candidates: Vec<Candidate> = crate::search::search_pairs(request, multiplier).collect();
        let summary = SearchSummary {
            series,
            multiplier,
            evaluated: request.evaluated(),
            matches: candidates.len(),
        };
        tracing::info!(
            "Found {} of {} combinations within {}",
            summary.matches,
            summary.evaluated,
            max_error
        );

        Ok(PairSearchResult {
            target: request.target,
            max_error,
            summary,
            candidates,
        })
    }

    /// Find every resistor triple hitting both tap voltages within `max_error`.
    pub fn find_taps(
        vin: [f64; 2],
        vout: [f64; 2],
        max_error: f64,
        series: Series,
    ) -> Result<TapSearchResult, ResDivError> {
        let request = TapRequest::new(vin, vout, max_error, series)?;
        let multiplier = request.multiplier();
        tracing::debug!(
            "Two-tap search: Vin={:?} Vout={:?} error<{} series={} multiplier={:?}",
            vin,
            vout,
            max_error,
            series,
            multiplier
        );

        let candidates: Vec<TapCandidate> = crate::search::search_taps(request, multiplier).collect();
        let summary = SearchSummary {
            series,
            multiplier,
            evaluated: request.evaluated(),
            matches: candidates.len(),
        };
        tracing::info!(
            "Found {} of {} combinations within {}",
            summary.matches,
            summary.evaluated,
            max_error
        );

        Ok(TapSearchResult {
            targets: request.targets,
            max_error,
            summary,
            candidates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_pairs_summary() {
        let result = DividerCore::find_pairs(5.0, 3.3, 0.05, Series::E24).unwrap();
        assert_eq!(result.summary.series, Series::E24);
        assert_eq!(result.summary.multiplier, Multiplier::X1);
        assert_eq!(result.summary.evaluated, 576);
        assert_eq!(result.summary.matches, result.candidates.len());
        assert!(!result.is_empty());
    }

    #[test]
    fn test_find_pairs_rejects_inverted_target() {
        let err = DividerCore::find_pairs(3.3, 5.0, 0.05, Series::E24).unwrap_err();
        assert_eq!(err.to_string(), "Vout (5) must not be bigger than Vin (3.3)");
    }

    #[test]
    fn test_find_taps_rejects_inverted_tap() {
        let err = DividerCore::find_taps([10.0, 3.0], [2.0, 4.0], 0.1, Series::E12).unwrap_err();
        assert_eq!(err.to_string(), "Vout2 (4) must not be bigger than Vin2 (3)");
    }

    #[test]
    fn test_find_taps_summary() {
        let result = DividerCore::find_taps([10.0, 10.0], [3.33, 6.67], 0.01, Series::E6).unwrap();
        assert_eq!(result.summary.evaluated, 216);
        assert_eq!(result.summary.matches, result.candidates.len());
        assert_eq!(result.targets[1].vout, 6.67);
    }

    #[test]
    fn test_result_serializes() {
        let result = DividerCore::find_pairs(5.0, 2.5, 0.01, Series::E3).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["summary"]["series"], "E3");
        assert_eq!(json["summary"]["multiplier"], "X1");
        assert_eq!(json["candidates"].as_array().unwrap().len(), 3);
        assert_eq!(json["candidates"][0]["r1"], 10.0);
    }
}
