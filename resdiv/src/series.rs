//! Standard resistor value series.
//!
//! All four series are subsets of the E24 decade table: E12 takes every second
//! value, E6 every fourth and E3 every eighth, always starting at 10.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::ResDivError;

/// The E24 decade values, normalized to the 10..99 span.
pub static E24_VALUES: [f64; 24] = [
    10.0, 11.0, 12.0, 13.0, 15.0, 16.0, 18.0, 20.0, 22.0, 24.0, 27.0, 30.0, 33.0, 36.0, 39.0,
    43.0, 47.0, 51.0, 56.0, 62.0, 68.0, 75.0, 82.0, 91.0,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Series {
    #[default]
    E24,
    E12,
    E6,
    E3,
}

impl Series {
    pub const ALL: [Series; 4] = [Series::E24, Series::E12, Series::E6, Series::E3];

    /// Map a series number (24, 12, 6 or 3) to its series.
    pub fn from_code(code: u32) -> Result<Self, ResDivError> {
        match code {
            24 => Ok(Series::E24),
            12 => Ok(Series::E12),
            6 => Ok(Series::E6),
            3 => Ok(Series::E3),
            other => Err(ResDivError::InvalidSeries(other.to_string())),
        }
    }

    /// Number of values per decade.
    pub fn code(self) -> u32 {
        match self {
            Series::E24 => 24,
            Series::E12 => 12,
            Series::E6 => 6,
            Series::E3 => 3,
        }
    }

    /// Step through [`E24_VALUES`] selecting this series.
    pub fn stride(self) -> usize {
        match self {
            Series::E24 => 1,
            Series::E12 => 2,
            Series::E6 => 4,
            Series::E3 => 8,
        }
    }

    /// Number of values this series takes from the table.
    pub fn count(self) -> usize {
        E24_VALUES.len() / self.stride()
    }

    /// The values of this series in ascending order.
    pub fn values(self) -> impl Iterator<Item = f64> + Clone {
        E24_VALUES.iter().copied().step_by(self.stride())
    }
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.code())
    }
}

impl FromStr for Series {
    type Err = ResDivError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix('E')
            .or_else(|| s.strip_prefix('e'))
            .unwrap_or(s);
        match digits.parse::<u32>() {
            Ok(code) => Series::from_code(code),
            Err(_) => Err(ResDivError::InvalidSeries(digits.to_string())),
        }
    }
}
