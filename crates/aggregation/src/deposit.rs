//! Where a listing's deposit sits relative to the cheapest and the most
//! expensive comparable listing.

use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepositError {
    /// `min == max`; the position within the range is undefined.
    EqualBounds(f64),
    /// `min == 0`; the difference to the minimum has no percentage.
    ZeroMinimum,
}

impl fmt::Display for DepositError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EqualBounds(bound) => {
                write!(f, "deposit range is empty: min and max are both {}", bound)
            }
            Self::ZeroMinimum => write!(f, "minimum deposit must not be zero"),
        }
    }
}

impl std::error::Error for DepositError {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepositAnalysis {
    /// Distance from the minimum as a percentage of the minimum, two decimals.
    pub percent_text: String,
    /// Whether the deposit is above the minimum.
    pub is_expensive: bool,
    /// Position within `[min, max]` as a percentage clamped to 0..=100, two
    /// decimals.
    pub clamped_in_range: String,
}

pub fn analyze_deposit(amount: f64, min: f64, max: f64) -> Result<DepositAnalysis, DepositError> {
    if min == max {
        return Err(DepositError::EqualBounds(min));
    }
    if min == 0.0 {
        return Err(DepositError::ZeroMinimum);
    }
    let percent = ((amount - min) / min * 100.0).abs();
    let in_range = ((amount - min) / (max - min) * 100.0).clamp(0.0, 100.0);
    Ok(DepositAnalysis {
        percent_text: format!("{:.2}", percent),
        is_expensive: amount > min,
        clamped_in_range: format!("{:.2}", in_range),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expensive_deposit() {
        let analysis = analyze_deposit(30000.0, 20000.0, 50000.0).unwrap();
        assert_eq!(analysis.percent_text, "50.00");
        assert!(analysis.is_expensive);
        assert_eq!(analysis.clamped_in_range, "33.33");
    }

    #[test]
    fn cheap_deposit_is_clamped() {
        let analysis = analyze_deposit(15000.0, 20000.0, 50000.0).unwrap();
        assert_eq!(analysis.percent_text, "25.00");
        assert!(!analysis.is_expensive);
        assert_eq!(analysis.clamped_in_range, "0.00");
    }

    #[test]
    fn above_max_is_clamped() {
        let analysis = analyze_deposit(80000.0, 20000.0, 50000.0).unwrap();
        assert_eq!(analysis.clamped_in_range, "100.00");
    }

    #[test]
    fn rejects_degenerate_ranges() {
        assert_eq!(
            analyze_deposit(30000.0, 20000.0, 20000.0),
            Err(DepositError::EqualBounds(20000.0))
        );
        assert_eq!(analyze_deposit(30000.0, 0.0, 0.0), Err(DepositError::EqualBounds(0.0)));
        assert_eq!(analyze_deposit(30000.0, 0.0, 50000.0), Err(DepositError::ZeroMinimum));
    }
}
