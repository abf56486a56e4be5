//! Risk scoring for a selected price range

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Tier;
use crate::shared::errors::RangeError;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;
pub const SEGMENTS: usize = 5;

/// Risk of a range on a `[1, 5]` scale. Narrow ranges score high.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RiskScore(f64);

impl RiskScore {
    /// Map a range width (in percent of the current price) onto the score
    /// bands. Bands are closed-open and meet at their boundaries.
    /// Returns `None` for `NaN`.
    pub fn from_range_percent(range_percent: f64) -> Option<Self> {
        if range_percent.is_nan() {
            return None;
        }
        let r = range_percent;
        let score = if r < 7.5 {
            5.0
        } else if r < 15.0 {
            (15.0 - r) / 7.5 + 4.0
        } else if r < 30.0 {
            (30.0 - r) / 15.0 + 3.0
        } else if r < 60.0 {
            (60.0 - r) / 30.0 + 2.0
        } else if r < 120.0 {
            (120.0 - r) / 60.0 + 1.0
        } else {
            1.0
        };
        Some(Self(score.clamp(MIN_SCORE, MAX_SCORE)))
    }

    /// A score taken as-is, rejected outside `[1, 5]`.
    pub fn new(value: f64) -> Option<Self> {
        (MIN_SCORE..=MAX_SCORE).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Tier of the score. Each volatile preset's own bounds land in the
    /// tier the preset table advertises.
    pub fn tier(&self) -> Tier {
        match self.0 {
            s if s >= 4.0 => Tier::High,
            s if s >= 3.0 => Tier::Medium,
            s if s >= 2.0 => Tier::Low,
            _ => Tier::VeryLow,
        }
    }
}

impl TryFrom<f64> for RiskScore {
    type Error = RangeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(RangeError::ScoreOutOfRange(value))
    }
}

impl From<RiskScore> for f64 {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}

impl fmt::Display for RiskScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Width of a range in percent of the current price.
///
/// `upper% = 100 - current/upper * 100`, `lower% = |100 - current/lower * 100|`.
/// When the lower bound sits above the current price the two distances
/// overlap and are subtracted instead of added.
pub fn range_percent(price_lower: f64, price_upper: f64, current_price: f64) -> f64 {
    let upper_percent = 100.0 - (current_price / price_upper) * 100.0;
    let lower_percent = (100.0 - (current_price / price_lower) * 100.0).abs();

    if price_lower > current_price {
        upper_percent - lower_percent
    } else {
        upper_percent + lower_percent
    }
}

/// Risk score of a range, absent until all three prices are known.
pub fn compute_risk_score(
    price_lower: Option<f64>,
    price_upper: Option<f64>,
    current_price: Option<f64>,
) -> Option<RiskScore> {
    let (lower, upper, current) = (price_lower?, price_upper?, current_price?);
    RiskScore::from_range_percent(range_percent(lower, upper, current))
}

/// Fill percentage of each segment of the five-segment risk meter.
pub fn score_to_five_segment_fill(score: RiskScore) -> [f64; SEGMENTS] {
    let whole = score.value().floor();
    let fraction = score.value() - whole;
    let whole = whole as usize;

    let mut fill = [0.0; SEGMENTS];
    for (i, segment) in fill.iter_mut().enumerate() {
        *segment = if i < whole {
            100.0
        } else if i == whole {
            fraction * 100.0
        } else {
            0.0
        };
    }
    fill
}

/// Stablecoin pairs never show a risk meter.
pub fn risk_display(is_stablecoin_pair: bool, score: Option<RiskScore>) -> Option<RiskScore> {
    if is_stablecoin_pair {
        None
    } else {
        score
    }
}
