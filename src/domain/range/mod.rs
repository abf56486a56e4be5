//! Range domain - liquidity range presets, risk scoring and form state

mod form;
mod presets;
mod risk;

pub use form::{RangeFormState, RangeSelection};
pub use presets::{derive_presets, match_preset};
pub use risk::{
    compute_risk_score, range_percent, risk_display, score_to_five_segment_fill, RiskScore,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::RangeError;

/// Named range presets offered by the supply flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PresetKind {
    Full,
    Safe,
    Normal,
    Risk,
    Stable,
}

impl PresetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetKind::Full => "Full Range",
            PresetKind::Safe => "Safe",
            PresetKind::Normal => "Normal",
            PresetKind::Risk => "Risk",
            PresetKind::Stable => "Stable",
        }
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PresetKind {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" | "full_range" | "full-range" => Ok(PresetKind::Full),
            "safe" => Ok(PresetKind::Safe),
            "normal" => Ok(PresetKind::Normal),
            "risk" | "risky" => Ok(PresetKind::Risk),
            "stable" => Ok(PresetKind::Stable),
            _ => Err(RangeError::UnknownPreset(s.to_string())),
        }
    }
}

/// Qualitative risk or profit tier, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    VeryLow,
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::VeryLow => "Very Low",
            Tier::Low => "Low",
            Tier::Medium => "Medium",
            Tier::High => "High",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A preset expressed as multipliers of the current price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangePreset {
    pub kind: PresetKind,
    pub min: f64,
    pub max: f64,
    pub risk: Tier,
    pub profit: Tier,
}

impl RangePreset {
    pub const fn new(kind: PresetKind, min: f64, max: f64, risk: Tier, profit: Tier) -> Self {
        Self {
            kind,
            min,
            max,
            risk,
            profit,
        }
    }

    /// Concrete bounds around `current_price`.
    ///
    /// Infinite multipliers stay infinite even for a zero price, so the full
    /// range never degenerates into `0 * inf = NaN`.
    pub fn bounds(&self, current_price: f64) -> PriceBounds {
        PriceBounds {
            lower: scale_price(current_price, self.min),
            upper: scale_price(current_price, self.max),
        }
    }

    pub fn is_full_range(&self) -> bool {
        self.min == 0.0 && self.max.is_infinite()
    }
}

fn scale_price(price: f64, multiplier: f64) -> f64 {
    if multiplier.is_infinite() {
        multiplier
    } else {
        price * multiplier
    }
}

/// Concrete lower/upper price bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub lower: f64,
    pub upper: f64,
}

impl PriceBounds {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// The range currently chosen in the supply form. Every field is absent
/// while its input is incomplete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedRange {
    pub price_lower: Option<f64>,
    pub price_upper: Option<f64>,
    pub current_price: Option<f64>,
}

impl SelectedRange {
    pub fn new(price_lower: Option<f64>, price_upper: Option<f64>, current_price: Option<f64>) -> Self {
        Self {
            price_lower,
            price_upper,
            current_price,
        }
    }

    /// `Some(true)` when the current price lies strictly inside the bounds.
    pub fn is_in_range(&self) -> Option<bool> {
        match (self.price_lower, self.price_upper, self.current_price) {
            (Some(lower), Some(upper), Some(current)) => Some(lower < current && current < upper),
            _ => None,
        }
    }

    pub fn is_full_range(&self) -> bool {
        matches!(
            (self.price_lower, self.price_upper),
            (Some(lower), Some(upper)) if lower == 0.0 && upper.is_infinite()
        )
    }

    pub fn risk_score(&self) -> Option<RiskScore> {
        compute_risk_score(self.price_lower, self.price_upper, self.current_price)
    }
}
