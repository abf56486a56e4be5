// src/report.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::range::{PresetKind, RangePreset, RangeSelection, RiskScore, SelectedRange, Tier};
use crate::shared::types::TokenPair;
use crate::shared::utils::{format_significant, generate_id};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeReport {
    pub id: String,
    pub pair: TokenPair,
    pub is_stablecoin_pair: bool,
    pub current_price: f64,

    pub presets: Vec<PresetLine>,

    // Selection
    pub selection: Option<RangeSelection>,
    pub active_preset: Option<PresetKind>,
    pub selected_range: SelectedRange,
    pub in_range: Option<bool>,
    /// Selection spans (0, ∞), so it can never go out of range
    pub full_range: bool,
    pub range_percent: Option<f64>,
    pub risk: Option<RiskSummary>,

    pub display: DisplayLine,

    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetLine {
    pub kind: PresetKind,
    pub risk: Tier,
    pub profit: Tier,
    pub full_range: bool,
    pub lower: String,
    pub upper: String,
}

impl PresetLine {
    pub fn new(preset: &RangePreset, current_price: f64, digits: usize) -> Self {
        let bounds = preset.bounds(current_price);
        Self {
            kind: preset.kind,
            risk: preset.risk,
            profit: preset.profit,
            full_range: preset.is_full_range(),
            lower: format_significant(Some(bounds.lower), digits),
            upper: format_significant(Some(bounds.upper), digits),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSummary {
    pub score: RiskScore,
    pub tier: Tier,
    pub segments: [f64; 5],
}

/// Range as rendered, already flipped into the display direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayLine {
    pub base: String,
    pub quote: String,
    pub inverted: bool,
    pub current: String,
    pub lower: String,
    pub upper: String,
    /// Distance of each bound from the current price, in percent
    pub lower_change_pct: Option<f64>,
    pub upper_change_pct: Option<f64>,
}

impl RangeReport {
    pub fn new(
        pair: TokenPair,
        is_stablecoin_pair: bool,
        current_price: f64,
        presets: Vec<PresetLine>,
        selected_range: SelectedRange,
        display: DisplayLine,
    ) -> Self {
        Self {
            id: generate_id(),
            pair,
            is_stablecoin_pair,
            current_price,
            presets,
            selection: None,
            active_preset: None,
            in_range: selected_range.is_in_range(),
            full_range: selected_range.is_full_range(),
            selected_range,
            range_percent: None,
            risk: None,
            display,
            timestamp: Utc::now(),
        }
    }

    pub fn with_selection(mut self, selection: Option<RangeSelection>, active_preset: Option<PresetKind>) -> Self {
        self.selection = selection;
        self.active_preset = active_preset;
        self
    }

    pub fn with_risk(mut self, range_percent: Option<f64>, risk: Option<RiskSummary>) -> Self {
        self.range_percent = range_percent;
        self.risk = risk;
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
