//! Owned state of the range selection form

use serde::{Deserialize, Serialize};

use super::{match_preset, PresetKind, PriceBounds, RangePreset, SelectedRange};

/// How the user picked the range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RangeSelection {
    Preset(PresetKind),
    Custom {
        lower: Option<f64>,
        upper: Option<f64>,
    },
}

/// Form state for one supply flow. The caller owns it and drops it on
/// navigation or reset; engine functions only ever borrow it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeFormState {
    selection: Option<RangeSelection>,
    manual_invert: bool,
}

impl RangeFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_preset(&mut self, kind: PresetKind) {
        self.selection = Some(RangeSelection::Preset(kind));
    }

    /// Typing a bound switches the form to a custom range.
    pub fn set_custom_bounds(&mut self, lower: Option<f64>, upper: Option<f64>) {
        self.selection = Some(RangeSelection::Custom { lower, upper });
    }

    pub fn toggle_invert(&mut self) {
        self.manual_invert = !self.manual_invert;
    }

    pub fn set_manual_invert(&mut self, manual_invert: bool) {
        self.manual_invert = manual_invert;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn selection(&self) -> Option<&RangeSelection> {
        self.selection.as_ref()
    }

    pub fn manual_invert(&self) -> bool {
        self.manual_invert
    }

    /// Resolve the selection against the current price.
    ///
    /// A preset that is not among `presets` resolves to absent bounds, as
    /// does any selection while the current price is unknown.
    pub fn selected_range(&self, current_price: Option<f64>, presets: &[RangePreset]) -> SelectedRange {
        let (price_lower, price_upper) = match self.selection {
            Some(RangeSelection::Preset(kind)) => {
                match (presets.iter().find(|p| p.kind == kind), current_price) {
                    (Some(preset), Some(price)) => {
                        let bounds = preset.bounds(price);
                        (Some(bounds.lower), Some(bounds.upper))
                    }
                    _ => (None, None),
                }
            }
            Some(RangeSelection::Custom { lower, upper }) => (lower, upper),
            None => (None, None),
        };
        SelectedRange::new(price_lower, price_upper, current_price)
    }

    /// The preset highlighted in the form. Custom bounds that happen to equal
    /// a preset's bounds highlight that preset.
    pub fn active_preset(&self, current_price: Option<f64>, presets: &[RangePreset]) -> Option<PresetKind> {
        match self.selection? {
            RangeSelection::Preset(kind) => presets.iter().any(|p| p.kind == kind).then_some(kind),
            RangeSelection::Custom { lower, upper } => {
                let bounds = PriceBounds::new(lower?, upper?);
                match_preset(presets, &bounds, current_price?)
            }
        }
    }
}
