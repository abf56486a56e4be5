//! liqrange - concentrated liquidity range presets
//! Built with Domain-Driven Design principles

pub mod application;
pub mod domain;
pub mod report;
pub mod shared;

// Re-export main types for convenience
pub use application::{RangeRequest, RangeService};
pub use domain::range::{
    compute_risk_score, derive_presets, score_to_five_segment_fill, PresetKind, RangeFormState,
    RangePreset, RiskScore, SelectedRange, Tier,
};
pub use domain::price::{invert_bounds, invert_price, AddressOrdering, DisplayRange, TokenOrdering};
pub use domain::pair::{PairClassifier, StablecoinClassifier};
pub use report::RangeReport;
pub use shared::types::{Token, TokenPair};
