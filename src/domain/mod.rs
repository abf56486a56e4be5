//! Domain layer - pure range computations

pub mod pair;
pub mod price;
pub mod range;

pub use pair::{PairClassifier, StablecoinClassifier};
pub use price::{AddressOrdering, DisplayRange, TokenOrdering};
pub use range::{PresetKind, RangeFormState, RangePreset, RiskScore, SelectedRange, Tier};
