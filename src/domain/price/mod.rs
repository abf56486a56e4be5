//! Price domain - direction normalization and token ordering

mod inversion;
mod ordering;

pub use inversion::{invert_bounds, invert_price, DisplayRange};
pub use ordering::{AddressOrdering, TokenOrdering};
