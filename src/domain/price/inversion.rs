//! Price direction normalization for display

use serde::{Deserialize, Serialize};

use super::TokenOrdering;
use crate::shared::types::Token;

/// Bounds as they should be shown, quoted in `quote` per `base`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRange {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub base: Token,
    pub quote: Token,
    pub inverted: bool,
}

/// Reciprocate a pair of bounds. Inversion reverses order over positive
/// prices, so the new lower comes from the old upper.
pub fn invert_bounds(lower: Option<f64>, upper: Option<f64>) -> (Option<f64>, Option<f64>) {
    (upper.map(|u| 1.0 / u), lower.map(|l| 1.0 / l))
}

/// Normalize a range for display.
///
/// The range is flipped when the quote token sorts before the base token,
/// unless the user has manually flipped it back, and vice versa.
pub fn invert_price<O: TokenOrdering + ?Sized>(
    ordering: &O,
    price_lower: Option<f64>,
    price_upper: Option<f64>,
    quote: &Token,
    base: &Token,
    manual_invert: bool,
) -> DisplayRange {
    let inverted = ordering.sorts_before(quote, base) != manual_invert;

    if inverted {
        let (lower, upper) = invert_bounds(price_lower, price_upper);
        DisplayRange {
            lower,
            upper,
            base: quote.clone(),
            quote: base.clone(),
            inverted,
        }
    } else {
        DisplayRange {
            lower: price_lower,
            upper: price_upper,
            base: base.clone(),
            quote: quote.clone(),
            inverted,
        }
    }
}
