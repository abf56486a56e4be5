//! Canonical token ordering

use crate::shared::types::Token;

/// Total order over tokens used to pick the canonical price direction.
pub trait TokenOrdering {
    fn sorts_before(&self, a: &Token, b: &Token) -> bool;
}

/// Orders tokens by their lower-cased address, the way pools sort
/// token0/token1.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressOrdering;

impl TokenOrdering for AddressOrdering {
    fn sorts_before(&self, a: &Token, b: &Token) -> bool {
        a.address.to_lowercase() < b.address.to_lowercase()
    }
}
