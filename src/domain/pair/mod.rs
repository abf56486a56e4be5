//! Pair domain - stablecoin pair classification

use std::collections::HashSet;

use crate::shared::types::Token;

/// Symbols treated as stablecoins when no configuration overrides them.
pub const DEFAULT_STABLECOINS: [&str; 6] = ["USDC", "USDT", "DAI", "BUSD", "FRAX", "LUSD"];

/// Decides whether a pair trades around a fixed peg.
pub trait PairClassifier {
    fn is_stablecoin_pair(&self, a: &Token, b: &Token) -> bool;
}

/// A pair is a stablecoin pair when both of its symbols are listed.
#[derive(Debug, Clone)]
pub struct StablecoinClassifier {
    symbols: HashSet<String>,
}

impl StablecoinClassifier {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            symbols: symbols
                .into_iter()
                .map(|s| s.as_ref().trim().to_uppercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn is_stablecoin(&self, token: &Token) -> bool {
        self.symbols.contains(&token.symbol.to_uppercase())
    }
}

impl Default for StablecoinClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_STABLECOINS)
    }
}

impl PairClassifier for StablecoinClassifier {
    fn is_stablecoin_pair(&self, a: &Token, b: &Token) -> bool {
        self.is_stablecoin(a) && self.is_stablecoin(b)
    }
}
