//! Common types used across the application

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::RangeError;

/// Token representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Token {
    pub fn new(address: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Token known only by its symbol. The symbol doubles as ordering key.
    pub fn from_symbol(symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        Self {
            address: symbol.clone(),
            symbol,
            decimals: 18,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Parses `ADDRESS:SYMBOL`, `ADDRESS:SYMBOL:DECIMALS` or a bare symbol.
impl FromStr for Token {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        match parts.as_slice() {
            [symbol] if !symbol.is_empty() => Ok(Token::from_symbol(*symbol)),
            [address, symbol] if !address.is_empty() && !symbol.is_empty() => {
                Ok(Token::new(*address, *symbol, 18))
            }
            [address, symbol, decimals] if !address.is_empty() && !symbol.is_empty() => {
                let decimals = decimals
                    .parse::<u8>()
                    .map_err(|_| RangeError::InvalidToken(s.to_string()))?;
                Ok(Token::new(*address, *symbol, decimals))
            }
            _ => Err(RangeError::InvalidToken(s.to_string())),
        }
    }
}

/// Two tokens of a pool, in the order the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub base: Token,
    pub quote: Token,
}

impl TokenPair {
    pub fn new(base: Token, quote: Token) -> Self {
        Self { base, quote }
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base.symbol, self.quote.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_forms() {
        let bare: Token = "USDC".parse().unwrap();
        assert_eq!(bare.symbol, "USDC");
        assert_eq!(bare.address, "USDC");

        let full: Token = "0xA0b8:USDC:6".parse().unwrap();
        assert_eq!(full.address, "0xA0b8");
        assert_eq!(full.symbol, "USDC");
        assert_eq!(full.decimals, 6);
    }

    #[test]
    fn test_parse_token_rejects_garbage() {
        assert!("".parse::<Token>().is_err());
        assert!("0xA0b8:".parse::<Token>().is_err());
        assert!("0xA0b8:USDC:lots".parse::<Token>().is_err());
        assert!("a:b:6:x".parse::<Token>().is_err());
    }

    #[test]
    fn test_pair_display() {
        let pair = TokenPair::new(Token::from_symbol("WETH"), Token::from_symbol("USDC"));
        assert_eq!(pair.to_string(), "WETH/USDC");
    }
}
