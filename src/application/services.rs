//! Application services and use cases

use tracing::{debug, info, warn};

use crate::domain::pair::{PairClassifier, StablecoinClassifier};
use crate::domain::price::{invert_price, AddressOrdering, DisplayRange, TokenOrdering};
use crate::domain::range::{
    derive_presets, range_percent, risk_display, score_to_five_segment_fill, RangeFormState,
    RangePreset, RangeSelection,
};
use crate::report::{DisplayLine, PresetLine, RangeReport, RiskSummary};
use crate::shared::config::RangeConfig;
use crate::shared::errors::{AppError, RangeError};
use crate::shared::types::TokenPair;
use crate::shared::utils::{calculate_percentage_change, format_significant};

/// Everything the view layer knows about one supply form
#[derive(Debug, Clone)]
pub struct RangeRequest {
    pub pair: TokenPair,
    pub current_price: f64,
    pub form: RangeFormState,
}

impl RangeRequest {
    pub fn new(pair: TokenPair, current_price: f64, form: RangeFormState) -> Self {
        Self {
            pair,
            current_price,
            form,
        }
    }

    fn validate(&self, presets: &[RangePreset]) -> Result<(), RangeError> {
        validate_price(self.current_price)?;

        match self.form.selection() {
            Some(RangeSelection::Preset(kind)) => {
                if !presets.iter().any(|p| p.kind == *kind) {
                    return Err(RangeError::PresetUnavailable(kind.to_string()));
                }
            }
            Some(RangeSelection::Custom { lower, upper }) => validate_bounds(*lower, *upper)?,
            None => {}
        }
        Ok(())
    }
}

/// Current prices must be positive and finite.
pub fn validate_price(price: f64) -> Result<(), RangeError> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(RangeError::InvalidPrice(price))
    }
}

/// Bounds must be non-negative numbers with the lower strictly below the upper.
/// A missing side is allowed.
pub fn validate_bounds(lower: Option<f64>, upper: Option<f64>) -> Result<(), RangeError> {
    for bound in [lower, upper].into_iter().flatten() {
        if bound.is_nan() || bound < 0.0 {
            return Err(RangeError::InvalidPrice(bound));
        }
    }
    match (lower, upper) {
        (Some(lower), Some(upper)) if lower >= upper => Err(RangeError::InvertedBounds { lower, upper }),
        _ => Ok(()),
    }
}

/// Application service composing the range engine for one configuration
pub struct RangeService {
    config: RangeConfig,
    classifier: Box<dyn PairClassifier>,
    ordering: Box<dyn TokenOrdering>,
}

impl RangeService {
    /// Create a service with the config-driven classifier and address ordering
    pub fn new(config: &RangeConfig) -> Self {
        Self::with_oracles(
            config,
            Box::new(StablecoinClassifier::new(&config.pairs.stablecoins)),
            Box::new(AddressOrdering),
        )
    }

    pub fn with_oracles(
        config: &RangeConfig,
        classifier: Box<dyn PairClassifier>,
        ordering: Box<dyn TokenOrdering>,
    ) -> Self {
        Self {
            config: config.clone(),
            classifier,
            ordering,
        }
    }

    pub fn significant_digits(&self) -> usize {
        self.config.display.significant_digits
    }

    pub fn is_stablecoin_pair(&self, pair: &TokenPair) -> bool {
        self.classifier.is_stablecoin_pair(&pair.base, &pair.quote)
    }

    /// Presets with concrete bounds for a pair at a given price
    pub fn preset_lines(&self, is_stablecoin_pair: bool, current_price: f64) -> Result<Vec<PresetLine>, AppError> {
        validate_price(current_price)?;
        let digits = self.significant_digits();
        Ok(derive_presets(is_stablecoin_pair)
            .iter()
            .map(|preset| PresetLine::new(preset, current_price, digits))
            .collect())
    }

    /// Normalize bounds into the display direction for a pair
    pub fn display_range(&self, pair: &TokenPair, lower: Option<f64>, upper: Option<f64>, manual_invert: bool) -> DisplayRange {
        invert_price(self.ordering.as_ref(), lower, upper, &pair.quote, &pair.base, manual_invert)
    }

    /// Build a full report of the form's current state
    pub fn build_report(&self, request: &RangeRequest) -> Result<RangeReport, AppError> {
        let is_stable = self.is_stablecoin_pair(&request.pair);
        let presets = derive_presets(is_stable);
        info!(
            "Building range report for {} at {} (stablecoin pair: {})",
            request.pair, request.current_price, is_stable
        );

        request.validate(&presets).map_err(|e| {
            warn!("Rejected range request for {}: {}", request.pair, e);
            e
        })?;

        let digits = self.significant_digits();
        let current_price = Some(request.current_price);
        let selected = request.form.selected_range(current_price, &presets);
        let active_preset = request.form.active_preset(current_price, &presets);
        debug!("Selected range: {:?}, active preset: {:?}", selected, active_preset);

        let width = match (selected.price_lower, selected.price_upper) {
            (Some(lower), Some(upper)) => Some(range_percent(lower, upper, request.current_price)),
            _ => None,
        };
        let risk = risk_display(is_stable, selected.risk_score()).map(|score| RiskSummary {
            score,
            tier: score.tier(),
            segments: score_to_five_segment_fill(score),
        });
        if let Some(summary) = &risk {
            debug!("Risk score {} ({})", summary.score, summary.tier);
        }

        let display = self.display_range(
            &request.pair,
            selected.price_lower,
            selected.price_upper,
            request.form.manual_invert(),
        );
        let display_current = if display.inverted {
            1.0 / request.current_price
        } else {
            request.current_price
        };
        let change = |bound: Option<f64>| {
            bound
                .filter(|b| b.is_finite())
                .map(|b| calculate_percentage_change(display_current, b))
        };
        let display_line = DisplayLine {
            base: display.base.symbol.clone(),
            quote: display.quote.symbol.clone(),
            inverted: display.inverted,
            current: format_significant(Some(display_current), digits),
            lower: format_significant(display.lower, digits),
            upper: format_significant(display.upper, digits),
            lower_change_pct: change(display.lower),
            upper_change_pct: change(display.upper),
        };

        let preset_lines = presets
            .iter()
            .map(|preset| PresetLine::new(preset, request.current_price, digits))
            .collect();

        Ok(RangeReport::new(
            request.pair.clone(),
            is_stable,
            request.current_price,
            preset_lines,
            selected,
            display_line,
        )
        .with_selection(request.form.selection().copied(), active_preset)
        .with_risk(width, risk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::range::{PresetKind, Tier};
    use crate::shared::types::Token;

    fn weth_usdc() -> TokenPair {
        // USDC's address sorts before WETH's
        TokenPair::new(
            Token::new("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2", "WETH", 18),
            Token::new("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", "USDC", 6),
        )
    }

    fn usdc_usdt() -> TokenPair {
        TokenPair::new(
            Token::new("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", "USDC", 6),
            Token::new("0xdac17f958d2ee523a2206206994597c13d831ec7", "USDT", 6),
        )
    }

    #[test]
    fn test_report_for_volatile_pair() {
        let service = RangeService::new(&RangeConfig::default());
        let mut form = RangeFormState::new();
        form.select_preset(PresetKind::Normal);

        let report = service
            .build_report(&RangeRequest::new(weth_usdc(), 1.0, form))
            .unwrap();

        assert!(!report.is_stablecoin_pair);
        assert_eq!(report.presets.len(), 4);
        assert_eq!(report.active_preset, Some(PresetKind::Normal));
        assert_eq!(report.in_range, Some(true));

        let risk = report.risk.unwrap();
        assert!((risk.score.value() - 3.148).abs() < 1e-3);
        assert_eq!(risk.tier, Tier::Medium);
        assert!((report.range_percent.unwrap() - 27.78).abs() < 1e-2);
    }

    #[test]
    fn test_report_suppresses_risk_for_stable_pair() {
        let service = RangeService::new(&RangeConfig::default());
        let mut form = RangeFormState::new();
        form.select_preset(PresetKind::Stable);

        let report = service
            .build_report(&RangeRequest::new(usdc_usdt(), 1.0, form))
            .unwrap();

        assert!(report.is_stablecoin_pair);
        assert_eq!(report.presets.len(), 1);
        assert_eq!(report.presets[0].lower, "0.984");
        assert_eq!(report.presets[0].upper, "1.016");
        assert!(report.risk.is_none());
        assert_eq!(report.in_range, Some(true));
    }

    #[test]
    fn test_display_is_inverted_when_quote_sorts_first() {
        let service = RangeService::new(&RangeConfig::default());
        let mut form = RangeFormState::new();
        form.set_custom_bounds(Some(1600.0), Some(2500.0));

        let report = service
            .build_report(&RangeRequest::new(weth_usdc(), 2000.0, form.clone()))
            .unwrap();
        assert!(report.display.inverted);
        assert_eq!(report.display.base, "USDC");
        assert_eq!(report.display.quote, "WETH");
        assert_eq!(report.display.lower, "0.0004");
        assert_eq!(report.display.upper, "0.000625");

        form.toggle_invert();
        let report = service
            .build_report(&RangeRequest::new(weth_usdc(), 2000.0, form))
            .unwrap();
        assert!(!report.display.inverted);
        assert_eq!(report.display.lower, "1600");
        assert_eq!(report.display.upper, "2500");
        assert!((report.display.lower_change_pct.unwrap() + 20.0).abs() < 1e-9);
        assert!((report.display.upper_change_pct.unwrap() - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_requests_are_rejected() {
        let service = RangeService::new(&RangeConfig::default());

        let err = service
            .build_report(&RangeRequest::new(weth_usdc(), 0.0, RangeFormState::new()))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(RangeError::InvalidPrice(_))));

        let mut form = RangeFormState::new();
        form.set_custom_bounds(Some(2.0), Some(1.0));
        let err = service
            .build_report(&RangeRequest::new(weth_usdc(), 1.5, form))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(RangeError::InvertedBounds { .. })));

        let mut form = RangeFormState::new();
        form.select_preset(PresetKind::Risk);
        let err = service
            .build_report(&RangeRequest::new(usdc_usdt(), 1.0, form))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(RangeError::PresetUnavailable(_))));
    }

    #[test]
    fn test_validate_bounds() {
        assert!(validate_bounds(Some(0.9), Some(1.2)).is_ok());
        assert!(validate_bounds(Some(0.0), None).is_ok());
        assert!(validate_bounds(None, None).is_ok());
        assert_eq!(validate_bounds(Some(-5.0), Some(1.2)), Err(RangeError::InvalidPrice(-5.0)));
        assert!(matches!(validate_bounds(Some(f64::NAN), Some(1.2)), Err(RangeError::InvalidPrice(_))));
        assert!(matches!(validate_bounds(None, Some(f64::NAN)), Err(RangeError::InvalidPrice(_))));
        assert_eq!(
            validate_bounds(Some(1.0), Some(1.0)),
            Err(RangeError::InvertedBounds { lower: 1.0, upper: 1.0 })
        );
    }

    #[test]
    fn test_report_flags_full_range() {
        let service = RangeService::new(&RangeConfig::default());
        let mut form = RangeFormState::new();
        form.select_preset(PresetKind::Full);

        let report = service
            .build_report(&RangeRequest::new(weth_usdc(), 2000.0, form))
            .unwrap();
        assert!(report.full_range);
        assert!(report.presets[0].full_range);
        assert!(report.presets[1..].iter().all(|line| !line.full_range));

        let mut form = RangeFormState::new();
        form.select_preset(PresetKind::Safe);
        let report = service
            .build_report(&RangeRequest::new(weth_usdc(), 2000.0, form))
            .unwrap();
        assert!(!report.full_range);
    }

    #[test]
    fn test_incomplete_form_has_no_score() {
        let service = RangeService::new(&RangeConfig::default());
        let mut form = RangeFormState::new();
        form.set_custom_bounds(Some(1.0), None);

        let report = service
            .build_report(&RangeRequest::new(weth_usdc(), 1.5, form))
            .unwrap();
        assert!(report.risk.is_none());
        assert!(report.range_percent.is_none());
        assert_eq!(report.in_range, None);
        assert_eq!(report.display.lower, "-");
    }

    #[test]
    fn test_preset_lines_validate_price() {
        let service = RangeService::new(&RangeConfig::default());
        assert!(service.preset_lines(false, -1.0).is_err());
        assert_eq!(service.preset_lines(false, 1.0).unwrap().len(), 4);
    }
}
