//! CLI commands and handlers
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

use crate::application::services::{validate_bounds, validate_price, RangeRequest, RangeService};
use crate::domain::price::invert_bounds;
use crate::domain::range::{
    compute_risk_score, range_percent, score_to_five_segment_fill, PresetKind, RangeFormState,
};
use crate::report::RangeReport;
use crate::shared::errors::AppError;
use crate::shared::types::{Token, TokenPair};
use crate::shared::utils::format_significant;

#[derive(Parser, Debug)]
#[command(name = "liqrange")]
#[command(version, about = "Concentrated liquidity range presets, risk scores and price inversion")]
pub struct Cli {
    /// Path to config file (optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List range presets with concrete bounds
    Presets {
        /// Current price (quote per base)
        #[arg(long)]
        price: f64,

        /// Base token, SYMBOL or ADDRESS:SYMBOL[:DECIMALS]
        #[arg(long, requires = "quote")]
        base: Option<Token>,

        /// Quote token, SYMBOL or ADDRESS:SYMBOL[:DECIMALS]
        #[arg(long, requires = "base")]
        quote: Option<Token>,

        /// Treat the pair as a stablecoin pair
        #[arg(long, conflicts_with_all = ["base", "quote"])]
        stable: bool,
    },

    /// Score a price range
    Score {
        #[arg(long)]
        lower: f64,

        #[arg(long)]
        upper: f64,

        /// Current price
        #[arg(long)]
        price: f64,
    },

    /// Show a range in its display direction
    Invert {
        #[arg(long)]
        lower: f64,

        #[arg(long)]
        upper: f64,

        #[arg(long)]
        base: Token,

        #[arg(long)]
        quote: Token,

        /// Flip the direction chosen by token order
        #[arg(long)]
        manual_invert: bool,
    },

    /// Full report of a preset or custom range
    Report {
        /// Current price (quote per base)
        #[arg(long)]
        price: f64,

        #[arg(long)]
        base: Token,

        #[arg(long)]
        quote: Token,

        /// Preset name (full, safe, normal, risk, stable)
        #[arg(long, conflicts_with_all = ["lower", "upper"])]
        preset: Option<PresetKind>,

        #[arg(long)]
        lower: Option<f64>,

        #[arg(long)]
        upper: Option<f64>,

        #[arg(long)]
        manual_invert: bool,
    },
}

/// Runs commands against a configured service and renders their output
pub struct CommandExecutor {
    service: RangeService,
    json: bool,
}

impl CommandExecutor {
    pub fn new(service: RangeService, json: bool) -> Self {
        Self { service, json }
    }

    pub fn execute(&self, command: &Commands) -> Result<String, AppError> {
        match command {
            Commands::Presets { price, base, quote, stable } => {
                let is_stable = match (base, quote) {
                    (Some(base), Some(quote)) => self
                        .service
                        .is_stablecoin_pair(&TokenPair::new(base.clone(), quote.clone())),
                    _ => *stable,
                };
                self.presets(*price, is_stable)
            }
            Commands::Score { lower, upper, price } => self.score(*lower, *upper, *price),
            Commands::Invert { lower, upper, base, quote, manual_invert } => {
                let pair = TokenPair::new(base.clone(), quote.clone());
                self.invert(&pair, *lower, *upper, *manual_invert)
            }
            Commands::Report { price, base, quote, preset, lower, upper, manual_invert } => {
                let mut form = RangeFormState::new();
                match preset {
                    Some(kind) => form.select_preset(*kind),
                    None if lower.is_some() || upper.is_some() => form.set_custom_bounds(*lower, *upper),
                    None => {}
                }
                form.set_manual_invert(*manual_invert);

                let pair = TokenPair::new(base.clone(), quote.clone());
                let report = self.service.build_report(&RangeRequest::new(pair, *price, form))?;
                self.render_report(&report)
            }
        }
    }

    fn presets(&self, price: f64, is_stable: bool) -> Result<String, AppError> {
        info!("Deriving presets at price {} (stablecoin pair: {})", price, is_stable);
        let lines = self.service.preset_lines(is_stable, price)?;

        if self.json {
            return Ok(serde_json::to_string_pretty(&lines)?);
        }
        Ok(join_lines(lines.iter().map(|line| {
            format!(
                "{:<11} {:>12} - {:<12} risk: {:<9} profit: {}{}",
                line.kind,
                line.lower,
                line.upper,
                line.risk,
                line.profit,
                if line.full_range { " (unbounded)" } else { "" }
            )
        })))
    }

    fn score(&self, lower: f64, upper: f64, price: f64) -> Result<String, AppError> {
        validate_price(price)?;
        validate_bounds(Some(lower), Some(upper))?;

        let width = range_percent(lower, upper, price);
        let score = compute_risk_score(Some(lower), Some(upper), Some(price));
        let segments = score.map(score_to_five_segment_fill);
        info!("Scored range [{}, {}] at {}: {:?}", lower, upper, price, score);

        if self.json {
            return Ok(serde_json::to_string_pretty(&json!({
                "range_percent": width,
                "score": score,
                "tier": score.map(|s| s.tier()),
                "segments": segments,
            }))?);
        }
        let mut lines = vec![format!("Range width: {:.2}%", width)];
        match (score, segments) {
            (Some(score), Some(segments)) => {
                lines.push(format!("Risk score:  {} ({})", score, score.tier()));
                lines.push(format!("Meter:       {}", render_meter(&segments)));
            }
            _ => lines.push("Risk score:  n/a".to_string()),
        }
        Ok(join_lines(lines))
    }

    fn invert(&self, pair: &TokenPair, lower: f64, upper: f64, manual_invert: bool) -> Result<String, AppError> {
        let display = self.service.display_range(pair, Some(lower), Some(upper), manual_invert);
        let digits = self.service.significant_digits();

        if self.json {
            return Ok(serde_json::to_string_pretty(&display)?);
        }
        let (flip_lower, flip_upper) = invert_bounds(display.lower, display.upper);
        Ok(join_lines([
            format!(
                "{} - {} {} per {}{}",
                format_significant(display.lower, digits),
                format_significant(display.upper, digits),
                display.quote.symbol,
                display.base.symbol,
                if display.inverted { " (inverted)" } else { "" }
            ),
            format!(
                "{} - {} {} per {}",
                format_significant(flip_lower, digits),
                format_significant(flip_upper, digits),
                display.base.symbol,
                display.quote.symbol
            ),
        ]))
    }

    fn render_report(&self, report: &RangeReport) -> Result<String, AppError> {
        if self.json {
            return Ok(report.to_json()?);
        }

        let mut lines = vec![format!(
            "{} @ {}{}",
            report.pair,
            report.current_price,
            if report.is_stablecoin_pair { " (stablecoin pair)" } else { "" }
        )];
        for line in &report.presets {
            let marker = if Some(line.kind) == report.active_preset { "*" } else { " " };
            lines.push(format!("{} {:<11} {:>12} - {:<12}", marker, line.kind, line.lower, line.upper));
        }

        let display = &report.display;
        lines.push(format!(
            "Range: {} - {} {} per {} (current {}){}",
            display.lower,
            display.upper,
            display.quote,
            display.base,
            display.current,
            if display.inverted { ", inverted" } else { "" }
        ));
        let status = match report.in_range {
            Some(true) if report.full_range => Some("Status: in range (full range)"),
            Some(true) => Some("Status: in range"),
            Some(false) => Some("Status: out of range"),
            None => None,
        };
        lines.extend(status.map(str::to_string));
        if let Some(risk) = &report.risk {
            lines.push(format!("Risk:  {} ({}) {}", risk.score, risk.tier, render_meter(&risk.segments)));
        }
        Ok(join_lines(lines))
    }
}

/// One output line per item, each newline-terminated
fn join_lines<I: IntoIterator<Item = String>>(lines: I) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

fn render_meter(segments: &[f64; 5]) -> String {
    segments
        .iter()
        .map(|fill| match *fill {
            f if f >= 100.0 => '█',
            f if f >= 50.0 => '▓',
            f if f > 0.0 => '░',
            _ => '·',
        })
        .collect()
}
