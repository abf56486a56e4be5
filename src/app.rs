// src/app.rs
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use liqrange::application::{CommandExecutor, Commands, RangeService};
use liqrange::shared::config::{ConfigLoader, RangeConfig};

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub config: RangeConfig,
    pub json: bool,
}

impl AppCfg {
    /// Config file values, or defaults when no file is given
    pub fn load(config_path: Option<&Path>, json: bool) -> Result<Self> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from(path)
                .with_context(|| format!("load config {}", path.display()))?,
            None => RangeConfig::default(),
        };
        Ok(Self { config, json })
    }
}

/// Logs go to stderr so `--json` output stays machine readable.
/// RUST_LOG takes priority over the configured filter.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(app_cfg: AppCfg, command: &Commands) -> Result<()> {
    info!("Starting liqrange");
    debug!("Configuration: {:?}", app_cfg);

    let service = RangeService::new(&app_cfg.config);
    let executor = CommandExecutor::new(service, app_cfg.json);
    let output = executor.execute(command).context("command failed")?;
    print!("{}", output);
    if app_cfg.json {
        println!();
    }
    Ok(())
}
