mod app;

use anyhow::Result;
use clap::Parser;
use liqrange::application::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first so its log filter applies from the start
    let app_cfg = app::AppCfg::load(cli.config.as_deref(), cli.json)?;
    app::init_tracing(&app_cfg.config.log.filter);

    app::run(app_cfg, &cli.command)
}
