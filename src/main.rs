use anyhow::Context;
use clap::Parser;
use mealboard::cli::Cli;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    mealboard::logging::init_tracing();

    let config = cli.resolve_config()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = mealboard::ui::run(&config, runtime.handle().clone());
    runtime.shutdown_timeout(Duration::from_millis(250));
    result.context("Meal screen failed")
}
