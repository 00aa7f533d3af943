use std::path::PathBuf;

use clap::Args;
use dispatch_network::demo::{DemoNetworkParams, generate_demo_network};
use tracing::info;

use crate::config::AppConfig;

#[derive(Args)]
pub struct GenerateArgs {
    /// Where to write the dataset, defaults to the configured dataset
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of days of history
    #[arg(long, default_value_t = 30)]
    days: u32,
}

pub fn run(config: &AppConfig, args: GenerateArgs) -> anyhow::Result<()> {
    let out = args.out.unwrap_or_else(|| config.dataset.clone());

    let dataset = generate_demo_network(&DemoNetworkParams {
        seed: args.seed,
        days: args.days,
        ..DemoNetworkParams::default()
    });
    dataset.to_file(&out)?;

    info!("Network dataset written to {}", out.display());

    Ok(())
}
