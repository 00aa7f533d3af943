use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{config::AppConfig, generate::GenerateArgs, plan::PlanArgs};

mod config;
mod forecast;
mod generate;
mod plan;
mod summary;
mod tables;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Network dataset, overrides DISPATCH_DATASET
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Overview of the supply network
    Summary,
    /// Forecast the demand of every customer
    Forecast {
        /// Period to forecast, defaults to the one after the latest history
        #[arg(short, long)]
        period: Option<u32>,
    },
    /// Forecast the demand then compute the cheapest allocation
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let mut config = AppConfig::from_env()?;
    if let Some(dataset) = cli.dataset {
        config.dataset = dataset;
    }

    match cli.command {
        Some(Commands::Summary) => summary::run(&config)?,
        Some(Commands::Forecast { period }) => forecast::run(&config, period)?,
        Some(Commands::Plan { args }) => plan::run(&config, args)?,
        Some(Commands::Generate { args }) => generate::run(&config, args)?,
        None => {
            tracing::info!("No command given, try --help");
        }
    }

    Ok(())
}
