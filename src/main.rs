use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod directory;
mod report;
mod topology;
mod verifier;

use config::NetworkConfigs;
use directory::SnapshotDirectory;

/// Post-deployment topology verifier for on-chain component suites
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network identifier the deployment targets (e.g. mainnet, nightly, falcon, f0)
    #[arg(short, long)]
    network: String,

    /// Path to the per-network configuration YAML file
    #[arg(short, long)]
    config: PathBuf,

    /// Path to the deployment state snapshot JSON file
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Deployer account addresses; the first one owns the contracts on
    /// non-production networks
    #[arg(short, long = "account")]
    accounts: Vec<String>,

    /// Exit with status 0 even when checks report mismatches
    /// (fatal errors still exit non-zero)
    #[arg(long)]
    allow_mismatch: bool,
}

fn main() -> Result<ExitCode> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting chaincheck deployment verification");
    info!("Network: {}", args.network);
    info!("Configuration file: {:?}", args.config);
    info!("Snapshot file: {:?}", args.snapshot);

    let configs = NetworkConfigs::load(&args.config)
        .wrap_err_with(|| format!("Failed to load network configuration '{}'", args.config.display()))?;
    let snapshot = SnapshotDirectory::load(&args.snapshot)
        .wrap_err_with(|| format!("Failed to load deployment snapshot '{}'", args.snapshot.display()))?;

    let report = verifier::verify(
        &args.network,
        &args.accounts,
        &snapshot,
        &topology::standard_topology(),
        &configs,
    )
    .wrap_err("Deployment verification could not complete")?;

    println!("{}", report.render_text());

    // Exit policy: a clean report exits 0; mismatches exit 1 unless the
    // operator opted out. Fatal errors never reach this point.
    if report.is_clean() {
        info!("Deployment verification completed successfully");
        Ok(ExitCode::SUCCESS)
    } else if args.allow_mismatch {
        warn!("Mismatches reported; exiting 0 because --allow-mismatch was given");
        Ok(ExitCode::SUCCESS)
    } else {
        warn!("Mismatches reported; exiting with failure status");
        Ok(ExitCode::FAILURE)
    }
}
