//! Wikipress CLI

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Convert wiki notes into static-site markdown
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "WIKIPRESS_CONFIG", default_value = "config.yaml")]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    log::info!("Wikipress v{}", env!("CARGO_PKG_VERSION"));

    let config = wikipress::Config::load(&args.config)
        .with_context(|| format!("Failed to load configuration {}", args.config.display()))?;
    let report = wikipress::convert(config).context("Conversion failed")?;

    println!(
        "Converted {} notes, copied {} images",
        report.documents_processed, report.assets_copied
    );
    for missing in &report.assets_missing {
        println!("Missing image: {missing}");
    }
    Ok(())
}
