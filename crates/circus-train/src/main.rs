use anyhow::Result;
use circus_train::{load_records, run, OutputFormat, TrainConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Pack a manifest of circus animals into predation-safe wagons.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Animal manifest (.json, .toml, or one `<diet> <size>` per line)
    input: PathBuf,

    /// TOML config file (overridden by TRAIN_* env vars and flags)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Report format: text or json
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Reject the manifest if any record is malformed
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Wagon capacity in points (overrides TRAIN_WAGON_CAPACITY)
    #[arg(long)]
    capacity: Option<u32>,

    /// Relaxed wagons allowed per run (overrides TRAIN_MAX_RELAXED)
    #[arg(long)]
    max_relaxed: Option<u32>,

    /// Audit the packed train and exit non-zero on violations
    #[arg(long, default_value_t = false)]
    audit: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => TrainConfig::from_file(path)?,
        None => TrainConfig::default(),
    };
    config.apply_env();
    if let Some(format) = args.format {
        config.output = format;
    }
    if let Some(capacity) = args.capacity {
        config.wagon_capacity = capacity;
    }
    if let Some(max_relaxed) = args.max_relaxed {
        config.max_relaxed = max_relaxed;
    }
    config.strict |= args.strict;

    info!(
        input = %args.input.display(),
        capacity = config.wagon_capacity,
        max_relaxed = config.max_relaxed,
        strict = config.strict,
        "Circus train starting"
    );

    let records = load_records(&args.input)?;
    let train = run(&config, &records, args.audit)?;
    print!("{}", train.render(config.output)?);

    if !train.passed_audit() {
        anyhow::bail!("Packed train failed its audit");
    }
    Ok(())
}
