mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use randlib::Sub55;
use serde::Serialize;
use std::fs::File;

use config::Config;

#[derive(Parser)]
#[command(name = "drawgen")]
#[command(about = "Generate reproducible draw sequences from a seed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bounded integer draws
    Ints {
        /// Generator seed
        #[arg(value_name = "SEED", allow_negative_numbers = true)]
        seed: i32,

        /// Number of draws
        #[arg(value_name = "COUNT")]
        count: usize,

        /// Lower bound (inclusive)
        #[arg(value_name = "MIN", allow_negative_numbers = true)]
        min: i32,

        /// Upper bound (exclusive unless equal to MIN)
        #[arg(value_name = "MAX", allow_negative_numbers = true)]
        max: i32,
    },

    /// Uniform doubles in [0, 1)
    Doubles {
        /// Generator seed
        #[arg(value_name = "SEED", allow_negative_numbers = true)]
        seed: i32,

        /// Number of draws
        #[arg(value_name = "COUNT")]
        count: usize,
    },

    /// Raw byte stream, one generator advance per byte
    Bytes {
        /// Generator seed
        #[arg(value_name = "SEED", allow_negative_numbers = true)]
        seed: i32,

        /// Number of bytes
        #[arg(value_name = "COUNT")]
        count: usize,
    },

    /// Run a draw described by a TOML config file
    Run {
        /// Path to the config file
        #[arg(value_name = "CONFIG")]
        config: String,
    },
}

/// JSON report written when a config names an output file.
#[derive(Serialize)]
struct DrawReport {
    seed: i32,
    kind: String,
    values: serde_json::Value,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ints { seed, count, min, max } => {
            let mut rng = Sub55::new(seed);
            println!("\nseed={}  count={}  range=[{}, {})", seed, count, min, max);
            for _ in 0..count {
                println!("{}", rng.next_int(min, max)?);
            }
        }

        Commands::Doubles { seed, count } => {
            let mut rng = Sub55::new(seed);
            println!("\nseed={}  count={}  doubles in [0, 1)", seed, count);
            for _ in 0..count {
                println!("{:.17}", rng.next_double());
            }
        }

        Commands::Bytes { seed, count } => {
            let mut rng = Sub55::new(seed);
            let mut buf = vec![0u8; count];
            rng.next_bytes(&mut buf);
            println!("\nseed={}  count={}  bytes", seed, count);
            for byte in buf {
                println!("{}", byte);
            }
        }

        Commands::Run { config } => {
            let config = Config::from_file(&config)
                .map_err(|e| anyhow::anyhow!("Failed to read config: {}", e))?;
            run_config(&config)?;
        }
    }

    Ok(())
}

fn run_config(config: &Config) -> Result<()> {
    let mut rng = Sub55::new(config.seed);

    let values = match config.kind.as_str() {
        "ints" => {
            let mut draws = Vec::with_capacity(config.count);
            for _ in 0..config.count {
                draws.push(rng.next_int(config.min, config.max)?);
            }
            serde_json::to_value(draws)?
        }
        "doubles" => {
            let draws: Vec<f64> = (0..config.count).map(|_| rng.next_double()).collect();
            serde_json::to_value(draws)?
        }
        "bytes" => {
            let mut buf = vec![0u8; config.count];
            rng.next_bytes(&mut buf);
            serde_json::to_value(buf)?
        }
        other => anyhow::bail!("Unknown draw kind: {}", other),
    };

    match &config.output {
        Some(path) => {
            let report = DrawReport {
                seed: config.seed,
                kind: config.kind.clone(),
                values,
            };
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            serde_json::to_writer_pretty(file, &report)?;
            println!("Report written to {}", path.display());
        }
        None => {
            println!("\nseed={}  kind={}  count={}", config.seed, config.kind, config.count);
            println!("{}", values);
        }
    }

    Ok(())
}
