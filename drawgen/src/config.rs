//! Configuration for reproducible draw runs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One reproducible draw run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seed for the generator
    pub seed: i32,

    /// Kind of draws: "ints", "doubles" or "bytes"
    pub kind: String,

    /// Number of draws
    #[serde(default = "default_count")]
    pub count: usize,

    /// Lower bound for integer draws (inclusive)
    #[serde(default)]
    pub min: i32,

    /// Upper bound for integer draws (exclusive unless equal to min)
    #[serde(default = "default_max")]
    pub max: i32,

    /// Optional JSON report file; results go to stdout when absent
    pub output: Option<PathBuf>,
}

fn default_count() -> usize { 10 }
fn default_max() -> i32 { 100 }

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
