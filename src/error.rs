use std::io;

use clonal_stats::ConcentrationError;
use thiserror::Error;

/// Errors that can arise while configuring or running concentration updates
#[derive(Debug, Error)]
pub enum Error {
    /// The sampler rejected its prior, its inputs, or the partition
    #[error("concentration update failed: {0}")]
    Concentration(#[from] ConcentrationError),
    /// The starting concentration is not finite and positive
    #[error("initial alpha must be finite and positive, got {0}")]
    InvalidInitialAlpha(f64),
    /// Problem reading or writing a config file
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// Problem (de)serializing a config
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
