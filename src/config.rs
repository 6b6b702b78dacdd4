use std::fs;
use std::path::Path;

use clonal_consts::{
    DEFAULT_ALPHA, DEFAULT_ALPHA_RATE, DEFAULT_ALPHA_SHAPE, DEFAULT_N_ITERS,
};
use clonal_stats::GammaPriorConcentrationSampler;
use log::info;
use serde::{Deserialize, Serialize};

use crate::chain::ConcentrationChain;
use crate::error::Error;

/// Shape and rate of the Gamma prior on α
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GammaPriorConfig {
    pub shape: f64,
    pub rate: f64,
}

impl Default for GammaPriorConfig {
    fn default() -> Self {
        Self {
            shape: DEFAULT_ALPHA_SHAPE,
            rate: DEFAULT_ALPHA_RATE,
        }
    }
}

/// Configuration for the concentration updates of an inference run
///
/// ```yaml
/// alpha: 1.0
/// alpha_prior:
///   shape: 1.0
///   rate: 0.001
/// n_iters: 10000
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConcentrationConfig {
    /// Starting value of α
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    /// Gamma prior on α
    #[serde(default)]
    pub alpha_prior: GammaPriorConfig,
    /// Number of MCMC sweeps
    #[serde(default = "default_n_iters")]
    pub n_iters: usize,
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_n_iters() -> usize {
    DEFAULT_N_ITERS
}

impl Default for ConcentrationConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            alpha_prior: GammaPriorConfig::default(),
            n_iters: DEFAULT_N_ITERS,
        }
    }
}

impl ConcentrationConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        info!("Loading concentration config at {:?}...", path);
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    pub fn to_yaml_string(&self) -> Result<String, Error> {
        serde_yaml::to_string(self).map_err(Error::Yaml)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        info!("Saving concentration config to {:?}...", path);
        fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }

    /// Check the starting α and the prior parameters
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(Error::InvalidInitialAlpha(self.alpha));
        }
        self.sampler().map(|_| ())
    }

    /// Build the Gamma prior sampler
    pub fn sampler(&self) -> Result<GammaPriorConcentrationSampler, Error> {
        GammaPriorConcentrationSampler::new(
            self.alpha_prior.shape,
            self.alpha_prior.rate,
        )
        .map_err(Error::Concentration)
    }

    /// Build a chain starting at the configured α
    pub fn chain(
        &self,
    ) -> Result<ConcentrationChain<GammaPriorConcentrationSampler>, Error> {
        ConcentrationChain::new(self.sampler()?, self.alpha)
    }
}
