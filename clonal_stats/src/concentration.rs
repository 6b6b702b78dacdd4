//! Gibbs updates for the Dirichlet process concentration parameter, α
use clonal_consts::rv::dist::Gamma;
use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::partition::{PartitionStats, PartitionStatsError};
use crate::variates::{VariateError, Variates};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConcentrationError {
    #[error("the Gamma prior shape must be finite and positive, got {0}")]
    InvalidShape(f64),
    #[error("the Gamma prior rate must be finite and positive, got {0}")]
    InvalidRate(f64),
    #[error("the previous concentration must be finite and positive, got {0}")]
    InvalidOldValue(f64),
    #[error("invalid partition: {0}")]
    PartitionStats(#[from] PartitionStatsError),
    #[error("random variate failure: {0}")]
    Variate(#[from] VariateError),
}

/// Updates the concentration parameter of a Dirichlet process given the
/// current partition.
pub trait ConcentrationSampler {
    /// Draw a new concentration from its conditional given the previous
    /// value and the partition statistics
    fn sample<V: Variates>(
        &self,
        old_value: f64,
        stats: PartitionStats,
        rng: &mut V,
    ) -> Result<f64, ConcentrationError>;

    /// Same as `sample`, but validates raw cluster and item counts first
    fn sample_raw<V: Variates>(
        &self,
        old_value: f64,
        num_clusters: usize,
        num_items: usize,
        rng: &mut V,
    ) -> Result<f64, ConcentrationError> {
        let stats = PartitionStats::new(num_clusters, num_items)?;
        self.sample(old_value, stats, rng)
    }
}

/// Quantities of the two-component Gamma mixture the update draws from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MixtureWeight {
    /// The rate of both Gamma components, `b - ln(η)`
    pub scale: f64,
    /// The odds of the first component, `(a + k - 1) / (n * scale)`
    pub x: f64,
    /// The probability of the first component, `x / (1 + x)`
    pub pi: f64,
}

/// Gibbs update for α under a Gamma(shape, rate) prior.
///
/// Uses the auxiliary variable scheme of Escobar & West (1995). Given α, k
/// clusters, and n items:
///
/// 1. η ~ Beta(α + 1, n)
/// 2. π / (1 - π) = (a + k - 1) / (n (b - ln η))
/// 3. α' ~ π Gamma(a + k, b - ln η) + (1 - π) Gamma(a + k - 1, b - ln η)
///
/// Every draw is accepted. A draw that underflows to zero is returned as
/// `f64::MIN_POSITIVE`, so the result is always strictly positive.
///
/// # Example
///
/// ```rust
/// use clonal_stats::concentration::{
///     ConcentrationSampler, GammaPriorConcentrationSampler,
/// };
/// use clonal_stats::partition::PartitionStats;
///
/// let mut rng = rand::thread_rng();
/// let sampler = GammaPriorConcentrationSampler::new(1.0, 0.001).unwrap();
/// let stats = PartitionStats::new(5, 50).unwrap();
///
/// let alpha = sampler.sample(1.0, stats, &mut rng).unwrap();
/// assert!(alpha > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GammaPrior", into = "GammaPrior")]
pub struct GammaPriorConcentrationSampler {
    shape: f64,
    rate: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GammaPrior {
    shape: f64,
    rate: f64,
}

impl TryFrom<GammaPrior> for GammaPriorConcentrationSampler {
    type Error = ConcentrationError;

    fn try_from(prior: GammaPrior) -> Result<Self, Self::Error> {
        Self::new(prior.shape, prior.rate)
    }
}

impl From<GammaPriorConcentrationSampler> for GammaPrior {
    fn from(sampler: GammaPriorConcentrationSampler) -> Self {
        Self {
            shape: sampler.shape,
            rate: sampler.rate,
        }
    }
}

impl GammaPriorConcentrationSampler {
    /// Create a sampler with a Gamma(shape, rate) prior on α
    pub fn new(shape: f64, rate: f64) -> Result<Self, ConcentrationError> {
        if !(shape.is_finite() && shape > 0.0) {
            Err(ConcentrationError::InvalidShape(shape))
        } else if !(rate.is_finite() && rate > 0.0) {
            Err(ConcentrationError::InvalidRate(rate))
        } else {
            Ok(Self { shape, rate })
        }
    }

    /// Create a sampler from an `rv` Gamma prior
    pub fn from_prior(prior: &Gamma) -> Self {
        // rv has already validated the parameters
        Self {
            shape: prior.shape(),
            rate: prior.rate(),
        }
    }

    /// The prior as an `rv` distribution
    pub fn prior(&self) -> Gamma {
        Gamma::new_unchecked(self.shape, self.rate)
    }

    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Mixture quantities for auxiliary variable `eta` in (0, 1)
    pub fn mixture_weight(
        &self,
        eta: f64,
        stats: PartitionStats,
    ) -> MixtureWeight {
        let k = stats.n_clusters() as f64;
        let n = stats.n_items() as f64;

        let scale = self.rate - eta.ln();
        let x = (self.shape + k - 1.0) / (n * scale);
        let pi = x / (1.0 + x);

        MixtureWeight { scale, x, pi }
    }
}

impl Default for GammaPriorConcentrationSampler {
    fn default() -> Self {
        Self::from_prior(&clonal_consts::general_alpha_prior())
    }
}

impl ConcentrationSampler for GammaPriorConcentrationSampler {
    fn sample<V: Variates>(
        &self,
        old_value: f64,
        stats: PartitionStats,
        rng: &mut V,
    ) -> Result<f64, ConcentrationError> {
        if !(old_value.is_finite() && old_value > 0.0) {
            return Err(ConcentrationError::InvalidOldValue(old_value));
        }

        let k = stats.n_clusters() as f64;
        let n = stats.n_items() as f64;

        let eta = rng.beta(old_value + 1.0, n)?;
        let weight = self.mixture_weight(eta, stats);

        let label = rng.discrete(&[weight.pi, 1.0 - weight.pi]);
        let shape = if label == 0 {
            self.shape + k
        } else {
            self.shape + k - 1.0
        };

        // Gamma(shape < 1) draws can underflow to zero. The mass below
        // MIN_POSITIVE is negligible, so clamp rather than fail.
        let new_value = rng
            .gamma(shape, weight.scale)?
            .max(f64::MIN_POSITIVE);

        trace!(
            "alpha {} -> {} (k: {}, n: {}, eta: {}, pi: {}, label: {})",
            old_value,
            new_value,
            stats.n_clusters(),
            stats.n_items(),
            eta,
            weight.pi,
            label
        );

        Ok(new_value)
    }
}
