//! Threads the concentration parameter through successive MCMC sweeps
use clonal_stats::{ConcentrationSampler, PartitionStats, Variates};
use log::{debug, info};

use crate::error::Error;

/// The current value of α and the sampler that updates it.
///
/// The surrounding driver owns the partition. Once per sweep it reports the
/// partition statistics and gets back the α to use for its next cluster
/// assignment step.
///
/// # Example
///
/// ```rust
/// use clonal::{ConcentrationChain, PartitionStats};
/// use clonal::GammaPriorConcentrationSampler;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let mut rng = Xoshiro256Plus::seed_from_u64(1337);
/// let sampler = GammaPriorConcentrationSampler::new(1.0, 0.001).unwrap();
/// let mut chain = ConcentrationChain::new(sampler, 1.0).unwrap();
///
/// let stats = PartitionStats::from_assignment(&[0, 0, 1, 2, 1]).unwrap();
/// let alpha = chain.step(stats, &mut rng).unwrap();
///
/// assert_eq!(chain.alpha(), alpha);
/// assert_eq!(chain.n_steps(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ConcentrationChain<S> {
    sampler: S,
    alpha: f64,
    n_steps: usize,
}

impl<S: ConcentrationSampler> ConcentrationChain<S> {
    /// Start a chain at `alpha`
    pub fn new(sampler: S, alpha: f64) -> Result<Self, Error> {
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(Error::InvalidInitialAlpha(alpha));
        }
        Ok(Self {
            sampler,
            alpha,
            n_steps: 0,
        })
    }

    /// The current value of α
    #[inline]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// The number of updates applied so far
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    #[inline]
    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    /// Draw the next α given the current partition and store it.
    ///
    /// On error the current α is left unchanged.
    pub fn step<V: Variates>(
        &mut self,
        stats: PartitionStats,
        rng: &mut V,
    ) -> Result<f64, Error> {
        let alpha = self.sampler.sample(self.alpha, stats, rng)?;
        self.alpha = alpha;
        self.n_steps += 1;
        Ok(alpha)
    }

    /// Run `n_iters` sweeps and return the α trace.
    ///
    /// Before each update `stats_fn` is called with the sweep index and the
    /// current α. It is where the driver reassigns items to clusters and
    /// reports the resulting partition. The first error stops the run.
    pub fn run<V, F>(
        &mut self,
        n_iters: usize,
        mut stats_fn: F,
        rng: &mut V,
    ) -> Result<Vec<f64>, Error>
    where
        V: Variates,
        F: FnMut(usize, f64) -> PartitionStats,
    {
        info!(
            "Running {} concentration updates starting at alpha = {}",
            n_iters, self.alpha
        );

        let mut trace = Vec::with_capacity(n_iters);
        for iter in 0..n_iters {
            let stats = stats_fn(iter, self.alpha);
            let alpha = self.step(stats, rng)?;
            debug!(
                "iter {}: k = {}, n = {}, alpha = {}",
                iter,
                stats.n_clusters(),
                stats.n_items(),
                alpha
            );
            trace.push(alpha);
        }

        info!("Finished at alpha = {}", self.alpha);
        Ok(trace)
    }
}
