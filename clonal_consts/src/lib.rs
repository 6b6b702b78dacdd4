pub use rv;

use rv::dist::Gamma;

/// Starting value of the DP concentration parameter, α
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Shape of the default Gamma prior on α
pub const DEFAULT_ALPHA_SHAPE: f64 = 1.0;

/// Rate of the default Gamma prior on α
pub const DEFAULT_ALPHA_RATE: f64 = 0.001;

/// Number of MCMC sweeps a driver runs when not told otherwise
pub const DEFAULT_N_ITERS: usize = 10_000;

/// The default Gamma(shape, rate) prior on the concentration parameter.
///
/// A vague prior: mean 1000, variance 10^6.
pub fn general_alpha_prior() -> Gamma {
    Gamma::new_unchecked(DEFAULT_ALPHA_SHAPE, DEFAULT_ALPHA_RATE)
}
