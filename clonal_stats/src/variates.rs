//! The source of random variates used by the samplers
use clonal_consts::rv::dist::{Beta, Gamma};
use clonal_consts::rv::traits::Rv;
use rand::Rng;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum VariateError {
    #[error("invalid Beta({alpha}, {beta}) parameters")]
    InvalidBeta { alpha: f64, beta: f64 },
    #[error("invalid Gamma(shape = {shape}, rate = {rate}) parameters")]
    InvalidGamma { shape: f64, rate: f64 },
}

/// Draws the variates the concentration update needs.
///
/// Every `rand::Rng` is a `Variates`, so callers usually just pass a seeded
/// generator. Implement this directly to script the draws.
///
/// The caller owns the generator, its seed, and its lifetime. Nothing here
/// locks; threads should each hold their own generator.
pub trait Variates {
    /// Draw `u ~ U[0, 1)`
    fn uniform(&mut self) -> f64;

    /// Draw from `Beta(alpha, beta)`
    fn beta(&mut self, alpha: f64, beta: f64) -> Result<f64, VariateError>;

    /// Draw from `Gamma(shape, rate)`
    fn gamma(&mut self, shape: f64, rate: f64) -> Result<f64, VariateError>;

    /// Draw an index from the categorical distribution with probabilities `p`
    ///
    /// Consumes exactly one `uniform` draw.
    fn discrete(&mut self, p: &[f64]) -> usize {
        let u = self.uniform();
        clonal_utils::discrete_at(p, u)
    }
}

#[inline]
fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

impl<R: Rng> Variates for R {
    fn uniform(&mut self) -> f64 {
        self.gen()
    }

    fn beta(&mut self, alpha: f64, beta: f64) -> Result<f64, VariateError> {
        if !(is_positive(alpha) && is_positive(beta)) {
            return Err(VariateError::InvalidBeta { alpha, beta });
        }
        let dist = Beta::new(alpha, beta)
            .map_err(|_| VariateError::InvalidBeta { alpha, beta })?;
        let x: f64 = dist.draw(self);
        Ok(x)
    }

    fn gamma(&mut self, shape: f64, rate: f64) -> Result<f64, VariateError> {
        if !(is_positive(shape) && is_positive(rate)) {
            return Err(VariateError::InvalidGamma { shape, rate });
        }
        let dist = Gamma::new(shape, rate)
            .map_err(|_| VariateError::InvalidGamma { shape, rate })?;
        let x: f64 = dist.draw(self);
        Ok(x)
    }
}
