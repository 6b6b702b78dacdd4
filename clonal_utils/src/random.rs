use rand::Rng;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DiscreteError {
    #[error("cannot draw from an empty weight vector")]
    EmptyWeights,
    #[error("weight {weight} at index {ix} is not a finite, non-negative number")]
    InvalidWeight { ix: usize, weight: f64 },
}

/// Draw an index from a categorical distribution with probabilities `p`.
///
/// Draws a single `u ~ U[0, 1)` and walks the running total of `p`,
/// returning the first index at which the total exceeds `u`. The weights are
/// not normalized here; `p` is expected to sum to 1.
///
/// If rounding leaves the total at or below `u` after the last weight, the
/// last index is returned. The mass lost to rounding is tiny, so this is a
/// tie-break and not an error.
///
/// # Panics
/// Panics if `p` is empty.
///
/// # Example
///
/// ```rust
/// # use clonal_utils::discrete;
/// let mut rng = rand::thread_rng();
///
/// assert_eq!(discrete(&[1.0, 0.0], &mut rng), 0);
/// assert_eq!(discrete(&[0.0, 1.0], &mut rng), 1);
/// ```
pub fn discrete<R: Rng>(p: &[f64], rng: &mut R) -> usize {
    assert!(!p.is_empty(), "cannot draw from an empty weight vector");
    let u: f64 = rng.gen();
    discrete_at(p, u)
}

/// The index [`discrete`] returns for the uniform draw `u`.
///
/// Use this when `u` comes from a source other than a `rand::Rng`.
///
/// # Panics
/// Panics if `p` is empty.
///
/// ```rust
/// # use clonal_utils::discrete_at;
/// let p = [0.2, 0.3, 0.5];
///
/// assert_eq!(discrete_at(&p, 0.1), 0);
/// assert_eq!(discrete_at(&p, 0.2), 1);
/// assert_eq!(discrete_at(&p, 0.75), 2);
/// ```
pub fn discrete_at(p: &[f64], u: f64) -> usize {
    assert!(!p.is_empty(), "cannot draw from an empty weight vector");
    let mut total = 0.0;
    for (ix, p_i) in p.iter().enumerate() {
        total += p_i;
        if u < total {
            return ix;
        }
    }
    // exhausted without crossing u
    p.len() - 1
}

/// Like [`discrete`], but validates the weights first.
///
/// Rejects empty weight vectors and negative or non-finite weights without
/// consuming a random draw.
pub fn try_discrete<R: Rng>(
    p: &[f64],
    rng: &mut R,
) -> Result<usize, DiscreteError> {
    if p.is_empty() {
        return Err(DiscreteError::EmptyWeights);
    }

    if let Some((ix, &weight)) = p
        .iter()
        .enumerate()
        .find(|(_, w)| !(w.is_finite() && **w >= 0.0))
    {
        return Err(DiscreteError::InvalidWeight { ix, weight });
    }

    Ok(discrete(p, rng))
}
