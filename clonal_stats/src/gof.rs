//! Goodness of fit of categorical draws
use special::Gamma as _;

/// Chi-square p-value of the observed category `counts` under the
/// categorical probabilities `p`.
///
/// Categories with zero probability carry no degrees of freedom. If any of
/// them were drawn the fit is impossible and the p-value is 0.
///
/// # Panics
/// Panics if `p` and `counts` differ in length.
///
/// # Example
///
/// ```rust
/// # use clonal_stats::test::categorical_gof;
/// let p_value = categorical_gof(&[0.5, 0.5], &[50, 50]);
/// assert_eq!(p_value, 1.0);
/// ```
pub fn categorical_gof(p: &[f64], counts: &[usize]) -> f64 {
    assert_eq!(
        p.len(),
        counts.len(),
        "one count is needed per category"
    );

    let n = counts.iter().sum::<usize>() as f64;
    if n == 0.0 {
        return 1.0;
    }
    let mut stat = 0.0;
    let mut n_cats: usize = 0;

    for (&p_i, &ct) in p.iter().zip(counts) {
        if p_i > 0.0 {
            let expected = n * p_i;
            let diff = ct as f64 - expected;
            stat += diff * diff / expected;
            n_cats += 1;
        } else if ct > 0 {
            return 0.0;
        }
    }

    if n_cats < 2 || stat <= 0.0 {
        return 1.0;
    }

    // upper tail of chi-square with n_cats - 1 degrees of freedom
    let dof = (n_cats - 1) as f64;
    1.0 - (stat / 2.0).inc_gamma(dof / 2.0)
}

/// Bin `n` draws of `draw` into `n_cats` categories
pub fn bin_draws<F>(n_cats: usize, n: usize, mut draw: F) -> Vec<usize>
where
    F: FnMut() -> usize,
{
    let mut counts = vec![0; n_cats];
    (0..n).for_each(|_| counts[draw()] += 1);
    counts
}
