use approx::assert_relative_eq;
use clonal::prelude::*;
use clonal::utils::discrete;
use clonal_stats::test::{bin_draws, categorical_gof};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

const N_BURN: usize = 500;

fn chain_moments(
    shape: f64,
    rate: f64,
    stats: PartitionStats,
    n_iters: usize,
    seed: u64,
) -> (f64, f64) {
    let mut rng = Xoshiro256Plus::seed_from_u64(seed);
    let sampler = GammaPriorConcentrationSampler::new(shape, rate).unwrap();
    let mut chain = ConcentrationChain::new(sampler, 1.0).unwrap();

    let trace = chain.run(n_iters, |_, _| stats, &mut rng).unwrap();
    let kept = &trace[N_BURN..];

    let n = kept.len() as f64;
    let mean = kept.iter().sum::<f64>() / n;
    let var = kept.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
    (mean, var)
}

// Posterior mean of α under p(α | k, n) ∝ Gamma(α; a, b) α^k Γ(α) / Γ(α + n)
// by trapezoid rule
fn posterior_mean(shape: f64, rate: f64, k: usize, n: usize) -> f64 {
    let ln_f = |alpha: f64| {
        let ln_crp: f64 = (0..n).map(|i| -(alpha + i as f64).ln()).sum();
        (shape - 1.0).mul_add(alpha.ln(), -rate * alpha)
            + (k as f64) * alpha.ln()
            + ln_crp
    };

    let step = 1E-3;
    let (mut z, mut m) = (0.0, 0.0);
    let mut alpha = step;
    while alpha < 100.0 {
        let f = ln_f(alpha).exp();
        z += f;
        m += alpha * f;
        alpha += step;
    }
    m / z
}

#[test]
fn single_item_chain_targets_the_prior() {
    // With k = n = 1 the CRP likelihood is flat in α, so the chain should
    // reproduce Gamma(2, 1): mean 2, variance 2.
    let stats = PartitionStats::new(1, 1).unwrap();
    let (mean, var) = chain_moments(2.0, 1.0, stats, 40_000, 0x1234);

    assert!((mean - 2.0).abs() < 0.1, "mean was {}", mean);
    assert!((var - 2.0).abs() < 0.4, "variance was {}", var);
}

#[test]
fn chain_mean_matches_posterior_mean() {
    let stats = PartitionStats::new(3, 20).unwrap();
    let expected = posterior_mean(2.0, 1.0, 3, 20);
    let (mean, _) = chain_moments(2.0, 1.0, stats, 40_000, 0xBEEF);

    assert!(
        (mean - expected).abs() < 0.05 * expected.max(1.0),
        "chain mean {} vs posterior mean {}",
        mean,
        expected
    );
}

#[test]
fn more_clusters_pull_alpha_up() {
    let few = PartitionStats::new(2, 100).unwrap();
    let many = PartitionStats::new(40, 100).unwrap();

    let (mean_few, _) = chain_moments(1.0, 0.001, few, 5_000, 7);
    let (mean_many, _) = chain_moments(1.0, 0.001, many, 5_000, 7);

    assert!(mean_many > mean_few);
}

/// Replays fixed η and u values and records every draw request
struct Replay {
    eta: f64,
    u: f64,
    calls: Vec<String>,
}

impl Replay {
    fn new(eta: f64, u: f64) -> Self {
        Self {
            eta,
            u,
            calls: Vec::new(),
        }
    }
}

impl Variates for Replay {
    fn uniform(&mut self) -> f64 {
        self.calls.push("uniform".into());
        self.u
    }

    fn beta(&mut self, alpha: f64, beta: f64) -> Result<f64, VariateError> {
        self.calls.push(format!("beta({}, {})", alpha, beta));
        Ok(self.eta)
    }

    // Gamma mean, shape / rate
    fn gamma(&mut self, shape: f64, rate: f64) -> Result<f64, VariateError> {
        self.calls.push(format!("gamma({}, {:.6})", shape, rate));
        Ok(shape / rate)
    }
}

// shape 1, rate 0.001, α = 1, k = 5, n = 50 with η = 1/2:
//   scale = 0.001 + ln 2, π = 0.125 921 242 872 751 86
#[test]
fn reference_update_takes_second_component_above_pi() {
    let sampler = GammaPriorConcentrationSampler::new(1.0, 0.001).unwrap();
    let mut src = Replay::new(0.5, 0.3);

    let alpha = sampler.sample_raw(1.0, 5, 50, &mut src).unwrap();

    assert_relative_eq!(alpha, 7.203_083_351_814_045, epsilon = 1E-9);
    assert_eq!(
        src.calls,
        vec!["beta(2, 50)", "uniform", "gamma(5, 0.694147)"]
    );
}

#[test]
fn reference_update_takes_first_component_below_pi() {
    let sampler = GammaPriorConcentrationSampler::new(1.0, 0.001).unwrap();
    let mut src = Replay::new(0.5, 0.1);

    let alpha = sampler.sample_raw(1.0, 5, 50, &mut src).unwrap();

    assert_relative_eq!(alpha, 8.643_700_022_176_855, epsilon = 1E-9);
    assert_eq!(
        src.calls,
        vec!["beta(2, 50)", "uniform", "gamma(6, 0.694147)"]
    );
}

#[test]
fn reference_update_is_reproducible_under_seed() {
    let sampler = GammaPriorConcentrationSampler::new(1.0, 0.001).unwrap();
    let draw = |seed: u64| {
        let mut rng = Xoshiro256Plus::seed_from_u64(seed);
        sampler.sample_raw(1.0, 5, 50, &mut rng).unwrap()
    };

    let first = draw(1337);
    assert_eq!(first, draw(1337));
    assert!(first > 0.0 && first.is_finite());
}

#[test]
fn categorical_frequencies_fit_weights() {
    let p = [0.05, 0.15, 0.5, 0.3];
    let mut rng = Xoshiro256Plus::seed_from_u64(42);

    let counts = bin_draws(p.len(), 20_000, || discrete(&p, &mut rng));
    let p_value = categorical_gof(&p, &counts);
    assert!(p_value > 0.001, "p-value was {}", p_value);
}

#[test]
fn sampler_serializes_as_shape_and_rate() {
    let sampler = GammaPriorConcentrationSampler::new(2.0, 0.5).unwrap();
    let yaml = serde_yaml::to_string(&sampler).unwrap();
    let back: GammaPriorConcentrationSampler =
        serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(sampler, back);
}

#[test]
fn invalid_sampler_yaml_is_rejected() {
    let res: Result<GammaPriorConcentrationSampler, _> =
        serde_yaml::from_str("shape: 0.0\nrate: 1.0\n");
    assert!(res.is_err());
}

#[test]
fn invalid_partition_yaml_is_rejected() {
    let res: Result<PartitionStats, _> =
        serde_yaml::from_str("n_clusters: 3\nn_items: 2\n");
    assert!(res.is_err());

    let stats: PartitionStats =
        serde_yaml::from_str("n_clusters: 2\nn_items: 3\n").unwrap();
    assert_eq!(stats, PartitionStats::new(2, 3).unwrap());
}

#[test]
fn config_chain_runs_configured_iterations() {
    let config = ConcentrationConfig::from_yaml_str(
        "alpha: 0.5\nalpha_prior:\n  shape: 1.0\n  rate: 1.0\nn_iters: 25\n",
    )
    .unwrap();

    let mut rng = Xoshiro256Plus::seed_from_u64(3);
    let mut chain = config.chain().unwrap();
    let asgn = [0, 0, 1, 2, 2, 2];
    let trace = chain
        .run(
            config.n_iters,
            |_, _| PartitionStats::from_assignment(&asgn).unwrap(),
            &mut rng,
        )
        .unwrap();

    assert_eq!(trace.len(), 25);
    assert_eq!(chain.alpha(), trace[24]);
}
