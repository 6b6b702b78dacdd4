//! Dirichlet process concentration updates for subclone deconvolution.
//!
//! In a Dirichlet process mixture, the concentration parameter, α, controls
//! how readily new clusters (subclones) are created. Rather than fixing α,
//! the inference driver places a Gamma prior on it and, once per MCMC sweep,
//! draws a new α from its full conditional given the number of occupied
//! clusters and the number of data points.
//!
//! # Example
//!
//! Run a chain against a driver that reports the partition each sweep. Here
//! the partition is fixed; a real driver reassigns mutations to clusters
//! using the α it is handed.
//!
//! ```rust
//! use clonal::prelude::*;
//! use rand::SeedableRng;
//! use rand_xoshiro::Xoshiro256Plus;
//!
//! let mut rng = Xoshiro256Plus::seed_from_u64(1337);
//!
//! let config = ConcentrationConfig {
//!     n_iters: 100,
//!     ..Default::default()
//! };
//! let mut chain = config.chain().unwrap();
//!
//! let asgn = vec![0, 0, 1, 1, 1, 2, 3, 3];
//! let trace = chain
//!     .run(
//!         config.n_iters,
//!         |_iter, _alpha| PartitionStats::from_assignment(&asgn).unwrap(),
//!         &mut rng,
//!     )
//!     .unwrap();
//!
//! assert_eq!(trace.len(), 100);
//! assert!(trace.iter().all(|&alpha| alpha > 0.0));
//! ```
#![warn(unused_extern_crates)]
#![warn(
    clippy::all,
    clippy::imprecise_flops,
    clippy::suboptimal_flops,
    clippy::unseparated_literal_suffix,
    clippy::unreadable_literal,
    clippy::option_option,
    clippy::implicit_clone
)]

pub mod chain;
pub mod config;
mod error;
pub mod prelude;

pub use chain::ConcentrationChain;
pub use config::{ConcentrationConfig, GammaPriorConfig};
pub use error::Error;

pub use clonal_stats::{
    ConcentrationSampler, GammaPriorConcentrationSampler, PartitionStats,
    Variates,
};
pub use clonal_stats::rv;
pub use clonal_utils as utils;
pub use clonal_consts as consts;
