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
pub mod concentration;
mod gof;
pub mod partition;
pub mod variates;

pub use clonal_consts::rv;
pub use concentration::{
    ConcentrationError, ConcentrationSampler, GammaPriorConcentrationSampler,
    MixtureWeight,
};
pub use partition::{PartitionStats, PartitionStatsError};
pub use variates::{VariateError, Variates};

/// Checks of sampler output against known distributions
pub mod test {
    pub use super::gof::{bin_draws, categorical_gof};
}
