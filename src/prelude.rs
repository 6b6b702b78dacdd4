//! Common import for general use.

pub use crate::{
    ConcentrationChain, ConcentrationConfig, Error, GammaPriorConfig,
};

pub use clonal_stats::{
    ConcentrationError, ConcentrationSampler, GammaPriorConcentrationSampler,
    PartitionStats, PartitionStatsError, VariateError, Variates,
};
pub use clonal_stats::rv;
pub use clonal_utils as utils;
