//! Summary statistics of a data partition
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PartitionStatsError {
    #[error("the partition has no items")]
    NoItems,
    #[error("the partition has items but no clusters")]
    NoClusters,
    #[error("there are {n_clusters} clusters but only {n_items} items")]
    MoreClustersThanItems { n_clusters: usize, n_items: usize },
}

/// The number of occupied clusters, k, and number of items, n, in a
/// partition.
///
/// Always satisfies `1 <= k <= n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPartitionStats")]
pub struct PartitionStats {
    n_clusters: usize,
    n_items: usize,
}

#[derive(Deserialize)]
struct RawPartitionStats {
    n_clusters: usize,
    n_items: usize,
}

impl TryFrom<RawPartitionStats> for PartitionStats {
    type Error = PartitionStatsError;

    fn try_from(raw: RawPartitionStats) -> Result<Self, Self::Error> {
        Self::new(raw.n_clusters, raw.n_items)
    }
}

impl PartitionStats {
    /// Create partition statistics from k clusters over n items
    ///
    /// # Example
    ///
    /// ```rust
    /// # use clonal_stats::partition::{PartitionStats, PartitionStatsError};
    /// let stats = PartitionStats::new(5, 50).unwrap();
    /// assert_eq!(stats.n_clusters(), 5);
    ///
    /// assert_eq!(
    ///     PartitionStats::new(3, 2),
    ///     Err(PartitionStatsError::MoreClustersThanItems {
    ///         n_clusters: 3,
    ///         n_items: 2,
    ///     })
    /// );
    /// ```
    pub fn new(
        n_clusters: usize,
        n_items: usize,
    ) -> Result<Self, PartitionStatsError> {
        if n_items == 0 {
            Err(PartitionStatsError::NoItems)
        } else if n_clusters == 0 {
            Err(PartitionStatsError::NoClusters)
        } else if n_clusters > n_items {
            Err(PartitionStatsError::MoreClustersThanItems {
                n_clusters,
                n_items,
            })
        } else {
            Ok(Self {
                n_clusters,
                n_items,
            })
        }
    }

    /// Compute the statistics of an assignment vector, where `asgn[i]` is the
    /// cluster label of the i<sup>th</sup> item. Labels need not be
    /// contiguous.
    pub fn from_assignment(asgn: &[usize]) -> Result<Self, PartitionStatsError> {
        let n_clusters = asgn.iter().collect::<HashSet<_>>().len();
        Self::new(n_clusters, asgn.len())
    }

    /// Compute the statistics from per-cluster occupancy counts. Empty
    /// clusters are not counted.
    pub fn from_counts(counts: &[usize]) -> Result<Self, PartitionStatsError> {
        let n_clusters = counts.iter().filter(|&&ct| ct > 0).count();
        let n_items = counts.iter().sum();
        Self::new(n_clusters, n_items)
    }

    /// The number of occupied clusters, k
    #[inline]
    pub fn n_clusters(&self) -> usize {
        self.n_clusters
    }

    /// The number of items, n
    #[inline]
    pub fn n_items(&self) -> usize {
        self.n_items
    }
}
