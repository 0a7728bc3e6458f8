//! Parameter types configuring the recovery stages.
//!
//! The background fraction and the beads-per-row constant depend on how the
//! strand was photographed and how it is woven, so they have no defaults and
//! must be supplied by the caller. Clustering options default to seed 0 and
//! 100 iterations.

use crate::error::{RecoveryError, Result};
use crate::graph::ClusterOptions;
use serde::{Deserialize, Serialize};

/// Recovery-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryParams {
    /// Fraction of the image area above which a region counts as background.
    pub background_fraction: f32,
    /// Expected number of bead centres per lattice row; sets the diagonal
    /// step magnitudes `beads_per_row -/+ 0.5`.
    pub beads_per_row: f32,
    /// Seed and iteration cap for the edge-length clustering.
    #[serde(default)]
    pub clustering: ClusterOptions,
}

impl RecoveryParams {
    pub fn new(background_fraction: f32, beads_per_row: f32) -> Self {
        Self {
            background_fraction,
            beads_per_row,
            clustering: ClusterOptions::default(),
        }
    }

    pub fn with_clustering(mut self, clustering: ClusterOptions) -> Self {
        self.clustering = clustering;
        self
    }

    /// Rejects values outside their physical range.
    pub fn validate(&self) -> Result<()> {
        let f = self.background_fraction;
        if !f.is_finite() || f <= 0.0 || f >= 1.0 {
            return Err(RecoveryError::InvalidParameter {
                name: "background_fraction",
                value: f,
            });
        }
        if !self.beads_per_row.is_finite() || self.beads_per_row <= 0.5 {
            return Err(RecoveryError::InvalidParameter {
                name: "beads_per_row",
                value: self.beads_per_row,
            });
        }
        Ok(())
    }
}
