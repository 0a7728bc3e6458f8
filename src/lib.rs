#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod error;
pub mod io;
pub mod recovery;
pub mod types;

// Stage-level building blocks, usable on their own.
pub mod config;
pub mod diagnostics;
pub mod graph;
pub mod period;

// --- High-level re-exports -------------------------------------------------

// Main entry points: recoverer + results.
pub use crate::recovery::{
    run_job, JobOutcome, PatternRecoverer, RecoveryParams, RecoveryReport, StrandObservation,
};
pub use crate::types::{BeadRecord, Label, Region};

pub use crate::error::{RecoveryError, Result};

// Structured diagnostics attached to every report.
pub use crate::diagnostics::{RecoveryTrace, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use bead_pattern::prelude::*;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let obs = bead_pattern::io::load_observation(std::path::Path::new("strand.json"))?;
/// let recoverer = PatternRecoverer::new(RecoveryParams::new(0.1, 12.0));
/// let report = recoverer.process(&obs)?;
/// println!("period={:?} beads={:?}", report.best_period(), report.bead_path.beads);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::graph::RegionGraph;
    pub use crate::{
        BeadRecord, PatternRecoverer, RecoveryParams, RecoveryReport, Region, StrandObservation,
    };
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    pub use crate::graph::{
        classify_edge_deltas, find_background_anchors, kmeans_1d, prune_filler,
        recover_bead_path, shortest_bead_path,
    };
    pub use crate::period::{autocorrelation_period, minimal_period, ColorSequence};

    pub use crate::diagnostics::{
        InputDescriptor, PartitionStage, PruneStage, StageTiming, TimingBreakdown,
    };
}
