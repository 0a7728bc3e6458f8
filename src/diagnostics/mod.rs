//! Diagnostics data model attached to every recovery report.
//!
//! `RecoveryTrace` records input sizes, the region partition, the effect of
//! filler pruning and per-stage timings.

pub mod pipeline;
pub mod timing;

pub use pipeline::{InputDescriptor, PartitionStage, PruneStage, RecoveryTrace};
pub use timing::{StageTiming, TimingBreakdown};
