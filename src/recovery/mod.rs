//! Pattern recovery orchestrating both ordering pipelines for one image.
//!
//! Overview
//! - Orders bead records by region label and analyses the color sequence with
//!   the autocorrelation estimator and the exact minimal-period solver.
//! - Partitions regions into beads, background and filler by area, then picks
//!   the outer and inner background anchors.
//! - Walks a shortest path between the anchors in the unpruned graph to obtain
//!   the bead visiting order, and analyses the path-ordered color sequence.
//! - Splices filler regions out of the graph and classifies the remaining
//!   edges into ring and diagonal steps with signed index deltas.
//!
//! Modules
//! - [`params`]: configuration types used by the recoverer.
//! - `pipeline`: the [`PatternRecoverer`] implementation and report types.
//! - `job`: config-driven batch runs writing JSON reports.

mod job;
pub mod params;
mod pipeline;

pub use job::{run_job, JobOutcome};
pub use params::RecoveryParams;
pub use pipeline::{PatternRecoverer, RecoveryReport, StrandObservation};
