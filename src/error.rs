use crate::types::Label;
use thiserror::Error;

/// Errors surfaced by the recovery stages.
///
/// Each variant carries the counts or thresholds involved so that a bad
/// upstream segmentation can be diagnosed from the message alone.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecoveryError {
    #[error("color sequence is empty")]
    EmptySequence,

    #[error("color index {color} at position {index} is outside the palette of {n_colors} colors")]
    ColorOutOfRange {
        index: usize,
        color: usize,
        n_colors: usize,
    },

    #[error(
        "could not find two distinct background regions: {found} region(s) exceed {threshold:.1} px"
    )]
    InsufficientBackground { found: usize, threshold: f32 },

    #[error("no centroid available for region {0}")]
    MissingCentroid(Label),

    #[error(
        "edge lengths cannot form 3 clusters: {edges} edge(s) with {distinct} distinct length(s)"
    )]
    DegenerateClustering { edges: usize, distinct: usize },

    #[error("edge length cluster {cluster} ended up empty after {iterations} iteration(s)")]
    EmptyCluster { cluster: usize, iterations: usize },

    #[error("ring axis is degenerate: {ring_edges} ring edge(s) cancel out")]
    DegenerateRingAxis { ring_edges: usize },

    #[error("anchor region {0} is not part of the region graph")]
    UnknownAnchor(Label),

    #[error("graph disconnected: no path between regions {from} and {to}")]
    Disconnected { from: Label, to: Label },

    #[error("invalid parameter {name}={value}")]
    InvalidParameter { name: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, RecoveryError>;
