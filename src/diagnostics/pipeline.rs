use crate::diagnostics::TimingBreakdown;
use crate::graph::{RegionGraph, RegionPartition};
use serde::Serialize;

/// Trace describing what each recovery stage saw and produced.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub partition: PartitionStage,
    pub pruning: PruneStage,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: u32,
    pub height: u32,
    pub palette_size: usize,
    pub regions: usize,
    pub beads: usize,
    pub graph_nodes: usize,
    pub graph_edges: usize,
    /// Mean bead certainty, `None` without bead records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_certainty: Option<f32>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionStage {
    pub beads: usize,
    pub background: usize,
    pub filler: usize,
    pub background_threshold: f32,
}

impl From<&RegionPartition> for PartitionStage {
    fn from(p: &RegionPartition) -> Self {
        Self {
            beads: p.beads.len(),
            background: p.background.len(),
            filler: p.filler.len(),
            background_threshold: p.background_threshold,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PruneStage {
    pub nodes_before: usize,
    pub edges_before: usize,
    pub nodes_after: usize,
    pub edges_after: usize,
    pub spliced_edges: usize,
}

impl PruneStage {
    pub fn compare(before: &RegionGraph, after: &RegionGraph) -> Self {
        Self {
            nodes_before: before.node_count(),
            edges_before: before.edge_count(),
            nodes_after: after.node_count(),
            edges_after: after.edge_count(),
            spliced_edges: after.edges().filter(|(_, _, e)| e.spliced).count(),
        }
    }
}
