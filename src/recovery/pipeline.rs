use super::params::RecoveryParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{InputDescriptor, PartitionStage, PruneStage, RecoveryTrace, TimingBreakdown};
use crate::error::Result;
use crate::graph::{
    classify_edge_deltas, find_background_anchors, prune_filler, shortest_bead_path, BeadPath,
    EdgeDeltas, RegionGraph, RegionPartition,
};
use crate::period::{ColorSequence, PeriodAnalysis};
use crate::types::{BeadRecord, Label, Region};
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::time::Instant;

/// Everything the segmentation and quantization stages hand over for one
/// image.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrandObservation {
    pub width: u32,
    pub height: u32,
    /// Number of palette colors; every bead color index is below it.
    pub palette_size: usize,
    pub regions: Vec<Region>,
    pub beads: Vec<BeadRecord>,
    pub graph: RegionGraph,
}

impl StrandObservation {
    pub fn image_area(&self) -> f32 {
        self.width as f32 * self.height as f32
    }

    fn centroids(&self) -> HashMap<Label, [f32; 2]> {
        self.regions.iter().map(|r| (r.label, r.centroid)).collect()
    }

    fn mean_certainty(&self) -> Option<f32> {
        if self.beads.is_empty() {
            return None;
        }
        let sum: f32 = self.beads.iter().map(|b| b.certainty).sum();
        Some(sum / self.beads.len() as f32)
    }
}

/// Outcome of one recovery run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryReport {
    /// Periods of the color sequence ordered by region label.
    pub label_order: PeriodAnalysis,
    /// Periods of the color sequence ordered along the bead path; `None` when
    /// the path crosses no bead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_order: Option<PeriodAnalysis>,
    pub bead_path: BeadPath,
    pub edge_deltas: EdgeDeltas,
    pub trace: RecoveryTrace,
}

impl RecoveryReport {
    /// Minimal period of the path-ordered sequence when available, otherwise
    /// of the label-ordered one.
    pub fn best_period(&self) -> Option<usize> {
        self.path_order
            .as_ref()
            .and_then(|a| a.minimal_period)
            .or(self.label_order.minimal_period)
    }
}

/// Runs period analysis and graph-based ordering on strand observations.
#[derive(Clone, Debug)]
pub struct PatternRecoverer {
    params: RecoveryParams,
}

impl PatternRecoverer {
    pub fn new(params: RecoveryParams) -> Self {
        Self { params }
    }

    /// Processes one observation. Any stage failure aborts the run.
    pub fn process(&self, obs: &StrandObservation) -> Result<RecoveryReport> {
        self.params.validate()?;
        debug!(
            "PatternRecoverer::process start {}x{} regions={} beads={} nodes={} edges={}",
            obs.width,
            obs.height,
            obs.regions.len(),
            obs.beads.len(),
            obs.graph.node_count(),
            obs.graph.edge_count()
        );
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let bead_labels: HashSet<Label> = obs.beads.iter().map(|b| b.label).collect();
        let partition = timings.time("partition", || {
            RegionPartition::from_regions(
                &obs.regions,
                &bead_labels,
                obs.image_area(),
                self.params.background_fraction,
            )
        });

        // Only records whose region survived partitioning as a bead.
        let bead_records: Vec<BeadRecord> = obs
            .beads
            .iter()
            .filter(|b| partition.beads.contains(&b.label))
            .cloned()
            .collect();
        let label_order = timings.time("labelPeriod", || {
            ColorSequence::by_label(&bead_records, obs.palette_size).map(PeriodAnalysis::analyze)
        })?;

        let anchors = timings.time("anchors", || {
            find_background_anchors(
                &obs.regions,
                (obs.width, obs.height),
                self.params.background_fraction,
            )
        })?;

        let (route, bead_order) = timings.time("beadPath", || {
            shortest_bead_path(&obs.graph, &anchors, &partition.beads)
        })?;

        let keep_background: BTreeSet<Label> = [anchors.outer, anchors.inner].into_iter().collect();
        let pruned = timings.time("prune", || {
            prune_filler(&obs.graph, &partition.beads, &keep_background)
        });
        let pruning = PruneStage::compare(&obs.graph, &pruned);

        // Edges to the anchors are not lattice steps.
        let mut lattice = pruned.clone();
        lattice.remove_node(anchors.outer);
        lattice.remove_node(anchors.inner);

        let centroids = obs.centroids();
        let edge_deltas = timings.time("edgeDeltas", || {
            classify_edge_deltas(
                &lattice,
                &centroids,
                self.params.beads_per_row,
                &self.params.clustering,
            )
        })?;

        let path_order = if bead_order.is_empty() {
            warn!(
                "bead path between anchors {} and {} crosses no bead",
                anchors.outer, anchors.inner
            );
            None
        } else {
            let seq = timings.time("pathPeriod", || {
                ColorSequence::by_path(&bead_order, &obs.beads, obs.palette_size)
            })?;
            Some(PeriodAnalysis::analyze(seq))
        };

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "PatternRecoverer::process done: label period={:?} path period={:?} path beads={} total_ms={:.3}",
            label_order.minimal_period,
            path_order.as_ref().and_then(|a| a.minimal_period),
            bead_order.len(),
            timings.total_ms
        );

        Ok(RecoveryReport {
            label_order,
            path_order,
            bead_path: BeadPath {
                anchors,
                route,
                beads: bead_order,
            },
            edge_deltas,
            trace: RecoveryTrace {
                input: InputDescriptor {
                    width: obs.width,
                    height: obs.height,
                    palette_size: obs.palette_size,
                    regions: obs.regions.len(),
                    beads: obs.beads.len(),
                    graph_nodes: obs.graph.node_count(),
                    graph_edges: obs.graph.edge_count(),
                    mean_certainty: obs.mean_certainty(),
                },
                timings,
                partition: PartitionStage::from(&partition),
                pruning,
            },
        })
    }

    /// Processes independent observations in parallel. Results keep the input
    /// order.
    pub fn process_batch(&self, observations: &[StrandObservation]) -> Vec<Result<RecoveryReport>> {
        observations.par_iter().map(|obs| self.process(obs)).collect()
    }
}
