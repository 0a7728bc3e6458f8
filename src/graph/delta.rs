//! Edge classification by centroid spacing.
//!
//! In the bead lattice each node touches its ring neighbours and two kinds of
//! diagonal neighbours in the adjacent rows. The three adjacency kinds have
//! distinct centre-to-centre spacings, with ring steps the longest. Edge
//! lengths are therefore clustered into three classes and each class is mapped
//! to a step in bead-index space:
//!
//! | class          | length rank | |delta|               |
//! |----------------|-------------|-----------------------|
//! | short diagonal | smallest    | `beads_per_row - 0.5` |
//! | long diagonal  | middle      | `beads_per_row + 0.5` |
//! | ring           | largest     | `1`                   |
//!
//! The sign of each delta follows the projection of the edge onto the mean
//! ring direction. The rank-to-class mapping assumes this particular packing
//! and must be revisited for other lattice geometries.

use super::cluster1d::{kmeans_1d, ClusterOptions};
use super::RegionGraph;
use crate::error::{RecoveryError, Result};
use crate::types::Label;
use log::debug;
use nalgebra::Vector2;
use serde::Serialize;
use std::collections::HashMap;

const EPS: f32 = 1e-6;

/// Adjacency kind inferred from the edge length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeClass {
    ShortDiagonal,
    LongDiagonal,
    Ring,
}

impl EdgeClass {
    /// Class for a cluster rank (0 = shortest edges).
    fn from_rank(rank: usize) -> Self {
        match rank {
            0 => EdgeClass::ShortDiagonal,
            1 => EdgeClass::LongDiagonal,
            _ => EdgeClass::Ring,
        }
    }

    /// Unsigned step in bead-index space.
    pub fn magnitude(self, beads_per_row: f32) -> f32 {
        match self {
            EdgeClass::ShortDiagonal => beads_per_row - 0.5,
            EdgeClass::LongDiagonal => beads_per_row + 0.5,
            EdgeClass::Ring => 1.0,
        }
    }
}

/// One classified edge in stored orientation `a -> b`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEdge {
    pub a: Label,
    pub b: Label,
    pub length: f32,
    pub class: EdgeClass,
    /// Signed step from `a` to `b`; the reverse step is its negation.
    pub delta: f32,
}

/// Signed index deltas for every edge of a pruned graph.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDeltas {
    pub edges: Vec<ClassifiedEdge>,
    /// Mean unit direction of ring edges in image coordinates.
    pub ring_axis: [f32; 2],
    /// Length cluster centres, ascending.
    pub cluster_centers: Vec<f32>,
    #[serde(skip)]
    lookup: HashMap<(Label, Label), f32>,
}

impl EdgeDeltas {
    /// Signed step for the directed edge `u -> v`.
    pub fn delta(&self, u: Label, v: Label) -> Option<f32> {
        self.lookup.get(&(u, v)).copied()
    }

    /// All directed deltas, both orientations of every edge.
    pub fn directed(&self) -> &HashMap<(Label, Label), f32> {
        &self.lookup
    }

    pub fn count(&self, class: EdgeClass) -> usize {
        self.edges.iter().filter(|e| e.class == class).count()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Classifies the edges of `graph` and assigns antisymmetric index deltas.
///
/// Every edge endpoint must have a centroid. At least three edges with three
/// distinct lengths are required for the three-way split.
pub fn classify_edge_deltas(
    graph: &RegionGraph,
    centroids: &HashMap<Label, [f32; 2]>,
    beads_per_row: f32,
    options: &ClusterOptions,
) -> Result<EdgeDeltas> {
    if !beads_per_row.is_finite() || beads_per_row <= 0.5 {
        return Err(RecoveryError::InvalidParameter {
            name: "beads_per_row",
            value: beads_per_row,
        });
    }

    let centroid = |label: Label| -> Result<Vector2<f32>> {
        centroids
            .get(&label)
            .map(|c| Vector2::new(c[0], c[1]))
            .ok_or(RecoveryError::MissingCentroid(label))
    };

    let mut offsets: Vec<(Label, Label, Vector2<f32>)> = Vec::with_capacity(graph.edge_count());
    for (a, b, _) in graph.edges() {
        offsets.push((a, b, centroid(b)? - centroid(a)?));
    }
    let lengths: Vec<f32> = offsets.iter().map(|(_, _, d)| d.norm()).collect();

    let clustering = kmeans_1d(&lengths, 3, options)?;
    let classes: Vec<EdgeClass> = clustering
        .assignments
        .iter()
        .map(|&rank| EdgeClass::from_rank(rank))
        .collect();

    let mut axis_sum = Vector2::<f32>::zeros();
    let mut ring_edges = 0usize;
    for ((_, _, d), class) in offsets.iter().zip(&classes) {
        if *class != EdgeClass::Ring {
            continue;
        }
        let n = d.norm();
        if n > EPS {
            axis_sum += d / n;
            ring_edges += 1;
        }
    }
    let axis_norm = axis_sum.norm();
    if ring_edges == 0 || axis_norm <= EPS * ring_edges as f32 {
        return Err(RecoveryError::DegenerateRingAxis { ring_edges });
    }
    let ring_axis = axis_sum / axis_norm;

    let mut edges = Vec::with_capacity(offsets.len());
    let mut lookup = HashMap::with_capacity(offsets.len() * 2);
    for (((a, b, d), class), length) in offsets.into_iter().zip(classes).zip(lengths) {
        let sign = if d.dot(&ring_axis) < 0.0 { -1.0 } else { 1.0 };
        let delta = sign * class.magnitude(beads_per_row);
        lookup.insert((a, b), delta);
        lookup.insert((b, a), -delta);
        edges.push(ClassifiedEdge {
            a,
            b,
            length,
            class,
            delta,
        });
    }

    debug!(
        "edge deltas: {} edge(s), centres={:?}, sizes={:?}, ring axis=({:.3}, {:.3}), iterations={}",
        edges.len(),
        clustering.centers,
        clustering.sizes,
        ring_axis.x,
        ring_axis.y,
        clustering.iterations
    );

    Ok(EdgeDeltas {
        edges,
        ring_axis: [ring_axis.x, ring_axis.y],
        cluster_centers: clustering.centers,
        lookup,
    })
}
