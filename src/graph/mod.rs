//! Region adjacency graph and the graph-based ordering pipeline.
//!
//! - [`partition`]: split regions into bead, background and filler classes.
//! - [`prune`]: splice filler nodes out while preserving adjacency.
//! - [`cluster1d`]: seeded 1D k-means used to group edge lengths.
//! - [`delta`]: classify edges by length and assign signed index deltas.
//! - [`path`]: anchor on the background regions and walk the bead path.

pub mod cluster1d;
pub mod delta;
pub mod partition;
pub mod path;
pub mod prune;

pub use cluster1d::{kmeans_1d, ClusterOptions, Clustering1d};
pub use delta::{classify_edge_deltas, EdgeClass, EdgeDeltas};
pub use partition::{RegionClass, RegionPartition};
pub use path::{
    find_background_anchors, recover_bead_path, shortest_bead_path, BackgroundAnchors, BeadPath,
};
pub use prune::prune_filler;

use crate::types::Label;
use petgraph::graphmap::UnGraphMap;
use serde::{Deserialize, Serialize};

/// Edge payload of a [`RegionGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionEdge {
    /// Color distance between the two regions, as computed upstream.
    pub color_distance: f32,
    /// Set on edges introduced by splicing out a filler region.
    #[serde(default)]
    pub spliced: bool,
}

impl RegionEdge {
    pub fn new(color_distance: f32) -> Self {
        Self {
            color_distance,
            spliced: false,
        }
    }
}

/// Serialized edge entry, `{ "a": 1, "b": 2, "colorDistance": 4.5 }`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeEntry {
    pub a: Label,
    pub b: Label,
    #[serde(default)]
    pub color_distance: f32,
    #[serde(default)]
    pub spliced: bool,
}

/// Undirected simple graph over region labels.
///
/// Node and edge iteration follow insertion order, which keeps every stage
/// deterministic for a given input.
#[derive(Clone, Debug, Default)]
pub struct RegionGraph {
    inner: UnGraphMap<Label, RegionEdge>,
}

impl RegionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from `(a, b, color_distance)` triples. Self-loops are
    /// dropped; a repeated pair keeps its first weight.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Label, Label, f32)>,
    {
        let mut graph = Self::new();
        for (a, b, w) in edges {
            graph.add_edge(a, b, RegionEdge::new(w));
        }
        graph
    }

    pub fn add_node(&mut self, label: Label) {
        self.inner.add_node(label);
    }

    /// Inserts `a - b` unless it is a self-loop or already present. Returns
    /// whether the edge was added.
    pub fn add_edge(&mut self, a: Label, b: Label, edge: RegionEdge) -> bool {
        if a == b || self.inner.contains_edge(a, b) {
            self.inner.add_node(a);
            self.inner.add_node(b);
            return false;
        }
        self.inner.add_edge(a, b, edge);
        true
    }

    pub fn remove_node(&mut self, label: Label) -> bool {
        self.inner.remove_node(label)
    }

    pub fn contains_node(&self, label: Label) -> bool {
        self.inner.contains_node(label)
    }

    pub fn contains_edge(&self, a: Label, b: Label) -> bool {
        self.inner.contains_edge(a, b)
    }

    pub fn edge(&self, a: Label, b: Label) -> Option<&RegionEdge> {
        self.inner.edge_weight(a, b)
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.node_count() == 0
    }

    pub fn nodes(&self) -> impl Iterator<Item = Label> + '_ {
        self.inner.nodes()
    }

    pub fn neighbors(&self, label: Label) -> impl Iterator<Item = Label> + '_ {
        self.inner.neighbors(label)
    }

    /// Edges in stored orientation (lower label first), each pair reported
    /// once.
    pub fn edges(&self) -> impl Iterator<Item = (Label, Label, &RegionEdge)> + '_ {
        self.inner.all_edges()
    }

    pub fn to_entries(&self) -> Vec<EdgeEntry> {
        self.edges()
            .map(|(a, b, e)| EdgeEntry {
                a,
                b,
                color_distance: e.color_distance,
                spliced: e.spliced,
            })
            .collect()
    }

    pub(crate) fn as_graphmap(&self) -> &UnGraphMap<Label, RegionEdge> {
        &self.inner
    }
}

/// Serialized form: `{ "nodes": [...], "edges": [...] }`. Nodes without edges
/// must be listed explicitly; edge endpoints are added implicitly.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegionGraphData {
    #[serde(default)]
    pub nodes: Vec<Label>,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

impl From<RegionGraphData> for RegionGraph {
    fn from(data: RegionGraphData) -> Self {
        let mut graph = RegionGraph::new();
        for label in data.nodes {
            graph.add_node(label);
        }
        for entry in data.edges {
            graph.add_edge(
                entry.a,
                entry.b,
                RegionEdge {
                    color_distance: entry.color_distance,
                    spliced: entry.spliced,
                },
            );
        }
        graph
    }
}

impl From<&RegionGraph> for RegionGraphData {
    fn from(graph: &RegionGraph) -> Self {
        Self {
            nodes: graph.nodes().collect(),
            edges: graph.to_entries(),
        }
    }
}

impl Serialize for RegionGraph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RegionGraphData::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RegionGraph {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RegionGraphData::deserialize(deserializer).map(RegionGraph::from)
    }
}
