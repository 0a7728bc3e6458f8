use super::{RegionEdge, RegionGraph};
use crate::types::Label;
use log::debug;
use std::collections::BTreeSet;

/// Removes every node that is neither a bead nor a background region.
///
/// Before a filler node is removed, all pairs of its current neighbours are
/// joined directly, so a chain `A - F1 - F2 - B` collapses to `A - B`. The
/// filler list is snapshotted up front and the input graph is left untouched.
/// Spliced edges carry the larger color distance of the two hops they replace
/// and never overwrite an existing edge. Kept labels missing from the input
/// are added as isolated nodes.
pub fn prune_filler(
    graph: &RegionGraph,
    beads: &BTreeSet<Label>,
    background: &BTreeSet<Label>,
) -> RegionGraph {
    let keep = |label: &Label| beads.contains(label) || background.contains(label);

    let mut work = graph.clone();
    let fillers: Vec<Label> = graph.nodes().filter(|l| !keep(l)).collect();
    let mut spliced = 0usize;

    for filler in &fillers {
        let hops: Vec<(Label, f32)> = work
            .neighbors(*filler)
            .filter_map(|n| work.edge(*filler, n).map(|e| (n, e.color_distance)))
            .collect();
        for (i, &(a, wa)) in hops.iter().enumerate() {
            for &(b, wb) in &hops[i + 1..] {
                let edge = RegionEdge {
                    color_distance: wa.max(wb),
                    spliced: true,
                };
                if work.add_edge(a, b, edge) {
                    spliced += 1;
                }
            }
        }
        work.remove_node(*filler);
    }

    for &label in beads.iter().chain(background.iter()) {
        work.add_node(label);
    }

    debug!(
        "prune: removed {} filler node(s), spliced {} edge(s), kept {} node(s) / {} edge(s)",
        fillers.len(),
        spliced,
        work.node_count(),
        work.edge_count()
    );
    work
}
