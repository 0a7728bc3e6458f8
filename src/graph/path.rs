//! Bead ordering from the adjacency graph.
//!
//! A strand lies between two large background regions: the area outside it
//! and the area it encloses. The region farthest from the image centre is
//! taken as the outer anchor and the nearest one as the inner anchor; the
//! beads crossed by a shortest path between them give the visiting order.

use super::RegionGraph;
use crate::error::{RecoveryError, Result};
use crate::types::{Label, Region};
use log::{debug, warn};
use petgraph::algo::astar;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// The two background regions used as path endpoints.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundAnchors {
    pub outer: Label,
    pub inner: Label,
    /// Every region above the background area threshold, in input order.
    pub candidates: Vec<Label>,
    /// Area threshold in pixels.
    pub threshold: f32,
}

/// Ordered beads between the two anchors.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeadPath {
    pub anchors: BackgroundAnchors,
    /// Full shortest path, anchors and filler regions included.
    pub route: Vec<Label>,
    /// Bead labels in visiting order.
    pub beads: Vec<Label>,
}

/// Picks the outer and inner background anchors.
///
/// Regions with `area > background_fraction * width * height` are
/// candidates. With more than two candidates only the farthest from and the
/// nearest to the image centre are used.
pub fn find_background_anchors(
    regions: &[Region],
    image_size: (u32, u32),
    background_fraction: f32,
) -> Result<BackgroundAnchors> {
    let (width, height) = image_size;
    let threshold = background_fraction * width as f32 * height as f32;
    let centre = [width as f32 * 0.5, height as f32 * 0.5];

    let candidates: Vec<(&Region, f32)> = regions
        .iter()
        .filter(|r| r.area as f32 > threshold)
        .map(|r| (r, r.distance_to(centre)))
        .collect();
    if candidates.len() < 2 {
        return Err(RecoveryError::InsufficientBackground {
            found: candidates.len(),
            threshold,
        });
    }
    if candidates.len() > 2 {
        warn!(
            "found {} background candidates above {:.1} px, using the two extremal ones",
            candidates.len(),
            threshold
        );
    }

    let by_distance = |a: &&(&Region, f32), b: &&(&Region, f32)| {
        a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal)
    };
    let outer_idx = candidates
        .iter()
        .enumerate()
        .max_by(|a, b| by_distance(&a.1, &b.1).then(b.0.cmp(&a.0)))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let inner_idx = candidates
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != outer_idx)
        .min_by(|a, b| by_distance(&a.1, &b.1).then(a.0.cmp(&b.0)))
        .map(|(i, _)| i)
        .unwrap_or(0);

    let anchors = BackgroundAnchors {
        outer: candidates[outer_idx].0.label,
        inner: candidates[inner_idx].0.label,
        candidates: candidates.iter().map(|(r, _)| r.label).collect(),
        threshold,
    };
    debug!(
        "background anchors: outer={} (d={:.1}) inner={} (d={:.1})",
        anchors.outer, candidates[outer_idx].1, anchors.inner, candidates[inner_idx].1
    );
    Ok(anchors)
}

/// Unweighted shortest path between the anchors, reduced to bead labels.
pub fn shortest_bead_path(
    graph: &RegionGraph,
    anchors: &BackgroundAnchors,
    beads: &BTreeSet<Label>,
) -> Result<(Vec<Label>, Vec<Label>)> {
    for anchor in [anchors.outer, anchors.inner] {
        if !graph.contains_node(anchor) {
            return Err(RecoveryError::UnknownAnchor(anchor));
        }
    }
    let (_, route) = astar(
        graph.as_graphmap(),
        anchors.outer,
        |n| n == anchors.inner,
        |_| 1usize,
        |_| 0usize,
    )
    .ok_or(RecoveryError::Disconnected {
        from: anchors.outer,
        to: anchors.inner,
    })?;
    let bead_order: Vec<Label> = route.iter().copied().filter(|l| beads.contains(l)).collect();
    debug!(
        "bead path: {} hop(s), {} bead(s)",
        route.len().saturating_sub(1),
        bead_order.len()
    );
    Ok((route, bead_order))
}

/// Anchors on the background regions of the unpruned graph and returns the
/// beads along a shortest path between them.
pub fn recover_bead_path(
    graph: &RegionGraph,
    regions: &[Region],
    beads: &BTreeSet<Label>,
    image_size: (u32, u32),
    background_fraction: f32,
) -> Result<BeadPath> {
    let anchors = find_background_anchors(regions, image_size, background_fraction)?;
    let (route, bead_order) = shortest_bead_path(graph, &anchors, beads)?;
    Ok(BeadPath {
        anchors,
        route,
        beads: bead_order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTER: Label = 100;
    const INNER: Label = 200;

    fn regions() -> Vec<Region> {
        vec![
            Region::new(OUTER, 6000, [5.0, 5.0]),
            Region::new(1, 50, [30.0, 50.0]),
            Region::new(2, 50, [40.0, 50.0]),
            Region::new(3, 50, [45.0, 50.0]),
            Region::new(INNER, 3000, [50.0, 50.0]),
        ]
    }

    fn beads() -> BTreeSet<Label> {
        [1, 2, 3].into_iter().collect()
    }

    #[test]
    fn path_graph_yields_beads_in_order() {
        let g = RegionGraph::from_edges([(OUTER, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, INNER, 1.0)]);
        let path = recover_bead_path(&g, &regions(), &beads(), (100, 100), 0.2).unwrap();
        assert_eq!(path.anchors.outer, OUTER);
        assert_eq!(path.anchors.inner, INNER);
        assert_eq!(path.beads, vec![1, 2, 3]);
        assert_eq!(path.route, vec![OUTER, 1, 2, 3, INNER]);
    }

    #[test]
    fn filler_on_the_route_is_dropped() {
        let g = RegionGraph::from_edges([(OUTER, 1, 1.0), (1, 9, 1.0), (9, 3, 1.0), (3, INNER, 1.0)]);
        let path = recover_bead_path(&g, &regions(), &beads(), (100, 100), 0.2).unwrap();
        assert_eq!(path.beads, vec![1, 3]);
    }

    #[test]
    fn one_background_region_is_an_error() {
        let mut rs = regions();
        rs.retain(|r| r.label != INNER);
        let err = find_background_anchors(&rs, (100, 100), 0.2).unwrap_err();
        assert_eq!(
            err,
            RecoveryError::InsufficientBackground {
                found: 1,
                threshold: 2000.0
            }
        );
    }

    #[test]
    fn extra_candidates_use_extremal_distances() {
        let mut rs = regions();
        rs.push(Region::new(300, 2500, [20.0, 40.0]));
        let anchors = find_background_anchors(&rs, (100, 100), 0.2).unwrap();
        assert_eq!(anchors.outer, OUTER);
        assert_eq!(anchors.inner, INNER);
        assert_eq!(anchors.candidates, vec![OUTER, INNER, 300]);
    }

    #[test]
    fn disconnected_anchors_are_reported() {
        let g = RegionGraph::from_edges([(OUTER, 1, 1.0), (2, INNER, 1.0)]);
        let err = recover_bead_path(&g, &regions(), &beads(), (100, 100), 0.2).unwrap_err();
        assert_eq!(
            err,
            RecoveryError::Disconnected {
                from: OUTER,
                to: INNER
            }
        );
    }

    #[test]
    fn anchor_outside_graph_is_reported() {
        let g = RegionGraph::from_edges([(OUTER, 1, 1.0)]);
        let err = recover_bead_path(&g, &regions(), &beads(), (100, 100), 0.2).unwrap_err();
        assert_eq!(err, RecoveryError::UnknownAnchor(INNER));
    }
}
