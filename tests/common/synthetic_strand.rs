use bead_pattern::graph::RegionGraph;
use bead_pattern::{BeadRecord, Label, Region, StrandObservation};

pub const OUTER: Label = 1;
pub const INNER: Label = 99;
pub const ROW_A: Label = 10;
pub const ROW_B: Label = 30;
pub const RING_STEP: f32 = 10.0;

/// Filler regions: one splits a ring edge of the second row, two form a chain
/// splitting another, and one hangs off the first row.
pub const FILLER_SPLIT: Label = 60;
pub const FILLER_CHAIN: [Label; 2] = [61, 62];
pub const FILLER_DANGLING: Label = 63;

/// Two parallel rows of beads between an outer and an inner background region.
///
/// Row A sits at `y = 50` with beads every `RING_STEP` px starting at
/// `x = 10`; row B is offset by `(2, 4)`. Bead `A[i]` touches `B[i]` (short
/// diagonal, `(2, 4)`) and `B[i - 1]` (long diagonal, `(-8, 4)`). The outer
/// region sits one ring step before `A[0]`, the inner region one ring step
/// after the last bead of row A, at the image centre.
///
/// By default each background region touches a single bead. With
/// [`with_row_contact`](Self::with_row_contact) the outer region touches every
/// bead of row A and the inner region every bead of row B, as a real
/// background does.
pub struct SyntheticStrand {
    pub beads_per_row: usize,
    /// Color of bead `i` in each row is `pattern[i % pattern.len()]`.
    pub pattern: Vec<usize>,
    pub palette_size: usize,
    pub row_contact: bool,
}

impl SyntheticStrand {
    pub fn new(beads_per_row: usize, pattern: Vec<usize>, palette_size: usize) -> Self {
        assert!(
            (5..=20).contains(&beads_per_row),
            "bead labels per row must stay within their label block"
        );
        assert!(!pattern.is_empty(), "pattern must not be empty");
        Self {
            beads_per_row,
            pattern,
            palette_size,
            row_contact: false,
        }
    }

    pub fn with_row_contact(mut self) -> Self {
        self.row_contact = true;
        self
    }

    pub fn row_a(&self) -> Vec<Label> {
        (0..self.beads_per_row as Label).map(|i| ROW_A + i).collect()
    }

    pub fn row_b(&self) -> Vec<Label> {
        (0..self.beads_per_row as Label).map(|i| ROW_B + i).collect()
    }

    pub fn width(&self) -> u32 {
        // Inner anchor at the centre: x = RING_STEP * (n + 1) = width / 2.
        (2.0 * RING_STEP * (self.beads_per_row as f32 + 1.0)) as u32
    }

    pub fn height(&self) -> u32 {
        100
    }

    pub fn build(&self) -> StrandObservation {
        let n = self.beads_per_row as Label;
        let a_pos = |i: Label| [RING_STEP * (i as f32 + 1.0), 50.0];
        let b_pos = |i: Label| [RING_STEP * (i as f32 + 1.0) + 2.0, 54.0];

        let mut regions = vec![
            Region::new(OUTER, 20_000, [0.0, 50.0]),
            Region::new(INNER, 6_000, [RING_STEP * (n as f32 + 1.0), 50.0]),
        ];
        let mut beads = Vec::new();
        for i in 0..n {
            let color = self.pattern[i as usize % self.pattern.len()];
            regions.push(Region::new(ROW_A + i, 60, a_pos(i)));
            regions.push(Region::new(ROW_B + i, 60, b_pos(i)));
            beads.push(BeadRecord::new(ROW_A + i, color, 0.95));
            beads.push(BeadRecord::new(ROW_B + i, color, 0.85));
        }
        for (k, label) in [FILLER_SPLIT, FILLER_CHAIN[0], FILLER_CHAIN[1], FILLER_DANGLING]
            .into_iter()
            .enumerate()
        {
            regions.push(Region::new(label, 20, [15.0 + 20.0 * k as f32, 60.0]));
        }

        let split_at = 1;
        let chain_at = n - 3;
        let mut edges: Vec<(Label, Label, f32)> = Vec::new();
        for i in 0..n - 1 {
            edges.push((ROW_A + i, ROW_A + i + 1, 12.0));
            if i == split_at {
                edges.push((ROW_B + i, FILLER_SPLIT, 30.0));
                edges.push((FILLER_SPLIT, ROW_B + i + 1, 25.0));
            } else if i == chain_at {
                edges.push((ROW_B + i, FILLER_CHAIN[0], 18.0));
                edges.push((FILLER_CHAIN[0], FILLER_CHAIN[1], 5.0));
                edges.push((FILLER_CHAIN[1], ROW_B + i + 1, 22.0));
            } else {
                edges.push((ROW_B + i, ROW_B + i + 1, 12.0));
            }
        }
        for i in 0..n {
            edges.push((ROW_A + i, ROW_B + i, 15.0));
            if i > 0 {
                edges.push((ROW_A + i, ROW_B + i - 1, 16.0));
            }
        }
        edges.push((ROW_A + 1, FILLER_DANGLING, 40.0));
        if self.row_contact {
            for i in 0..n {
                edges.push((OUTER, ROW_A + i, 80.0));
                edges.push((ROW_B + i, INNER, 75.0));
            }
        } else {
            edges.push((OUTER, ROW_A, 80.0));
            edges.push((ROW_A + n - 1, INNER, 75.0));
        }

        StrandObservation {
            width: self.width(),
            height: self.height(),
            palette_size: self.palette_size,
            regions,
            beads,
            graph: RegionGraph::from_edges(edges),
        }
    }
}
