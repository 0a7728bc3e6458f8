use serde::{Deserialize, Serialize};

/// Stable integer label assigned to a region by the segmentation stage.
pub type Label = u32;

/// Labeled image region handed over by the segmentation stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub label: Label,
    /// Pixel count.
    pub area: u32,
    /// Centroid in image coordinates, `[x, y]`.
    pub centroid: [f32; 2],
    /// Bounding box `[min_x, min_y, max_x, max_y]`.
    #[serde(default)]
    pub bbox: [u32; 4],
}

impl Region {
    pub fn new(label: Label, area: u32, centroid: [f32; 2]) -> Self {
        Self {
            label,
            area,
            centroid,
            bbox: [0; 4],
        }
    }

    /// Euclidean distance from the centroid to `point`.
    pub fn distance_to(&self, point: [f32; 2]) -> f32 {
        let dx = self.centroid[0] - point[0];
        let dy = self.centroid[1] - point[1];
        (dx * dx + dy * dy).sqrt()
    }
}

/// Color assignment for a single bead region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeadRecord {
    pub label: Label,
    pub color_index: usize,
    /// Confidence in `[0, 1]` that the region is a whole bead.
    pub certainty: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<u32>,
}

impl BeadRecord {
    pub fn new(label: Label, color_index: usize, certainty: f32) -> Self {
        Self {
            label,
            color_index,
            certainty: certainty.clamp(0.0, 1.0),
            area: None,
        }
    }

    /// Builds a record whose certainty is the observed-to-expected area ratio,
    /// clamped to 1. Regions much smaller than a bead score low.
    pub fn from_area(label: Label, color_index: usize, area: u32, expected_area: f32) -> Self {
        let certainty = if expected_area > 0.0 {
            (area as f32 / expected_area).min(1.0)
        } else {
            0.0
        };
        Self {
            label,
            color_index,
            certainty,
            area: Some(area),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certainty_is_area_ratio_clamped_to_one() {
        let small = BeadRecord::from_area(3, 1, 250, 500.0);
        assert!((small.certainty - 0.5).abs() < 1e-6);
        assert_eq!(small.area, Some(250));

        let large = BeadRecord::from_area(4, 0, 900, 500.0);
        assert_eq!(large.certainty, 1.0);
    }

    #[test]
    fn certainty_is_zero_without_expected_area() {
        let rec = BeadRecord::from_area(1, 0, 100, 0.0);
        assert_eq!(rec.certainty, 0.0);
    }

    #[test]
    fn region_distance_is_euclidean() {
        let r = Region::new(7, 10, [3.0, 4.0]);
        assert!((r.distance_to([0.0, 0.0]) - 5.0).abs() < 1e-6);
    }
}
