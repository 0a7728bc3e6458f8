use crate::types::{Label, Region};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// Role of a region in the adjacency graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RegionClass {
    Bead,
    Background,
    Filler,
}

/// Disjoint split of region labels into beads, backgrounds and fillers.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPartition {
    pub beads: BTreeSet<Label>,
    pub background: BTreeSet<Label>,
    pub filler: BTreeSet<Label>,
    /// Area above which a region counts as background, in pixels.
    pub background_threshold: f32,
}

impl RegionPartition {
    /// Classifies every region. Regions larger than
    /// `background_fraction * image_area` are background, even if a bead
    /// record names them; remaining regions named in `bead_labels` are beads;
    /// everything else is filler.
    pub fn from_regions(
        regions: &[Region],
        bead_labels: &HashSet<Label>,
        image_area: f32,
        background_fraction: f32,
    ) -> Self {
        let background_threshold = background_fraction * image_area;
        let mut partition = Self {
            background_threshold,
            ..Self::default()
        };
        for region in regions {
            match classify(region, bead_labels, background_threshold) {
                RegionClass::Background => partition.background.insert(region.label),
                RegionClass::Bead => partition.beads.insert(region.label),
                RegionClass::Filler => partition.filler.insert(region.label),
            };
        }
        partition
    }

    pub fn class_of(&self, label: Label) -> Option<RegionClass> {
        if self.beads.contains(&label) {
            Some(RegionClass::Bead)
        } else if self.background.contains(&label) {
            Some(RegionClass::Background)
        } else if self.filler.contains(&label) {
            Some(RegionClass::Filler)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.beads.len() + self.background.len() + self.filler.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn classify(region: &Region, bead_labels: &HashSet<Label>, threshold: f32) -> RegionClass {
    if region.area as f32 > threshold {
        RegionClass::Background
    } else if bead_labels.contains(&region.label) {
        RegionClass::Bead
    } else {
        RegionClass::Filler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_lands_in_exactly_one_class() {
        let regions = vec![
            Region::new(0, 5000, [50.0, 50.0]),
            Region::new(1, 40, [10.0, 10.0]),
            Region::new(2, 35, [20.0, 10.0]),
            Region::new(3, 6, [15.0, 10.0]),
        ];
        let beads: HashSet<Label> = [1, 2].into_iter().collect();
        let p = RegionPartition::from_regions(&regions, &beads, 100.0 * 100.0, 0.2);

        assert_eq!(p.len(), regions.len());
        assert_eq!(p.class_of(0), Some(RegionClass::Background));
        assert_eq!(p.class_of(1), Some(RegionClass::Bead));
        assert_eq!(p.class_of(3), Some(RegionClass::Filler));
        assert_eq!(p.class_of(42), None);
        assert!((p.background_threshold - 2000.0).abs() < 1e-3);
    }

    #[test]
    fn large_bead_record_counts_as_background() {
        let regions = vec![Region::new(7, 900, [0.0, 0.0])];
        let beads: HashSet<Label> = [7].into_iter().collect();
        let p = RegionPartition::from_regions(&regions, &beads, 1000.0, 0.5);
        assert!(p.beads.is_empty());
        assert!(p.background.contains(&7));
    }
}
