use crate::error::{RecoveryError, Result};
use crate::types::{BeadRecord, Label};
use serde::Serialize;
use std::collections::HashMap;
use std::ops::Deref;

/// Ordered color indices, one per bead, validated against a palette size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorSequence(Vec<usize>);

impl ColorSequence {
    /// Validates that the sequence is non-empty and every index is below
    /// `n_colors`.
    pub fn new(indices: Vec<usize>, n_colors: usize) -> Result<Self> {
        if indices.is_empty() {
            return Err(RecoveryError::EmptySequence);
        }
        if let Some((index, &color)) = indices.iter().enumerate().find(|&(_, &c)| c >= n_colors) {
            return Err(RecoveryError::ColorOutOfRange {
                index,
                color,
                n_colors,
            });
        }
        Ok(Self(indices))
    }

    /// Sequence ordered by region label, ascending.
    pub fn by_label(beads: &[BeadRecord], n_colors: usize) -> Result<Self> {
        let mut sorted: Vec<&BeadRecord> = beads.iter().collect();
        sorted.sort_by_key(|b| b.label);
        Self::new(sorted.iter().map(|b| b.color_index).collect(), n_colors)
    }

    /// Sequence ordered by position along a recovered bead path. Labels in the
    /// path without a bead record are skipped.
    pub fn by_path(path: &[Label], beads: &[BeadRecord], n_colors: usize) -> Result<Self> {
        let colors: HashMap<Label, usize> =
            beads.iter().map(|b| (b.label, b.color_index)).collect();
        let indices = path
            .iter()
            .filter_map(|label| colors.get(label).copied())
            .collect();
        Self::new(indices, n_colors)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl Deref for ColorSequence {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}
