//! Seeded k-means over scalar observations.
//!
//! Used to split edge lengths into a fixed number of classes. Initial centres
//! are drawn k-means++ style from a seeded generator so that identical input
//! always yields identical clusters.

use crate::error::{RecoveryError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Reproducibility knobs for the clustering step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterOptions {
    /// Seed for the k-means++ initialisation.
    pub seed: u64,
    /// Upper bound on Lloyd iterations (at least one assignment pass runs).
    pub max_iterations: usize,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            seed: 0,
            max_iterations: 100,
        }
    }
}

/// Result of [`kmeans_1d`]. Clusters are ranked by centre, ascending.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Clustering1d {
    pub centers: Vec<f32>,
    /// Rank of the cluster each input value belongs to.
    pub assignments: Vec<usize>,
    pub sizes: Vec<usize>,
    pub iterations: usize,
}

/// Partitions `values` into exactly `k` non-empty clusters.
///
/// Fails when there are fewer than `k` values or fewer than `k` distinct
/// values, or when a cluster empties out during refinement.
pub fn kmeans_1d(values: &[f32], k: usize, options: &ClusterOptions) -> Result<Clustering1d> {
    let distinct = count_distinct(values);
    if k == 0 || values.len() < k || distinct < k {
        return Err(RecoveryError::DegenerateClustering {
            edges: values.len(),
            distinct,
        });
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut centers = plus_plus_init(values, k, &mut rng);
    let mut assignments = vec![usize::MAX; values.len()];
    let mut iterations = 0usize;

    for _ in 0..options.max_iterations.max(1) {
        iterations += 1;
        let mut changed = false;
        for (slot, &v) in assignments.iter_mut().zip(values) {
            let nearest = nearest_center(&centers, v);
            if *slot != nearest {
                *slot = nearest;
                changed = true;
            }
        }
        if !changed {
            break;
        }

        let mut sums = vec![0.0f64; k];
        let mut counts = vec![0usize; k];
        for (&c, &v) in assignments.iter().zip(values) {
            sums[c] += v as f64;
            counts[c] += 1;
        }
        for c in 0..k {
            // An empty cluster keeps its previous centre.
            if counts[c] > 0 {
                centers[c] = (sums[c] / counts[c] as f64) as f32;
            }
        }
    }

    let mut sizes = vec![0usize; k];
    for &c in &assignments {
        sizes[c] += 1;
    }
    if let Some(cluster) = sizes.iter().position(|&s| s == 0) {
        return Err(RecoveryError::EmptyCluster {
            cluster,
            iterations,
        });
    }

    let mut order: Vec<usize> = (0..k).collect();
    order.sort_by(|&a, &b| {
        centers[a]
            .partial_cmp(&centers[b])
            .unwrap_or(Ordering::Equal)
    });
    let mut rank = vec![0usize; k];
    for (r, &c) in order.iter().enumerate() {
        rank[c] = r;
    }

    Ok(Clustering1d {
        centers: order.iter().map(|&c| centers[c]).collect(),
        assignments: assignments.iter().map(|&c| rank[c]).collect(),
        sizes: order.iter().map(|&c| sizes[c]).collect(),
        iterations,
    })
}

fn plus_plus_init(values: &[f32], k: usize, rng: &mut StdRng) -> Vec<f32> {
    let mut centers = Vec::with_capacity(k);
    centers.push(values[rng.gen_range(0..values.len())]);

    while centers.len() < k {
        let weights: Vec<f64> = values
            .iter()
            .map(|&v| {
                centers
                    .iter()
                    .map(|&c| {
                        let d = (v - c) as f64;
                        d * d
                    })
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        let total: f64 = weights.iter().sum();
        // Distinct values outnumber the chosen centres, so total > 0.
        let threshold = rng.gen_range(0.0..total);
        let mut cumulative = 0.0;
        let mut chosen = weights.iter().rposition(|&w| w > 0.0).unwrap_or(0);
        for (i, &w) in weights.iter().enumerate() {
            cumulative += w;
            if w > 0.0 && cumulative > threshold {
                chosen = i;
                break;
            }
        }
        centers.push(values[chosen]);
    }
    centers
}

fn nearest_center(centers: &[f32], v: f32) -> usize {
    let mut best = 0usize;
    let mut best_dist = f32::INFINITY;
    for (i, &c) in centers.iter().enumerate() {
        let d = (v - c).abs();
        if d < best_dist {
            best = i;
            best_dist = d;
        }
    }
    best
}

fn count_distinct(values: &[f32]) -> usize {
    let mut sorted: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted.dedup();
    sorted.len()
}
