//! Autocorrelation-based period candidates.
//!
//! Peaks of the autocorrelation sit at multiples of the true period as well as
//! at the period itself, so the output is a list of candidates rather than an
//! answer. [`minimal_period`](super::minimal_period) confirms the exact value.

/// Non-negative-lag half of the full autocorrelation of the mean-centred
/// sequence. Index `k` holds `sum_i x[i] * x[i + k]`; the result has the same
/// length as the input.
pub fn autocorrelation(seq: &[usize]) -> Vec<f64> {
    let n = seq.len();
    if n == 0 {
        return Vec::new();
    }
    let mean = seq.iter().map(|&c| c as f64).sum::<f64>() / n as f64;
    let centred: Vec<f64> = seq.iter().map(|&c| c as f64 - mean).collect();
    (0..n)
        .map(|lag| {
            centred[..n - lag]
                .iter()
                .zip(&centred[lag..])
                .map(|(a, b)| a * b)
                .sum()
        })
        .collect()
}

/// Lags at which the autocorrelation has a local maximum, ascending.
///
/// Sequences shorter than 2 yield no peaks.
pub fn autocorrelation_period(seq: &[usize]) -> Vec<usize> {
    if seq.len() < 2 {
        return Vec::new();
    }
    local_maxima(&autocorrelation(seq))
}

/// Strict interior local maxima. A flat top reports its middle sample (the
/// left one of the two middles for even widths); endpoints are never peaks.
pub(crate) fn local_maxima(values: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if values.len() < 3 {
        return peaks;
    }
    let last = values.len() - 1;
    let mut i = 1;
    while i < last {
        if values[i - 1] < values[i] {
            let mut ahead = i + 1;
            while ahead < last && values[ahead] == values[i] {
                ahead += 1;
            }
            if values[ahead] < values[i] {
                let right = ahead - 1;
                peaks.push((i + right) / 2);
                i = ahead;
                continue;
            }
        }
        i += 1;
    }
    peaks
}
