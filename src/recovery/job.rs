use super::pipeline::{PatternRecoverer, RecoveryReport};
use crate::config::JobConfig;
use crate::io::{load_observation, write_json_file};
use log::{info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Per-input outcome of [`run_job`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOutcome {
    pub input: PathBuf,
    /// Written report; `None` when recovery failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<usize>,
    pub beads_on_path: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobOutcome {
    fn ok(input: &Path, report_path: PathBuf, report: &RecoveryReport) -> Self {
        Self {
            input: input.to_path_buf(),
            report: Some(report_path),
            period: report.best_period(),
            beads_on_path: report.bead_path.beads.len(),
            error: None,
        }
    }

    fn failed(input: &Path, error: String) -> Self {
        Self {
            input: input.to_path_buf(),
            report: None,
            period: None,
            beads_on_path: 0,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Loads every observation of `config`, recovers them in parallel and writes
/// one report per input plus the optional summary.
///
/// Unreadable inputs and I/O failures abort the job; a recovery failure only
/// marks its own outcome as failed.
pub fn run_job(config: &JobConfig) -> Result<Vec<JobOutcome>, String> {
    let observations = config
        .inputs
        .iter()
        .map(|p| load_observation(p))
        .collect::<Result<Vec<_>, _>>()?;

    let recoverer = PatternRecoverer::new(config.params.clone());
    let results = recoverer.process_batch(&observations);

    let mut outcomes = Vec::with_capacity(results.len());
    for (input, result) in config.inputs.iter().zip(results) {
        match result {
            Ok(report) => {
                let out = config.output.report_path(input);
                write_json_file(&out, &report)?;
                outcomes.push(JobOutcome::ok(input, out, &report));
            }
            Err(err) => {
                warn!("{}: recovery failed: {err}", input.display());
                outcomes.push(JobOutcome::failed(input, err.to_string()));
            }
        }
    }

    if let Some(path) = &config.output.summary_json {
        write_json_file(path, &outcomes)?;
    }
    info!(
        "job finished: {}/{} observation(s) recovered",
        outcomes.iter().filter(|o| o.is_ok()).count(),
        outcomes.len()
    );
    Ok(outcomes)
}
