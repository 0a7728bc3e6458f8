use crate::recovery::RecoveryParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Batch job: observations to process and where to put the reports.
#[derive(Clone, Debug, Deserialize)]
pub struct JobConfig {
    /// Observation files, one JSON document per image.
    pub inputs: Vec<PathBuf>,
    pub params: RecoveryParams,
    pub output: JobOutputConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct JobOutputConfig {
    /// Directory receiving one `<input stem>.report.json` per observation.
    pub report_dir: PathBuf,
    /// Optional combined summary over all inputs.
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
}

impl JobOutputConfig {
    /// Report path for an input file.
    pub fn report_path(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "observation".to_string());
        self.report_dir.join(format!("{stem}.report.json"))
    }
}

pub fn load_config(path: &Path) -> Result<JobConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: JobConfig = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    if config.inputs.is_empty() {
        return Err(format!("Config {} lists no inputs", path.display()));
    }
    config
        .params
        .validate()
        .map_err(|e| format!("Invalid params in {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "bead_pattern_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_minimal_config() {
        let path = write_temp(
            "minimal.json",
            r#"{
                "inputs": ["a/strand_01.json", "b/strand_02.json"],
                "params": { "backgroundFraction": 0.15, "beadsPerRow": 7.5 },
                "output": { "report_dir": "out" }
            }"#,
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.inputs.len(), 2);
        assert_eq!(cfg.params.beads_per_row, 7.5);
        assert!(cfg.output.summary_json.is_none());
        assert_eq!(
            cfg.output.report_path(&cfg.inputs[0]),
            PathBuf::from("out").join("strand_01.report.json")
        );
        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_required_param_is_rejected() {
        let path = write_temp(
            "no_bpr.json",
            r#"{
                "inputs": ["strand.json"],
                "params": { "backgroundFraction": 0.15 },
                "output": { "report_dir": "out" }
            }"#,
        );
        let err = load_config(&path).unwrap_err();
        assert!(err.contains("Failed to parse config"), "{err}");
        fs::remove_file(path).ok();
    }

    #[test]
    fn out_of_range_param_is_rejected() {
        let path = write_temp(
            "bad_frac.json",
            r#"{
                "inputs": ["strand.json"],
                "params": { "backgroundFraction": 1.5, "beadsPerRow": 7.5 },
                "output": { "report_dir": "out" }
            }"#,
        );
        let err = load_config(&path).unwrap_err();
        assert!(err.contains("Invalid params"), "{err}");
        fs::remove_file(path).ok();
    }
}
