//! JSON configuration for batch recovery jobs.

pub mod job;

pub use job::{load_config, JobConfig, JobOutputConfig};
