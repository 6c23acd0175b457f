//! Configuration module

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};
use crate::types::Workload;
use crate::workloads::{self, SuiteKind, DEFAULT_ELEMENT_COUNT};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration struct
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Elements allocated by each workload
    pub element_count: usize,

    /// Suites to run, in order
    pub suites: Vec<SuiteKind>,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub with_target: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            element_count: DEFAULT_ELEMENT_COUNT,
            suites: vec![SuiteKind::Arrays, SuiteKind::TimeValues],
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            // stdout carries the report; diagnostics stay quiet unless asked
            level: "warn".to_string(),
            with_target: false,
        }
    }
}

impl BenchConfig {
    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json(content: &str) -> Result<Self> {
        let config: BenchConfig =
            serde_json::from_str(content).map_err(|e| BenchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.suites.is_empty() {
            return Err(BenchError::Config("at least one suite is required".to_string()));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(BenchError::Config(format!(
                "unknown log level `{}`",
                self.logging.level
            )));
        }
        Ok(())
    }

    /// Ordered workload list for this configuration
    pub fn workloads(&self) -> Vec<Workload> {
        workloads::register(&self.suites, self.element_count)
    }
}
