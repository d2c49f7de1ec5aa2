use crate::error::ChatError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// One persisted code exchange. Written once; the core never reads it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub input: String,
    pub result: String,
    pub timestamp: String,
}

/// Write-only sink for code-related exchanges.
pub trait AnalysisStore: Send + Sync {
    fn create_record(&self, input: &str, result: &str) -> Result<(), ChatError>;
}

/// Appends records as JSON lines to `analysis.jsonl` in the data directory.
pub struct JsonlAnalysisStore {
    path: PathBuf,
}

impl JsonlAnalysisStore {
    /// Store under the default data directory (~/.codechat/).
    pub fn new() -> Result<Self, ChatError> {
        let home = dirs::home_dir().ok_or_else(|| {
            ChatError::Config("Could not determine home directory".to_string())
        })?;

        Self::with_dir(home.join(".codechat"))
    }

    /// Store under a custom directory (useful for testing).
    pub fn with_dir(base_dir: PathBuf) -> Result<Self, ChatError> {
        fs::create_dir_all(&base_dir).map_err(|e| {
            ChatError::Persistence(format!("Failed to create data directory: {}", e))
        })?;

        Ok(Self {
            path: base_dir.join("analysis.jsonl"),
        })
    }

    /// Get current timestamp as an RFC 3339 string.
    fn timestamp() -> String {
        Utc::now().to_rfc3339()
    }
}

impl AnalysisStore for JsonlAnalysisStore {
    fn create_record(&self, input: &str, result: &str) -> Result<(), ChatError> {
        let record = AnalysisRecord {
            input: input.to_string(),
            result: result.to_string(),
            timestamp: Self::timestamp(),
        };

        let line = serde_json::to_string(&record).map_err(|e| {
            ChatError::Persistence(format!("Failed to serialize record: {}", e))
        })?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ChatError::Persistence(format!(
                    "Failed to open {}: {}",
                    self.path.display(),
                    e
                ))
            })?;

        writeln!(file, "{line}")
            .map_err(|e| ChatError::Persistence(format!("Failed to append record: {}", e)))?;

        Ok(())
    }
}
