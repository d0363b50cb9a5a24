// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::models::BusinessRecord;
use crate::pipeline::BatchSummary;
use crate::utils::error::StorageError;

/// Reads input records and writes the JSON snapshots of one run.
///
/// Every file written by the same manager carries the same run timestamp.
pub struct StorageManager {
    base_dir: PathBuf,
    run_stamp: String,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified output directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self {
            base_dir: base_path,
            run_stamp: chrono::Local::now().format("%Y%m%d_%H%M%S").to_string(),
        })
    }

    pub fn run_stamp(&self) -> &str {
        &self.run_stamp
    }

    /// Loads a JSON array of business records.
    pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<BusinessRecord>, StorageError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(StorageError::IoError)?;
        let records: Vec<BusinessRecord> = serde_json::from_str(&raw)
            .map_err(|e| StorageError::SerializationError(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Writes `{stage}_{timestamp}.json` into the output directory.
    pub fn save_records(&self, records: &[BusinessRecord], stage: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_{}.json", stage, self.run_stamp));
        self.write_json(&file_path, &records)?;

        tracing::info!("Saved {} records to {}", records.len(), file_path.display());
        Ok(file_path)
    }

    /// Saves counts and stage outputs of the run in JSON format
    pub fn save_run_metadata(
        &self,
        summary: Option<&BatchSummary>,
        total_records: usize,
        outputs: &[PathBuf],
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("run_metadata_{}.json", self.run_stamp));

        let metadata = serde_json::json!({
            "run_timestamp": chrono::Utc::now().to_rfc3339(),
            "total_records": total_records,
            "scrape": summary,
            "outputs": outputs
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
        });
        self.write_json(&file_path, &metadata)?;

        tracing::info!("Saved run metadata to {}", file_path.display());
        Ok(file_path)
    }

    fn write_json<T: Serialize + ?Sized>(&self, file_path: &Path, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(file_path, json).map_err(StorageError::IoError)
    }
}
