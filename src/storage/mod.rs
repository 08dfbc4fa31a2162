// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractors::sample::ExtractionResult;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(StorageError::IoError)?;
        }

        Ok(Self {
            base_dir: base_path,
        })
    }

    /// Directory holding everything written for one document.
    pub fn document_dir(&self, document_id: &str) -> PathBuf {
        self.base_dir.join(document_id)
    }

    /// Saves the extraction result for a document as pretty-printed JSON
    pub fn save_result(
        &self,
        document_id: &str,
        result: &ExtractionResult,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.document_dir(document_id);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let file_path = target_dir.join("extraction.json");

        let payload = serde_json::to_string_pretty(result)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        fs::write(&file_path, payload).map_err(StorageError::IoError)?;

        tracing::info!("Saved extraction result to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the extraction in JSON format
    pub fn save_result_metadata(
        &self,
        document_id: &str,
        section_count: usize,
        result: &ExtractionResult,
    ) -> Result<PathBuf, StorageError> {
        let target_dir = self.document_dir(document_id);
        if !target_dir.exists() {
            fs::create_dir_all(&target_dir).map_err(StorageError::IoError)?;
        }

        let file_path = target_dir.join("extraction_meta.json");

        let metadata = serde_json::json!({
            "document_id": document_id,
            "section_count": section_count,
            "size_found": result.size.is_some(),
            "sample_found": result.sample.is_some(),
            "method_found": result.method.is_some(),
            "extraction_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ExtractionResult {
        ExtractionResult {
            size: Some("30".to_string()),
            sample: Some("We enrolled 30 patients.".to_string()),
            method: None,
        }
    }

    #[test]
    fn test_save_result_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let path = storage.save_result("study-001", &result()).unwrap();
        assert!(path.ends_with("study-001/extraction.json"));

        let raw = fs::read_to_string(&path).unwrap();
        let saved: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved["size"], "30");
        assert_eq!(saved["sample"], "We enrolled 30 patients.");
        assert_eq!(saved["method"], serde_json::Value::Null);
    }

    #[test]
    fn test_save_metadata_flags_found_fields() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        let path = storage
            .save_result_metadata("study-001", 4, &result())
            .unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let metadata: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(metadata["document_id"], "study-001");
        assert_eq!(metadata["section_count"], 4);
        assert_eq!(metadata["size_found"], true);
        assert_eq!(metadata["sample_found"], true);
        assert_eq!(metadata["method_found"], false);
        assert!(metadata["extraction_timestamp"].is_string());
    }
}
