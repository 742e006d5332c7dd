//! Output record persistence
//!
//! Writes the assembled record as 4-space-indented JSON. The record goes to a
//! temp file first and is renamed into place, so a failed run never leaves a
//! truncated file behind the configured path. Write failures are fatal to the
//! run and propagate to the caller.

use crate::error::Result;
use crate::models::TrendRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes [`TrendRecord`]s to a fixed output path, overwriting prior contents
pub struct RecordWriter {
    path: PathBuf,
}

impl RecordWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Serialize and persist the record
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` or `Error::Json` if the file cannot be written;
    /// both abort the run.
    pub fn write(&self, record: &TrendRecord) -> Result<PathBuf> {
        let temp_path = self.path.with_extension("json.tmp");

        let file = File::create(&temp_path)?;
        let mut writer = BufWriter::new(file);

        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        record.serialize(&mut serializer)?;

        writer.flush()?;

        // Atomic rename
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!(path = %self.path.display(), "trend record saved");
        Ok(self.path.clone())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryScores, KeywordScore};
    use tempfile::tempdir;

    fn sample_record() -> TrendRecord {
        TrendRecord {
            last_updated: "2026-08-24 09:30:00".to_string(),
            categories: vec![CategoryScores {
                name: "SaaS".to_string(),
                scores: vec![KeywordScore {
                    name: "CRM Automation".to_string(),
                    value: 451,
                }],
            }],
        }
    }

    #[test]
    fn test_write_and_reparse() {
        let dir = tempdir().unwrap();
        let writer = RecordWriter::new(dir.path().join("trends_data.json"));

        let record = sample_record();
        let path = writer.write(&record).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: TrendRecord = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_four_space_indentation() {
        let dir = tempdir().unwrap();
        let writer = RecordWriter::new(dir.path().join("trends_data.json"));

        let path = writer.write(&sample_record()).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.contains("\n    \"last_updated\""));
        assert!(content.contains("\n    \"categories\""));
    }

    #[test]
    fn test_overwrites_prior_contents() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("trends_data.json");
        fs::write(&target, "{\"stale\": true}").unwrap();

        let writer = RecordWriter::new(&target);
        writer.write(&sample_record()).unwrap();

        let content = fs::read_to_string(&target).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("CRM Automation"));
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = tempdir().unwrap();
        // Point at a path whose parent does not exist
        let writer = RecordWriter::new(dir.path().join("missing").join("trends_data.json"));
        let result = writer.write(&sample_record());
        assert!(result.is_err());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempdir().unwrap();
        let writer = RecordWriter::new(dir.path().join("trends_data.json"));
        writer.write(&sample_record()).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
