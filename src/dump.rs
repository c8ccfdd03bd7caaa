//! Query dump loading
//!
//! A dump is the JSON document the query layer writes after running a
//! request: the request itself plus the records it returned, in order.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Log, Request};

/// A request together with the records it returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryDump {
    /// The query that was run
    pub request: Request,
    /// Returned records, in backend order
    #[serde(default)]
    pub logs: Vec<Log>,
}

impl QueryDump {
    /// Load a dump from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dump file: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse dump content from a string
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse query dump")
    }

    /// Find a record by its id
    #[must_use]
    pub fn find_log(&self, id: &str) -> Option<&Log> {
        self.logs.iter().find(|log| log.id == id)
    }

    /// Returns true if the dump holds more records than the request asked for
    #[must_use]
    pub fn exceeds_requested_size(&self) -> bool {
        self.logs.len() > self.request.size as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DUMP: &str = r#"{
  "request": {
    "query": "host:web-1",
    "time_start": "2024-01-02T15:04:05Z",
    "time_end": "2024-01-02T16:04:05Z",
    "size": 2
  },
  "logs": [
    { "id": "a1", "level": 200, "time": "2024-01-02T15:10:00Z", "host": "web-1",
      "message": "started", "script_id": "boot.php" },
    { "id": "b2", "level": 400, "time": "2024-01-02T15:11:00Z", "host": "web-1",
      "message": "failed for :user", "source": { "user": "alice" },
      "exception": { "message": "boom", "code": 3,
                     "trace": [ { "file": "/app/a.php", "line": 9 } ] } }
  ]
}"#;

    #[test]
    fn test_parse_dump() {
        let dump = QueryDump::parse(DUMP).unwrap();
        assert_eq!(dump.request.query, "host:web-1");
        assert_eq!(dump.request.size, 2);
        assert_eq!(dump.logs.len(), 2);
        assert_eq!(dump.logs[1].raised_exception().unwrap().trace.len(), 1);
    }

    #[test]
    fn test_find_log() {
        let dump = QueryDump::parse(DUMP).unwrap();
        assert_eq!(dump.find_log("b2").unwrap().message, "failed for :user");
        assert!(dump.find_log("zz").is_none());
    }

    #[test]
    fn test_exceeds_requested_size() {
        let mut dump = QueryDump::parse(DUMP).unwrap();
        assert!(!dump.exceeds_requested_size());
        dump.request.size = 1;
        assert!(dump.exceeds_requested_size());
    }

    #[test]
    fn test_missing_logs_defaults_to_empty() {
        let dump = QueryDump::parse(
            r#"{"request": {"time_start": "2024-01-02T15:04:05Z",
                            "time_end": "2024-01-02T16:04:05Z", "size": 10}}"#,
        )
        .unwrap();
        assert!(dump.logs.is_empty());
        assert!(dump.request.query.is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = QueryDump::parse("{ not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse query dump"));
    }

    #[test]
    fn test_from_path_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dump.json");
        std::fs::write(&path, DUMP).unwrap();
        let dump = QueryDump::from_path(&path).unwrap();
        assert_eq!(dump.logs[0].id, "a1");
    }

    #[test]
    fn test_from_path_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = QueryDump::from_path(temp_dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read dump file"));
    }
}
