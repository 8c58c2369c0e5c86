use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{LoadError, LoadErrorKind, RecordIssue};
use crate::model::StudentRecord;

/// The student dataset, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    /// Reads and validates the dataset file. Any unreadable file, malformed
    /// JSON or invalid record fails the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| {
            LoadError::new(
                LoadErrorKind::ReadFailed,
                format!("failed to read dataset: {}", err),
            )
            .with_path(path)
        })?;
        Self::from_json_str(&source).map_err(|err| err.with_path(path))
    }

    pub fn from_json_str(source: &str) -> Result<Self, LoadError> {
        let entries: Vec<Value> = serde_json::from_str(source).map_err(|err| {
            LoadError::new(
                LoadErrorKind::InvalidJson,
                format!("dataset is not a JSON array of students: {}", err),
            )
        })?;

        let mut records = Vec::with_capacity(entries.len());
        let mut issues = Vec::new();
        for (index, entry) in entries.iter().enumerate() {
            match parse_record(entry) {
                Ok(record) => records.push(record),
                Err(message) => issues.push(RecordIssue::new(index, message)),
            }
        }

        if !issues.is_empty() {
            return Err(LoadError::invalid_records(issues));
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_record(entry: &Value) -> Result<StudentRecord, String> {
    let object = entry
        .as_object()
        .ok_or_else(|| "expected an object".to_string())?;

    let name = match object.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        Some(Value::String(_)) => return Err("'name' must not be empty".to_string()),
        Some(_) => return Err("'name' must be a string".to_string()),
        None => return Err("missing 'name'".to_string()),
    };

    let total = match object.get("total") {
        Some(Value::Number(total)) => total.clone(),
        Some(_) => return Err("'total' must be a number".to_string()),
        None => return Err("missing 'total'".to_string()),
    };

    let record = StudentRecord { name, total };
    let value = record.total_value();
    if value.is_nan() || value < 0.0 {
        return Err("'total' must be a non-negative number".to_string());
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_in_order_and_drops_extra_fields() {
        let roster = Roster::from_json_str(
            r#"[
                {"name": "Alice Johnson", "total": 433, "marks": [90, 88]},
                {"name": "Bob Smith", "total": 410.5}
            ]"#,
        )
        .expect("roster");
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.records()[0].name, "Alice Johnson");
        assert_eq!(roster.records()[0].total_value(), 433.0);
        assert_eq!(roster.records()[1].total_value(), 410.5);
    }

    #[test]
    fn empty_array_is_a_valid_roster() {
        let roster = Roster::from_json_str("[]").expect("roster");
        assert!(roster.is_empty());
    }

    #[test]
    fn rejects_non_array_documents() {
        let err = Roster::from_json_str(r#"{"students": []}"#).unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::InvalidJson);

        let err = Roster::from_json_str("[{\"name\": ").unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::InvalidJson);
    }

    #[test]
    fn reports_every_invalid_record() {
        let err = Roster::from_json_str(
            r#"[
                {"name": "Alice Johnson", "total": 433},
                {"total": 12},
                {"name": "   ", "total": 1},
                {"name": "Carl Lee", "total": "200"},
                {"name": "Dana", "total": -3},
                42
            ]"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, LoadErrorKind::InvalidRecord);
        let indexes: Vec<usize> = err.issues.iter().map(|issue| issue.index).collect();
        assert_eq!(indexes, vec![1, 2, 3, 4, 5]);
        assert_eq!(err.issues[0].message, "missing 'name'");
        assert_eq!(err.issues[2].message, "'total' must be a number");
        assert_eq!(err.issues[3].message, "'total' must be a non-negative number");
    }
}
