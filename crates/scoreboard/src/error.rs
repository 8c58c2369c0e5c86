use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    ReadFailed,
    InvalidJson,
    InvalidRecord,
}

/// A problem with a single entry of the dataset array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    pub index: usize,
    pub message: String,
}

impl RecordIssue {
    pub fn new(index: usize, message: impl Into<String>) -> Self {
        Self {
            index,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record {}: {}", self.index, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub message: String,
    pub path: Option<PathBuf>,
    pub issues: Vec<RecordIssue>,
}

impl LoadError {
    pub fn new(kind: LoadErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
            issues: Vec::new(),
        }
    }

    pub fn invalid_records(issues: Vec<RecordIssue>) -> Self {
        let mut err = Self::new(
            LoadErrorKind::InvalidRecord,
            format!("{} invalid student record(s)", issues.len()),
        );
        err.issues = issues;
        err
    }

    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        for issue in &self.issues {
            write!(f, "; {}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {}

/// Rejection of a threshold request body. The messages are part of the
/// public API and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    Negative,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::Required => "'threshold' must be a number and is required",
            ValidationError::Negative => "'threshold' must be a non-negative number.",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_display_includes_path_and_issues() {
        let err = LoadError::invalid_records(vec![
            RecordIssue::new(0, "missing 'name'"),
            RecordIssue::new(3, "'total' must be a non-negative number"),
        ])
        .with_path("/tmp/data.json");
        let text = err.to_string();
        assert!(text.starts_with("2 invalid student record(s) (path: /tmp/data.json)"));
        assert!(text.contains("record 0: missing 'name'"));
        assert!(text.contains("record 3: 'total' must be a non-negative number"));
    }

    #[test]
    fn validation_messages_are_stable() {
        assert_eq!(
            ValidationError::Required.to_string(),
            "'threshold' must be a number and is required"
        );
        assert_eq!(
            ValidationError::Negative.to_string(),
            "'threshold' must be a non-negative number."
        );
    }
}
