use serde::Serialize;
use serde_json::Number;

/// One entry of the loaded dataset.
///
/// `total` keeps the JSON number as written so integer scores are echoed
/// back as integers.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub name: String,
    pub total: Number,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, total: impl Into<Number>) -> Self {
        Self {
            name: name.into(),
            total: total.into(),
        }
    }

    pub fn total_value(&self) -> f64 {
        self.total.as_f64().unwrap_or(f64::NAN)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub total: Number,
}

impl From<&StudentRecord> for StudentSummary {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
            total: record.total.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdResult {
    count: usize,
    students: Vec<StudentSummary>,
}

impl ThresholdResult {
    pub fn new(students: Vec<StudentSummary>) -> Self {
        Self {
            count: students.len(),
            students,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn students(&self) -> &[StudentSummary] {
        &self.students
    }
}
