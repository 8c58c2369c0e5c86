use serde_json::Value;

use crate::error::ValidationError;
use crate::model::{StudentSummary, ThresholdResult};
use crate::roster::Roster;

/// A validated threshold: a real number, never negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdQuery {
    threshold: f64,
}

impl ThresholdQuery {
    pub fn new(threshold: f64) -> Result<Self, ValidationError> {
        if threshold.is_nan() {
            return Err(ValidationError::Required);
        }
        if threshold < 0.0 {
            return Err(ValidationError::Negative);
        }
        Ok(Self { threshold })
    }

    /// Extracts `threshold` from a request body. Anything other than a JSON
    /// number under that key counts as missing.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let threshold = body
            .get("threshold")
            .and_then(Value::as_f64)
            .ok_or(ValidationError::Required)?;
        Self::new(threshold)
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let body: Value = serde_json::from_slice(body).map_err(|_| ValidationError::Required)?;
        Self::from_json(&body)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

/// Students whose total is strictly greater than the threshold, in roster
/// order.
pub fn above_threshold(roster: &Roster, query: &ThresholdQuery) -> ThresholdResult {
    let students = roster
        .records()
        .iter()
        .filter(|record| record.total_value() > query.threshold)
        .map(StudentSummary::from)
        .collect();
    ThresholdResult::new(students)
}
