mod error;
mod model;
mod query;
mod roster;

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{LoadError, LoadErrorKind, RecordIssue, ValidationError};
pub use model::{StudentRecord, StudentSummary, ThresholdResult};
pub use query::{ThresholdQuery, above_threshold};
pub use roster::Roster;
