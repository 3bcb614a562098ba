// core/src/errors/aws_error.rs
use thiserror::Error;

use super::ExecError;

#[derive(Debug, Error)]
pub enum AwsError {
    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("failed to decode aws output")]
    Decode(#[from] serde_json::Error),

    #[error("expected a byte count, got {raw:?}")]
    ParseSize {
        raw: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("failed to delete {} of {attempted} cluster snapshots: {}", .failed.len(), failed_ids(.failed))]
    SnapshotCleanup {
        attempted: usize,
        failed: Vec<SnapshotFailure>,
    },
}

#[derive(Debug)]
pub struct SnapshotFailure {
    pub identifier: String,
    pub error: ExecError,
}

fn failed_ids(failed: &[SnapshotFailure]) -> String {
    failed
        .iter()
        .map(|f| f.identifier.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl AwsError {
    /// Exit code of the failed child process, when the failure came from one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            AwsError::Exec(e) => e.exit_code(),
            _ => None,
        }
    }
}
