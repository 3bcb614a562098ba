//! Facade over the `aws` CLI sub-commands used by end-to-end tests.
//!
//! Operations are grouped by service: CloudFormation stacks (`stack.rs`), ECR
//! repositories (`ecr.rs`), EFS file systems (`efs.rs`) and RDS cluster
//! snapshots (`rds.rs`).

mod ecr;
mod efs;
mod rds;
mod stack;
mod types;

use serde::{Deserialize, Serialize};

use crate::command::CommandLine;
use crate::config::AwsConfig;
use crate::errors::AwsError;
use crate::exec::{BashExecutor, ExecOptions, ExecOutput, Executor};

pub use types::{DbClusterSnapshot, SnapshotListing, StackOutput};

/// What to do when deleting one cluster snapshot fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotCleanup {
    /// Return the first failure; later snapshots are left in place.
    #[default]
    StopOnFirstError,
    /// Attempt every deletion, then report all failures together.
    ContinueOnError,
}

/// Wrapper around `aws` commands.
pub struct Aws<E = BashExecutor> {
    executor: E,
    program: String,
    snapshot_cleanup: SnapshotCleanup,
}

impl Aws<BashExecutor> {
    pub fn new() -> Self {
        Self::from_config(&AwsConfig::default())
    }

    pub fn from_config(cfg: &AwsConfig) -> Self {
        Self {
            executor: BashExecutor::from_config(cfg),
            program: cfg.program.clone(),
            snapshot_cleanup: cfg.snapshot_cleanup,
        }
    }
}

impl Default for Aws<BashExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Executor> Aws<E> {
    pub fn with_executor(executor: E) -> Self {
        Self {
            executor,
            program: "aws".to_string(),
            snapshot_cleanup: SnapshotCleanup::default(),
        }
    }

    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn snapshot_cleanup(mut self, mode: SnapshotCleanup) -> Self {
        self.snapshot_cleanup = mode;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    async fn exec(&self, command: CommandLine) -> Result<(), AwsError> {
        self.run(command, ExecOptions::default()).await?;
        Ok(())
    }

    async fn exec_capture(&self, command: CommandLine) -> Result<ExecOutput, AwsError> {
        self.run(command, ExecOptions::capture()).await
    }

    async fn run(&self, command: CommandLine, opts: ExecOptions) -> Result<ExecOutput, AwsError> {
        let line = format!("{} {}", self.program, command);
        Ok(self.executor.exec(&line, opts).await?)
    }
}

fn require_non_empty(name: &'static str, value: &str) -> Result<(), AwsError> {
    if value.trim().is_empty() {
        return Err(AwsError::InvalidArgument {
            name,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RecordingExecutor;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn commands_are_prefixed_with_the_program() {
        let aws = Aws::with_executor(RecordingExecutor::new()).program("/opt/bin/aws");
        aws.delete_stack("e2e").await.unwrap();
        assert_eq!(
            aws.executor().commands(),
            vec!["/opt/bin/aws cloudformation delete-stack --stack-name e2e"]
        );
    }

    #[tokio::test]
    async fn borrowed_executor_can_be_inspected_afterwards() {
        let recorder = RecordingExecutor::new();
        Aws::with_executor(&recorder)
            .ecr_login_password()
            .await
            .unwrap();
        assert_eq!(recorder.commands(), vec!["aws ecr get-login-password"]);
    }

    #[tokio::test]
    async fn from_config_carries_program_and_cleanup_mode() {
        let cfg = AwsConfig {
            program: "aws2".into(),
            snapshot_cleanup: SnapshotCleanup::ContinueOnError,
            ..AwsConfig::default()
        };
        let aws = Aws::from_config(&cfg);
        assert_eq!(aws.program, "aws2");
        assert_eq!(aws.snapshot_cleanup, SnapshotCleanup::ContinueOnError);
    }
}
