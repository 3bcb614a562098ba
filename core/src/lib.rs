//! Thin wrappers around the `aws` command-line tool for end-to-end test suites.
//!
//! Every operation on [`Aws`] renders one fixed command template, runs it through
//! an [`Executor`] and decodes whatever the command printed.

pub mod aws;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;

pub use aws::{Aws, DbClusterSnapshot, SnapshotCleanup, SnapshotListing, StackOutput};
pub use command::CommandLine;
pub use config::{load_default, load_from, AwsConfig};
pub use errors::{AwsError, ConfigError, ExecError, SnapshotFailure};
pub use exec::{BashExecutor, ExecOptions, ExecOutput, Executor, RecordingExecutor};
