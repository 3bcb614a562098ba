mod aws_error;
mod config_error;
mod exec_error;

pub use aws_error::{AwsError, SnapshotFailure};
pub use config_error::ConfigError;
pub use exec_error::ExecError;
