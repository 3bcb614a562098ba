use e2e_aws_core::{AwsError, ConfigError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Aws(#[from] AwsError),

    #[error("failed to render output")]
    Output(#[source] serde_json::Error),
}

impl CliError {
    /// Process exit code: the failed aws command's own code when there is one.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Aws(e) => e.exit_code().unwrap_or(1),
            CliError::Config(_) => 2,
            CliError::Output(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e2e_aws_core::ExecError;

    #[test]
    fn exit_code_follows_the_failed_aws_command() {
        let err = CliError::from(AwsError::from(ExecError::NonZeroExit {
            command: "aws ecr get-login-password".into(),
            code: 253,
            stderr_tail: "Unable to locate credentials".into(),
        }));
        assert_eq!(err.exit_code(), 253);
        assert!(err.to_string().contains("Unable to locate credentials"));
    }

    #[test]
    fn config_errors_exit_with_two() {
        let err = CliError::from(ConfigError::Validation("program must not be empty".into()));
        assert_eq!(err.exit_code(), 2);
    }
}
