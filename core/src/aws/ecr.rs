use crate::command::CommandLine;
use crate::errors::AwsError;
use crate::exec::Executor;

use super::{require_non_empty, Aws};

impl<E: Executor> Aws<E> {
    /// `aws ecr create-repository --repository-name $name | jq -r .repository.repositoryUri`
    ///
    /// Returns the repository URI.
    pub async fn create_ecr_repo(&self, name: &str) -> Result<String, AwsError> {
        require_non_empty("name", name)?;
        let out = self
            .exec_capture(
                CommandLine::new("ecr")
                    .arg("create-repository")
                    .flag("--repository-name", name)
                    .pipe_jq(".repository.repositoryUri"),
            )
            .await?;
        let uri = out.stdout_lossy().trim().to_string();
        tracing::info!(target: "e2e_aws.aws", repository = name, uri = %uri, "ecr repository created");
        Ok(uri)
    }

    /// `aws ecr get-login-password`
    pub async fn ecr_login_password(&self) -> Result<String, AwsError> {
        let out = self
            .exec_capture(CommandLine::new("ecr").arg("get-login-password"))
            .await?;
        Ok(out.stdout_lossy().trim().to_string())
    }

    /// `aws ecr delete-repository --repository-name $name --force`
    pub async fn delete_ecr_repo(&self, name: &str) -> Result<(), AwsError> {
        require_non_empty("name", name)?;
        self.exec(
            CommandLine::new("ecr")
                .arg("delete-repository")
                .flag("--repository-name", name)
                .arg("--force"),
        )
        .await?;
        tracing::info!(target: "e2e_aws.aws", repository = name, "ecr repository deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RecordingExecutor;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn create_repo_returns_trimmed_uri() {
        let aws = Aws::with_executor(
            RecordingExecutor::new()
                .respond_stdout("123456789012.dkr.ecr.us-west-2.amazonaws.com/e2e-app\n"),
        );
        let uri = aws.create_ecr_repo("e2e-app").await.unwrap();
        assert_eq!(uri, "123456789012.dkr.ecr.us-west-2.amazonaws.com/e2e-app");
        assert_eq!(
            aws.executor().commands(),
            vec!["aws ecr create-repository --repository-name e2e-app | jq -r .repository.repositoryUri"]
        );
    }

    #[tokio::test]
    async fn login_password_is_trimmed() {
        let aws = Aws::with_executor(RecordingExecutor::new().respond_stdout("  eyJwYXlsb2Fk\n"));
        assert_eq!(aws.ecr_login_password().await.unwrap(), "eyJwYXlsb2Fk");
        assert_eq!(aws.executor().commands(), vec!["aws ecr get-login-password"]);
    }

    #[tokio::test]
    async fn delete_repo_is_forced() {
        let aws = Aws::with_executor(RecordingExecutor::new());
        aws.delete_ecr_repo("e2e-app").await.unwrap();
        assert_eq!(
            aws.executor().commands(),
            vec!["aws ecr delete-repository --repository-name e2e-app --force"]
        );
    }

    #[tokio::test]
    async fn delete_repo_propagates_failure() {
        let aws = Aws::with_executor(
            RecordingExecutor::new().respond_exit(254, "RepositoryNotFoundException"),
        );
        let err = aws.delete_ecr_repo("gone").await.unwrap_err();
        assert!(err.to_string().contains("RepositoryNotFoundException"));
    }
}
