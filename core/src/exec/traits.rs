use async_trait::async_trait;

use crate::errors::ExecError;

use super::types::{ExecOptions, ExecOutput};

/// Runs a rendered command line to completion.
///
/// Implementations must return [`ExecError::NonZeroExit`] for a failing command
/// rather than an `Ok` carrying the exit code.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn exec(&self, command: &str, opts: ExecOptions) -> Result<ExecOutput, ExecError>;
}

#[async_trait]
impl<T: Executor + ?Sized> Executor for &T {
    async fn exec(&self, command: &str, opts: ExecOptions) -> Result<ExecOutput, ExecError> {
        (**self).exec(command, opts).await
    }
}

#[async_trait]
impl<T: Executor + ?Sized> Executor for std::sync::Arc<T> {
    async fn exec(&self, command: &str, opts: ExecOptions) -> Result<ExecOutput, ExecError> {
        (**self).exec(command, opts).await
    }
}
