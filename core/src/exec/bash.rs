use std::collections::BTreeMap;
use std::process::Stdio;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::process::Command;

use crate::config::AwsConfig;
use crate::errors::ExecError;

use super::exit::{normalize_exit, tail_lossy};
use super::traits::Executor;
use super::types::{ExecOptions, ExecOutput};

/// Runs commands through `<shell> -o pipefail -c`, so pipes in the rendered
/// line work and a failing `aws` on the left of `| jq` fails the whole line.
#[derive(Clone, Debug)]
pub struct BashExecutor {
    shell: String,
    env: BTreeMap<String, String>,
    stderr_tail_bytes: usize,
}

impl BashExecutor {
    pub fn new() -> Self {
        Self::from_config(&AwsConfig::default())
    }

    pub fn from_config(cfg: &AwsConfig) -> Self {
        Self {
            shell: cfg.shell.clone(),
            env: cfg.child_env(),
            stderr_tail_bytes: cfg.stderr_tail_bytes,
        }
    }
}

impl Default for BashExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Executor for BashExecutor {
    async fn exec(&self, command: &str, opts: ExecOptions) -> Result<ExecOutput, ExecError> {
        tracing::debug!(target: "e2e_aws.exec", shell = %self.shell, command, "running command");

        let stdout = if opts.capture_stdout {
            Stdio::piped()
        } else {
            Stdio::inherit()
        };
        let child = Command::new(&self.shell)
            .args(["-o", "pipefail", "-c"])
            .arg(command)
            .envs(&self.env)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ExecError::Spawn {
                shell: self.shell.clone(),
                source,
            })?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| ExecError::StreamIo {
                command: command.to_string(),
                source,
            })?;

        let exit_code = normalize_exit(output.status);
        if exit_code != 0 {
            let stderr_tail = tail_lossy(&output.stderr, self.stderr_tail_bytes);
            tracing::warn!(
                target: "e2e_aws.exec",
                command,
                exit_code,
                stderr = %stderr_tail,
                "command failed"
            );
            return Err(ExecError::NonZeroExit {
                command: command.to_string(),
                code: exit_code,
                stderr_tail,
            });
        }

        Ok(ExecOutput {
            exit_code,
            stdout: Bytes::from(output.stdout),
        })
    }
}
