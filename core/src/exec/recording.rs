use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::ExecError;

use super::traits::Executor;
use super::types::{ExecOptions, ExecOutput};

type Scripted = Result<ExecOutput, ExecError>;

/// In-memory [`Executor`] that records every command and replays queued
/// responses in order. Once the queue is empty every command succeeds with
/// empty output.
#[derive(Default)]
pub struct RecordingExecutor {
    commands: Mutex<Vec<(String, ExecOptions)>>,
    responses: Mutex<VecDeque<Scripted>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_stdout(self, stdout: impl Into<String>) -> Self {
        self.push(Ok(ExecOutput {
            exit_code: 0,
            stdout: Bytes::from(stdout.into()),
        }))
    }

    pub fn respond_ok(self) -> Self {
        self.push(Ok(ExecOutput::default()))
    }

    pub fn respond_exit(self, code: i32, stderr: &str) -> Self {
        self.push(Err(ExecError::NonZeroExit {
            command: String::new(),
            code,
            stderr_tail: stderr.to_string(),
        }))
    }

    fn push(self, response: Scripted) -> Self {
        lock(&self.responses).push_back(response);
        self
    }

    pub fn commands(&self) -> Vec<String> {
        lock(&self.commands)
            .iter()
            .map(|(cmd, _)| cmd.clone())
            .collect()
    }

    pub fn calls(&self) -> Vec<(String, ExecOptions)> {
        lock(&self.commands).clone()
    }
}

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl Executor for RecordingExecutor {
    async fn exec(&self, command: &str, opts: ExecOptions) -> Result<ExecOutput, ExecError> {
        lock(&self.commands).push((command.to_string(), opts));
        match lock(&self.responses).pop_front() {
            Some(Err(ExecError::NonZeroExit {
                code, stderr_tail, ..
            })) => Err(ExecError::NonZeroExit {
                command: command.to_string(),
                code,
                stderr_tail,
            }),
            Some(response) => response,
            None => Ok(ExecOutput::default()),
        }
    }
}
