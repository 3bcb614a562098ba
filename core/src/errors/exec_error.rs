// core/src/errors/exec_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to spawn shell: {shell}")]
    Spawn {
        shell: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error while waiting for `{command}`")]
    StreamIo {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command `{command}` exited with code {code}: {stderr_tail}")]
    NonZeroExit {
        command: String,
        code: i32,
        stderr_tail: String,
    },
}

impl ExecError {
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ExecError::NonZeroExit { code, .. } => Some(*code),
            _ => None,
        }
    }
}
