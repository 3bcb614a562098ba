use bytes::Bytes;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// Pipe stdout into [`ExecOutput::stdout`] instead of inheriting it.
    pub capture_stdout: bool,
}

impl ExecOptions {
    pub fn capture() -> Self {
        Self {
            capture_stdout: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ExecOutput {
    pub exit_code: i32,
    pub stdout: Bytes,
}

impl ExecOutput {
    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}
