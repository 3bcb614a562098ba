mod bash;
pub mod exit;
mod recording;
mod traits;
mod types;

pub use bash::BashExecutor;
pub use recording::RecordingExecutor;
pub use traits::Executor;
pub use types::{ExecOptions, ExecOutput};
