mod load;
mod types;

pub use load::{apply_env_overrides, load_default, load_from, validate};
pub use types::AwsConfig;
