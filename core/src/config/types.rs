use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aws::SnapshotCleanup;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Executable invoked for every command, `aws` unless overridden.
    #[serde(default = "default_program")]
    pub program: String,

    /// Shell used to interpret the rendered command line (pipes into `jq`).
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Exported to the child as `AWS_PROFILE`.
    #[serde(default)]
    pub profile: Option<String>,

    /// Exported to the child as `AWS_DEFAULT_REGION`.
    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub env: BTreeMap<String, String>,

    #[serde(default = "default_stderr_tail_bytes")]
    pub stderr_tail_bytes: usize,

    #[serde(default)]
    pub snapshot_cleanup: SnapshotCleanup,
}

fn default_program() -> String {
    "aws".to_string()
}

fn default_shell() -> String {
    "bash".to_string()
}

fn default_stderr_tail_bytes() -> usize {
    4096
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            shell: default_shell(),
            profile: None,
            region: None,
            env: BTreeMap::new(),
            stderr_tail_bytes: default_stderr_tail_bytes(),
            snapshot_cleanup: SnapshotCleanup::default(),
        }
    }
}

impl AwsConfig {
    /// Environment handed to every child process.
    pub fn child_env(&self) -> BTreeMap<String, String> {
        let mut env = self.env.clone();
        if let Some(profile) = &self.profile {
            env.insert("AWS_PROFILE".to_string(), profile.clone());
        }
        if let Some(region) = &self.region {
            env.insert("AWS_DEFAULT_REGION".to_string(), region.clone());
        }
        env
    }
}
