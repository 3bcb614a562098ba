use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

use super::types::AwsConfig;

const LOCAL_CONFIG: &str = "e2e-aws.toml";

pub fn load_default() -> Result<AwsConfig, ConfigError> {
    let mut cfg = match default_path() {
        Some(path) => read_file(&path)?,
        None => AwsConfig::default(),
    };
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    validate(&cfg)?;
    Ok(cfg)
}

pub fn load_from(path: &str) -> Result<AwsConfig, ConfigError> {
    let expanded = shellexpand::tilde(path).into_owned();
    let path = PathBuf::from(expanded);
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }
    let mut cfg = read_file(&path)?;
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    validate(&cfg)?;
    Ok(cfg)
}

fn default_path() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join("e2e-aws").join("config.toml"))
        .filter(|p| p.exists())
}

fn read_file(path: &Path) -> Result<AwsConfig, ConfigError> {
    let shown = path.display().to_string();
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: shown.clone(),
        source,
    })?;
    let cfg = toml::from_str::<AwsConfig>(&s).map_err(|source| ConfigError::Parse {
        path: shown.clone(),
        source,
    })?;
    tracing::debug!(target: "e2e_aws.config", path = %shown, "loaded config file");
    Ok(cfg)
}

/// Applies `E2E_AWS_*` overrides; blank values are ignored.
pub fn apply_env_overrides<F>(cfg: &mut AwsConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get("E2E_AWS_PROGRAM") {
        cfg.program = v;
    }
    if let Some(v) = get("E2E_AWS_SHELL") {
        cfg.shell = v;
    }
    if let Some(v) = get("E2E_AWS_PROFILE") {
        cfg.profile = Some(v);
    }
    if let Some(v) = get("E2E_AWS_REGION") {
        cfg.region = Some(v);
    }
}

pub fn validate(cfg: &AwsConfig) -> Result<(), ConfigError> {
    if cfg.program.trim().is_empty() {
        return Err(ConfigError::Validation("program must not be empty".into()));
    }
    if cfg.shell.trim().is_empty() {
        return Err(ConfigError::Validation("shell must not be empty".into()));
    }
    Ok(())
}
