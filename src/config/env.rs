//! SDK key loading from the env file.

use std::fmt;
use std::path::Path;

use crate::config::loader::ConfigError;

/// Vendor SDK key. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SdkKey(String);

impl SdkKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SdkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SdkKey(<redacted>)")
    }
}

/// Load `env_file` into the process environment and read the key from `var`.
///
/// Variables already set in the environment take precedence over the file.
/// A missing file is an error, as is a missing or blank variable.
pub fn load_sdk_key(env_file: &Path, var: &str) -> Result<SdkKey, ConfigError> {
    dotenvy::from_path(env_file).map_err(|source| ConfigError::EnvFile {
        path: env_file.to_path_buf(),
        source,
    })?;

    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => Ok(SdkKey(value.trim().to_string())),
        _ => Err(ConfigError::MissingSdkKey(var.to_string())),
    }
}
