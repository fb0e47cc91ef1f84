//! Environment variable expansion for configuration strings.
//!
//! Supports `${VAR}` (errors if unset) and `${VAR:-default}` (falls back to
//! the default when unset). Expansion happens once at load time, so the
//! resulting [`Config`](crate::Config) never reads the environment again.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand environment variable references in a configuration string.
///
/// `field` names the config field for error messages (e.g., `"url"`).
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] if a referenced variable is unset and has
/// no default, or holds a non-unicode value.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env_with_context(value, lookup)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: e.cause,
        })
}

/// Variable lookup supporting the `VAR:-default` form inside braces.
fn lookup(name: &str) -> Result<Option<String>, String> {
    let (var, default) = match name.split_once(":-") {
        Some((var, default)) => (var, Some(default)),
        None => (name, None),
    };

    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => match default {
            Some(default) => Ok(Some(default.to_owned())),
            None => Err(format!("${{{var}}} not set")),
        },
        Err(std::env::VarError::NotUnicode(_)) => {
            Err(format!("${{{var}}} holds a non-unicode value"))
        }
    }
}
