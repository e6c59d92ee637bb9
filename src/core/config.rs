//! Configuration file management.
//!
//! Reads the optional `liftkit.toml`. Every section and field has a default,
//! so running without a config file writes `env.sh` with the AWS variable names.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Control-plane client settings
    pub aws: AwsConfig,
    /// Environment script settings
    pub env: EnvConfig,
    /// Runtime download settings
    pub node: NodeConfig,
}

/// Control-plane client settings.
///
/// Unset fields fall through to the AWS default provider chain.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct AwsConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
}

/// Environment script settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Output path of the generated script
    pub file: PathBuf,
    /// First line of the script
    pub interpreter: String,
    /// Variable name per credential field
    pub vars: EnvVars,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(constants::ENV_FILE),
            interpreter: constants::INTERPRETER.to_string(),
            vars: EnvVars::default(),
        }
    }
}

/// Mapping from credential field to exported variable name.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct EnvVars {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl Default for EnvVars {
    fn default() -> Self {
        Self {
            access_key_id: constants::ACCESS_KEY_ID_VAR.to_string(),
            secret_access_key: constants::SECRET_ACCESS_KEY_VAR.to_string(),
            session_token: constants::SESSION_TOKEN_VAR.to_string(),
        }
    }
}

/// Runtime download settings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    pub dist_url: String,
    /// Platform suffix; detected from the host when unset
    pub platform: Option<String>,
    pub target_dir: PathBuf,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            dist_url: constants::NODE_DIST_URL.to_string(),
            platform: None,
            target_dir: PathBuf::from(constants::NODE_TARGET_DIR),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Without one,
    /// `liftkit.toml` in the current directory is used when present and
    /// defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for a missing explicit path,
    /// `ConfigError::Parse` for malformed TOML and `ConfigError::Invalid`
    /// when validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(constants::CONFIG_FILE), false),
        };

        if !path.exists() {
            if explicit {
                return Err(ConfigError::NotFound(path.display().to_string()).into());
            }
            debug!("no config file, using defaults");
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        Self::parse(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration contents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable name is not a shell
    /// identifier, names repeat, or the script path or interpreter is unusable.
    pub fn validate(&self) -> Result<()> {
        let env = &self.env;

        if env.file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("env.file must not be empty".into()).into());
        }
        if !env.interpreter.starts_with("#!") {
            return Err(ConfigError::Invalid(format!(
                "env.interpreter must start with '#!', got {:?}",
                env.interpreter
            ))
            .into());
        }

        let names = [
            &env.vars.access_key_id,
            &env.vars.secret_access_key,
            &env.vars.session_token,
        ];
        for name in names {
            if !is_shell_identifier(name) {
                return Err(ConfigError::Invalid(format!(
                    "invalid variable name {:?}: must match [A-Za-z_][A-Za-z0-9_]*",
                    name
                ))
                .into());
            }
        }
        if names[0] == names[1] || names[0] == names[2] || names[1] == names[2] {
            return Err(
                ConfigError::Invalid("env.vars names must be distinct".into()).into(),
            );
        }

        if self.node.dist_url.trim().is_empty() {
            return Err(ConfigError::Invalid("node.dist_url must not be empty".into()).into());
        }

        Ok(())
    }
}

fn is_shell_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.env.file, PathBuf::from("env.sh"));
        assert_eq!(config.env.interpreter, "#!/bin/bash");
        assert_eq!(config.env.vars, EnvVars::default());
        assert_eq!(config.node.dist_url, "https://nodejs.org/dist");
        assert!(config.aws.region.is_none());
    }

    #[test]
    fn test_partial_vars_override() {
        let config = Config::parse(
            r#"
            [env.vars]
            session_token = "AWS_SECURITY_TOKEN"
            "#,
        )
        .unwrap();
        assert_eq!(config.env.vars.access_key_id, "AWS_ACCESS_KEY_ID");
        assert_eq!(config.env.vars.session_token, "AWS_SECURITY_TOKEN");
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r##"
            [aws]
            region = "us-east-1"
            profile = "ops"

            [env]
            file = "out/creds.sh"
            interpreter = "#!/usr/bin/env bash"

            [node]
            platform = "linux-x64"
            target_dir = "runtimes"
            "##,
        )
        .unwrap();
        assert_eq!(config.aws.region.as_deref(), Some("us-east-1"));
        assert_eq!(config.aws.profile.as_deref(), Some("ops"));
        assert_eq!(config.env.file, PathBuf::from("out/creds.sh"));
        assert_eq!(config.node.platform.as_deref(), Some("linux-x64"));
        assert_eq!(config.node.target_dir, PathBuf::from("runtimes"));
    }

    #[test]
    fn test_rejects_invalid_var_name() {
        let err = Config::parse(
            r#"
            [env.vars]
            access_key_id = "1BAD"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_duplicate_var_names() {
        let err = Config::parse(
            r#"
            [env.vars]
            access_key_id = "KEY"
            secret_access_key = "KEY"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }

    #[test]
    fn test_rejects_missing_interpreter_marker() {
        let err = Config::parse(
            r#"
            [env]
            interpreter = "bash"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = Config::parse("[aws]\nregoin = \"x\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[aws]\nregion = \"eu-west-1\"\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_shell_identifier() {
        assert!(is_shell_identifier("AWS_ACCESS_KEY_ID"));
        assert!(is_shell_identifier("_x1"));
        assert!(!is_shell_identifier(""));
        assert!(!is_shell_identifier("A-B"));
        assert!(!is_shell_identifier("A B"));
    }
}
