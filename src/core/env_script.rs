//! Environment script rendering.
//!
//! Turns a credential triple into a shell-sourceable script:
//!
//! ```text
//! #!/bin/bash
//!
//! export AWS_ACCESS_KEY_ID=<value>
//! export AWS_SECRET_ACCESS_KEY=<value>
//! export AWS_SESSION_TOKEN=<value>
//! ```
//!
//! Values are inserted verbatim. A value containing shell metacharacters
//! produces a broken script; the control plane does not issue such values.

use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::core::config::{EnvConfig, EnvVars};
use crate::core::constants;
use crate::core::types::{CredentialField, Credentials};
use crate::error::Result;

/// Template for the generated environment script.
#[derive(Debug, Clone)]
pub struct EnvScript {
    interpreter: String,
    vars: Vec<(CredentialField, String)>,
}

impl Default for EnvScript {
    fn default() -> Self {
        Self::new(constants::INTERPRETER, &EnvVars::default())
    }
}

impl EnvScript {
    /// Build a template from an interpreter marker and a variable mapping.
    pub fn new(interpreter: impl Into<String>, vars: &EnvVars) -> Self {
        let vars = CredentialField::ALL
            .into_iter()
            .map(|field| {
                let name = match field {
                    CredentialField::AccessKeyId => &vars.access_key_id,
                    CredentialField::SecretAccessKey => &vars.secret_access_key,
                    CredentialField::SessionToken => &vars.session_token,
                };
                (field, name.clone())
            })
            .collect();

        Self {
            interpreter: interpreter.into(),
            vars,
        }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::new(config.interpreter.clone(), &config.vars)
    }

    /// Variable name per field, in export order.
    pub fn vars(&self) -> &[(CredentialField, String)] {
        &self.vars
    }

    /// One `export NAME=value` line per field, without trailing newline.
    pub fn export_lines(&self, creds: &Credentials) -> Vec<String> {
        self.vars
            .iter()
            .map(|(field, name)| format!("export {}={}", name, creds.get(*field)))
            .collect()
    }

    /// Full script text.
    pub fn render(&self, creds: &Credentials) -> String {
        let mut out = format!("{}\n\n", self.interpreter);
        for line in self.export_lines(creds) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Write the script to `path`, replacing any previous content, and echo
    /// each export line to `echo`.
    ///
    /// The content is rendered before the file is opened. On Unix the file
    /// is owner read/write only (`0600`).
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be written or the echo fails.
    pub fn write(&self, path: &Path, creds: &Credentials, echo: &mut dyn Write) -> Result<()> {
        let content = self.render(creds);
        debug!(path = %path.display(), bytes = content.len(), "writing environment script");

        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;

            // mode() only applies on create
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(path, &content)?;
        }

        for line in self.export_lines(creds) {
            writeln!(echo, "{}", line)?;
        }

        Ok(())
    }
}
