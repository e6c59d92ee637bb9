//! Constants used throughout liftkit.
//!
//! Centralizes fixed file names and defaults.

/// Configuration file looked up in the current directory.
pub const CONFIG_FILE: &str = "liftkit.toml";

/// Generated environment script.
pub const ENV_FILE: &str = "env.sh";

/// Interpreter marker written as the first line of the environment script.
pub const INTERPRETER: &str = "#!/bin/bash";

/// Default variable names for the compute-access credential triple.
pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";

/// Node.js distribution host.
pub const NODE_DIST_URL: &str = "https://nodejs.org/dist";

/// Directory runtime archives are downloaded into.
pub const NODE_TARGET_DIR: &str = "node_dist";

/// Environment variable controlling the log filter.
pub const LOG_ENV: &str = "LIFTKIT_LOG";
