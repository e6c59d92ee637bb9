//! Core library components.
//!
//! Workflows take an explicit [`plane::ControlPlane`] handle and a console
//! writer so they can be driven by the CLI or by tests.

pub mod builds;
pub mod capacity;
pub mod config;
pub mod connect;
pub mod constants;
pub mod env_script;
pub mod node;
pub mod plane;
pub mod types;
