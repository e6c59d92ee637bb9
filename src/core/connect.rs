//! Compute credential bootstrap.
//!
//! Resolves a fleet to its first instance, exchanges that instance for
//! temporary compute access credentials, and writes them as an environment
//! script:
//!
//! ```text
//! Start ──resolve──▶ Resolved ──exchange──▶ Exchanged ──write──▶ Done
//!   │                   │
//!   └── empty/error ────┴── empty/error ──▶ Stop (no-op)
//! ```
//!
//! Remote failures and empty results are reported on the console and end
//! the workflow without touching the script. Neither is an `Err`: only
//! local faults (console or file I/O) are.

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::env_script::EnvScript;
use crate::core::plane::ControlPlane;
use crate::core::types::{CredentialField, Credentials, FleetId, InstanceId};
use crate::error::Result;

/// Outcome of resolving a fleet to an instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(InstanceId),
    NotFound,
    RemoteError(String),
}

/// Outcome of exchanging an instance for credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    Issued(Credentials),
    /// The call succeeded without credentials.
    Empty,
    RemoteError(String),
}

/// Terminal state of the connect workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// Credentials were written to `path`.
    Written { instance: InstanceId, path: PathBuf },
    NoInstances,
    ResolveFailed(String),
    AccessFailed { instance: InstanceId, reason: String },
    NoCredentials { instance: InstanceId },
}

impl ConnectOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// Find the first instance of a fleet.
///
/// Requests a single instance. A listing failure is returned as
/// `Resolution::RemoteError`, not propagated.
pub fn resolve_instance(plane: &dyn ControlPlane, fleet: &FleetId) -> Resolution {
    match plane.list_instances(fleet, 1) {
        Ok(instances) => match instances.into_iter().next() {
            Some(record) => {
                debug!(
                    fleet = %fleet,
                    instance = %record.id,
                    status = ?record.status,
                    ip_address = ?record.ip_address,
                    operating_system = ?record.operating_system,
                    "instance resolved"
                );
                Resolution::Found(record.id)
            }
            None => {
                debug!(fleet = %fleet, "fleet has no instances");
                Resolution::NotFound
            }
        },
        Err(e) => {
            warn!(fleet = %fleet, error = %e, "instance listing failed");
            Resolution::RemoteError(e.to_string())
        }
    }
}

/// Request compute access credentials for one instance.
///
/// Credentials are returned exactly as issued. A failure is returned as
/// `Exchange::RemoteError`, not propagated.
pub fn exchange_credentials(
    plane: &dyn ControlPlane,
    fleet: &FleetId,
    instance: &InstanceId,
) -> Exchange {
    match plane.get_compute_access(fleet, instance) {
        Ok(Some(creds)) => {
            debug!(instance = %instance, access_key_id = %creds.access_key_id, "credentials issued");
            Exchange::Issued(creds)
        }
        Ok(None) => Exchange::Empty,
        Err(e) => {
            warn!(fleet = %fleet, instance = %instance, error = %e, "compute access failed");
            Exchange::RemoteError(e.to_string())
        }
    }
}

/// Run the full workflow, reporting progress on `console`.
///
/// # Errors
///
/// Returns error only for local I/O failures while writing the script or
/// the console.
pub fn run(
    plane: &dyn ControlPlane,
    fleet: &FleetId,
    script: &EnvScript,
    path: &Path,
    console: &mut dyn Write,
) -> Result<ConnectOutcome> {
    writeln!(console, "Getting the first instance of the fleet: {}", fleet)?;

    let instance = match resolve_instance(plane, fleet) {
        Resolution::Found(id) => id,
        Resolution::NotFound => {
            writeln!(console, "No instances found in the fleet.")?;
            return Ok(ConnectOutcome::NoInstances);
        }
        Resolution::RemoteError(msg) => {
            writeln!(console, "An error occurred: {}", msg)?;
            return Ok(ConnectOutcome::ResolveFailed(msg));
        }
    };

    writeln!(console, "Instance ID found: {}", instance)?;

    let creds = match exchange_credentials(plane, fleet, &instance) {
        Exchange::Issued(creds) => creds,
        Exchange::Empty => {
            writeln!(console, "No credentials returned for instance {}.", instance)?;
            return Ok(ConnectOutcome::NoCredentials { instance });
        }
        Exchange::RemoteError(reason) => {
            writeln!(console, "An error occurred: {}", reason)?;
            return Ok(ConnectOutcome::AccessFailed { instance, reason });
        }
    };

    writeln!(console, "Credentials obtained:")?;
    for field in CredentialField::ALL {
        writeln!(console, "{}: {}", field.label(), creds.get(field))?;
    }

    script.write(path, &creds, console)?;
    writeln!(console, "Environment variables written to {}", path.display())?;

    Ok(ConnectOutcome::Written {
        instance,
        path: path.to_path_buf(),
    })
}
