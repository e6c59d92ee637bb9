//! Build listing and purge.

use std::io::Write;
use tracing::{debug, info};

use crate::core::plane::ControlPlane;
use crate::core::types::BuildRecord;
use crate::error::Result;

/// List builds with a single call.
pub fn list(plane: &dyn ControlPlane) -> Result<Vec<BuildRecord>> {
    let builds = plane.list_builds()?;
    debug!(count = builds.len(), "builds listed");
    Ok(builds)
}

/// Delete every build in `builds`, in order.
///
/// Prints `Deleting build with ID: <id>` before each call. Stops at the
/// first failure; builds already deleted stay deleted.
///
/// # Errors
///
/// Returns the first `RemoteError`, or an I/O error from the console.
pub fn purge(
    plane: &dyn ControlPlane,
    builds: &[BuildRecord],
    console: &mut dyn Write,
) -> Result<usize> {
    let mut deleted = 0;
    for build in builds {
        writeln!(console, "Deleting build with ID: {}", build.id)?;
        plane.delete_build(&build.id)?;
        info!(build_id = %build.id, "build deleted");
        deleted += 1;
    }
    Ok(deleted)
}
