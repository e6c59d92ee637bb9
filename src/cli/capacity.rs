//! Capacity command.

use crate::cli::{output, Context};
use crate::core::capacity::{self, Capacity};
use crate::core::types::FleetId;
use crate::error::{Error, Result};

/// Validate and apply a fleet capacity.
///
/// Bounds are checked before the client is built.
pub fn execute(
    ctx: &Context,
    fleet_id: &str,
    instances: u32,
    min: Option<u32>,
    max: Option<u32>,
) -> Result<()> {
    let capacity = Capacity::new(instances, min, max)?;
    let plane = ctx.plane()?;

    capacity::update(&plane, &FleetId::new(fleet_id), &capacity).map_err(|e| match e {
        Error::Remote(remote) => Error::Other(format!("Error updating fleet capacity: {}", remote)),
        other => other,
    })?;

    output::success(&format!(
        "Fleet capacity updated successfully. New desired instances: {}",
        capacity.desired()
    ));
    Ok(())
}
