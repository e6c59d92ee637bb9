//! Control-plane abstraction.
//!
//! [`ControlPlane`] names the remote capabilities liftkit consumes, independent
//! of any SDK. The GameLift implementation lives in [`gamelift`]; tests supply
//! in-memory fakes.
//!
//! ## Lifecycle
//!
//! A client is constructed once per process by the CLI layer and passed by
//! reference into each workflow. Construction failures are not retried.

pub mod gamelift;

pub use gamelift::GameLift;

use crate::core::capacity::Capacity;
use crate::core::types::{BuildRecord, Credentials, FleetId, InstanceId, InstanceRecord};
use crate::error::RemoteError;

/// Result of a single remote call.
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Remote capabilities of the game-hosting control plane.
///
/// Every call blocks until the service answers or the transport times out.
pub trait ControlPlane {
    /// List up to `limit` instances of a fleet.
    fn list_instances(&self, fleet: &FleetId, limit: i32) -> RemoteResult<Vec<InstanceRecord>>;

    /// Request temporary credentials scoped to one instance of a fleet.
    ///
    /// `Ok(None)` means the call succeeded but carried no credentials.
    fn get_compute_access(
        &self,
        fleet: &FleetId,
        instance: &InstanceId,
    ) -> RemoteResult<Option<Credentials>>;

    /// List the builds registered in the current region (single page).
    fn list_builds(&self) -> RemoteResult<Vec<BuildRecord>>;

    /// Delete one build.
    fn delete_build(&self, build_id: &str) -> RemoteResult<()>;

    /// Set the desired, minimum and maximum instance counts of a fleet.
    fn update_fleet_capacity(&self, fleet: &FleetId, capacity: &Capacity) -> RemoteResult<()>;
}
