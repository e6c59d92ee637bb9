//! In-memory control plane for workflow tests.

use std::cell::RefCell;

use liftkit::core::capacity::Capacity;
use liftkit::core::plane::{ControlPlane, RemoteResult};
use liftkit::core::types::{BuildRecord, Credentials, FleetId, InstanceId, InstanceRecord};
use liftkit::error::RemoteError;

/// A recorded remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListInstances { fleet: String, limit: i32 },
    GetComputeAccess { fleet: String, instance: String },
    ListBuilds,
    DeleteBuild(String),
    UpdateFleetCapacity {
        fleet: String,
        desired: i32,
        min: i32,
        max: i32,
    },
}

type Triple = (&'static str, &'static str, &'static str);

/// Scripted fake: fixed responses, every call recorded.
pub struct FakePlane {
    /// Instance ids returned by the listing, or an error message
    pub instances: Result<Vec<&'static str>, &'static str>,
    /// Issued triple, `None` for an empty response, or an error message
    pub access: Result<Option<Triple>, &'static str>,
    /// Build ids returned by the listing
    pub builds: Vec<&'static str>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakePlane {
    /// Fleet with the given instances issuing the given triple.
    pub fn issuing(instances: &[&'static str], triple: Triple) -> Self {
        Self {
            instances: Ok(instances.to_vec()),
            access: Ok(Some(triple)),
            builds: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Fleet with the given instances whose compute access fails.
    pub fn denying(instances: &[&'static str], message: &'static str) -> Self {
        Self {
            access: Err(message),
            ..Self::issuing(instances, ("", "", ""))
        }
    }

    /// Fleet whose instance listing fails.
    pub fn unreachable(message: &'static str) -> Self {
        Self {
            instances: Err(message),
            ..Self::issuing(&[], ("", "", ""))
        }
    }

    /// Recorded calls so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Whether compute access was ever requested.
    pub fn requested_access(&self) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|c| matches!(c, Call::GetComputeAccess { .. }))
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl ControlPlane for FakePlane {
    fn list_instances(&self, fleet: &FleetId, limit: i32) -> RemoteResult<Vec<InstanceRecord>> {
        self.record(Call::ListInstances {
            fleet: fleet.to_string(),
            limit,
        });
        match &self.instances {
            Ok(ids) => Ok(ids
                .iter()
                .take(limit as usize)
                .map(|id| InstanceRecord::new(*id))
                .collect()),
            Err(msg) => Err(RemoteError::call("DescribeInstances", msg)),
        }
    }

    fn get_compute_access(
        &self,
        fleet: &FleetId,
        instance: &InstanceId,
    ) -> RemoteResult<Option<Credentials>> {
        self.record(Call::GetComputeAccess {
            fleet: fleet.to_string(),
            instance: instance.to_string(),
        });
        match &self.access {
            Ok(Some((a, s, t))) => Ok(Some(Credentials::new(*a, *s, *t))),
            Ok(None) => Ok(None),
            Err(msg) => Err(RemoteError::call("GetComputeAccess", msg)),
        }
    }

    fn list_builds(&self) -> RemoteResult<Vec<BuildRecord>> {
        self.record(Call::ListBuilds);
        Ok(self.builds.iter().map(|id| BuildRecord::new(*id)).collect())
    }

    fn delete_build(&self, build_id: &str) -> RemoteResult<()> {
        self.record(Call::DeleteBuild(build_id.to_string()));
        Ok(())
    }

    fn update_fleet_capacity(&self, fleet: &FleetId, capacity: &Capacity) -> RemoteResult<()> {
        self.record(Call::UpdateFleetCapacity {
            fleet: fleet.to_string(),
            desired: capacity.desired(),
            min: capacity.min(),
            max: capacity.max(),
        });
        Ok(())
    }
}
