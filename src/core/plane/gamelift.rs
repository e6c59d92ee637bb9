//! Amazon GameLift control plane.
//!
//! Wraps the async `aws-sdk-gamelift` client behind the blocking
//! [`ControlPlane`] trait. A current-thread tokio runtime is built once with
//! the client and every call is driven to completion with `block_on`.
//!
//! Credentials and region come from the AWS default provider chain
//! (`AWS_ACCESS_KEY_ID`, `AWS_PROFILE`, `~/.aws/config`, ...), optionally
//! overridden by `[aws]` in `liftkit.toml` or `--region`.

use aws_config::BehaviorVersion;
use aws_sdk_gamelift::error::DisplayErrorContext;
use tracing::{debug, trace};

use super::{ControlPlane, RemoteResult};
use crate::core::capacity::Capacity;
use crate::core::config::AwsConfig;
use crate::core::types::{BuildRecord, Credentials, FleetId, InstanceId, InstanceRecord};
use crate::error::RemoteError;

/// GameLift client handle.
pub struct GameLift {
    runtime: tokio::runtime::Runtime,
    client: aws_sdk_gamelift::Client,
}

impl GameLift {
    /// Build a client from the default provider chain plus overrides.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Client` if the runtime cannot be created or no
    /// region can be resolved.
    pub fn connect(settings: &AwsConfig) -> RemoteResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RemoteError::Client(format!("failed to create runtime: {}", e)))?;

        let sdk_config = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest());
            if let Some(region) = &settings.region {
                loader = loader.region(aws_config::Region::new(region.clone()));
            }
            if let Some(profile) = &settings.profile {
                loader = loader.profile_name(profile);
            }
            loader.load().await
        });

        let Some(region) = sdk_config.region() else {
            return Err(RemoteError::Client(
                "no region configured (set AWS_REGION, aws.region or --region)".into(),
            ));
        };
        debug!(region = %region, "gamelift client ready");

        let client = aws_sdk_gamelift::Client::new(&sdk_config);
        Ok(Self { runtime, client })
    }
}

impl ControlPlane for GameLift {
    fn list_instances(&self, fleet: &FleetId, limit: i32) -> RemoteResult<Vec<InstanceRecord>> {
        trace!(fleet = %fleet, limit, "DescribeInstances");

        let output = self
            .runtime
            .block_on(
                self.client
                    .describe_instances()
                    .fleet_id(fleet.as_str())
                    .limit(limit)
                    .send(),
            )
            .map_err(|e| RemoteError::call("DescribeInstances", DisplayErrorContext(&e)))?;

        let records: Vec<InstanceRecord> = output
            .instances()
            .iter()
            .filter_map(|instance| {
                let id = instance.instance_id()?;
                Some(InstanceRecord {
                    id: InstanceId::new(id),
                    status: instance.status().map(|s| s.as_str().to_string()),
                    ip_address: instance.ip_address().map(str::to_string),
                    operating_system: instance.operating_system().map(|o| o.as_str().to_string()),
                })
            })
            .collect();

        trace!(count = records.len(), "DescribeInstances done");
        Ok(records)
    }

    fn get_compute_access(
        &self,
        fleet: &FleetId,
        instance: &InstanceId,
    ) -> RemoteResult<Option<Credentials>> {
        trace!(fleet = %fleet, instance = %instance, "GetComputeAccess");

        let output = self
            .runtime
            .block_on(
                self.client
                    .get_compute_access()
                    .fleet_id(fleet.as_str())
                    .compute_name(instance.as_str())
                    .send(),
            )
            .map_err(|e| RemoteError::call("GetComputeAccess", DisplayErrorContext(&e)))?;

        let Some(creds) = output.credentials() else {
            return Ok(None);
        };

        let field = |value: Option<&str>, name: &'static str| {
            value.map(str::to_string).ok_or(RemoteError::Incomplete {
                operation: "GetComputeAccess",
                field: name,
            })
        };

        Ok(Some(Credentials::new(
            field(creds.access_key_id(), "AccessKeyId")?,
            field(creds.secret_access_key(), "SecretAccessKey")?,
            field(creds.session_token(), "SessionToken")?,
        )))
    }

    fn list_builds(&self) -> RemoteResult<Vec<BuildRecord>> {
        trace!("ListBuilds");

        let output = self
            .runtime
            .block_on(self.client.list_builds().send())
            .map_err(|e| RemoteError::call("ListBuilds", DisplayErrorContext(&e)))?;

        Ok(output
            .builds()
            .iter()
            .filter_map(|build| {
                Some(BuildRecord {
                    id: build.build_id()?.to_string(),
                    name: build.name().map(str::to_string),
                    version: build.version().map(str::to_string),
                    status: build.status().map(|s| s.as_str().to_string()),
                })
            })
            .collect())
    }

    fn delete_build(&self, build_id: &str) -> RemoteResult<()> {
        trace!(build_id, "DeleteBuild");

        self.runtime
            .block_on(self.client.delete_build().build_id(build_id).send())
            .map_err(|e| RemoteError::call("DeleteBuild", DisplayErrorContext(&e)))?;
        Ok(())
    }

    fn update_fleet_capacity(&self, fleet: &FleetId, capacity: &Capacity) -> RemoteResult<()> {
        trace!(
            fleet = %fleet,
            desired = capacity.desired(),
            min = capacity.min(),
            max = capacity.max(),
            "UpdateFleetCapacity"
        );

        self.runtime
            .block_on(
                self.client
                    .update_fleet_capacity()
                    .fleet_id(fleet.as_str())
                    .desired_instances(capacity.desired())
                    .min_size(capacity.min())
                    .max_size(capacity.max())
                    .send(),
            )
            .map_err(|e| RemoteError::call("UpdateFleetCapacity", DisplayErrorContext(&e)))?;
        Ok(())
    }
}
