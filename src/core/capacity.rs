//! Fleet capacity updates.

use tracing::debug;

use crate::core::plane::ControlPlane;
use crate::core::types::FleetId;
use crate::error::{CapacityError, Result};

/// Validated desired/min/max instance counts.
///
/// Counts are stored as `i32`, the width the control plane accepts, and
/// always satisfy `min <= desired <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    desired: i32,
    min: i32,
    max: i32,
}

impl Capacity {
    /// Build a capacity where `min` and `max` default to `desired`.
    ///
    /// # Errors
    ///
    /// Returns `CapacityError` if a count exceeds `i32::MAX` or the bounds
    /// do not bracket the desired count.
    pub fn new(
        desired: u32,
        min: Option<u32>,
        max: Option<u32>,
    ) -> std::result::Result<Self, CapacityError> {
        let min = min.unwrap_or(desired);
        let max = max.unwrap_or(desired);

        if min > desired {
            return Err(CapacityError::MinAboveDesired { min, desired });
        }
        if desired > max {
            return Err(CapacityError::DesiredAboveMax { desired, max });
        }

        let narrow = |n: u32| i32::try_from(n).map_err(|_| CapacityError::OutOfRange(n));
        Ok(Self {
            desired: narrow(desired)?,
            min: narrow(min)?,
            max: narrow(max)?,
        })
    }

    /// Capacity pinned to exactly `instances`.
    pub fn fixed(instances: u32) -> std::result::Result<Self, CapacityError> {
        Self::new(instances, None, None)
    }

    pub fn desired(&self) -> i32 {
        self.desired
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }
}

/// Apply a capacity to a fleet.
///
/// # Errors
///
/// Returns `RemoteError` if the update call fails.
pub fn update(plane: &dyn ControlPlane, fleet: &FleetId, capacity: &Capacity) -> Result<()> {
    debug!(fleet = %fleet, ?capacity, "updating fleet capacity");
    plane.update_fleet_capacity(fleet, capacity)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_pins_all_bounds() {
        let c = Capacity::fixed(3).unwrap();
        assert_eq!((c.desired(), c.min(), c.max()), (3, 3, 3));
    }

    #[test]
    fn test_explicit_bounds() {
        let c = Capacity::new(2, Some(1), Some(5)).unwrap();
        assert_eq!((c.desired(), c.min(), c.max()), (2, 1, 5));
    }

    #[test]
    fn test_zero_is_valid() {
        let c = Capacity::fixed(0).unwrap();
        assert_eq!(c.desired(), 0);
    }

    #[test]
    fn test_min_above_desired() {
        assert_eq!(
            Capacity::new(1, Some(2), None),
            Err(CapacityError::MinAboveDesired { min: 2, desired: 1 })
        );
    }

    #[test]
    fn test_desired_above_max() {
        assert_eq!(
            Capacity::new(4, None, Some(3)),
            Err(CapacityError::DesiredAboveMax { desired: 4, max: 3 })
        );
    }

    #[test]
    fn test_out_of_range() {
        let big = i32::MAX as u32 + 1;
        assert_eq!(Capacity::fixed(big), Err(CapacityError::OutOfRange(big)));
    }
}
