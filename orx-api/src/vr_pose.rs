use crate::HmdMatrix34;

// Index of the HMD in the pose array returned by the compositor
pub const HMD_DEVICE_INDEX: usize = 0;

// Upper bound of tracked devices reported per frame
pub const MAX_TRACKED_DEVICE_COUNT: usize = 64;

/// A tracked device's position/orientation sample for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub struct TrackedDevicePose {
    // Transform from device space to the tracking origin
    pub device_to_absolute_tracking: HmdMatrix34,

    // Linear velocity in meters/second, tracking space
    pub velocity: [f32; 3],

    // Angular velocity in radians/second, tracking space
    pub angular_velocity: [f32; 3],

    pub pose_is_valid: bool,
    pub device_is_connected: bool,
}

impl Default for TrackedDevicePose {
    fn default() -> TrackedDevicePose {
        TrackedDevicePose {
            device_to_absolute_tracking: HmdMatrix34::default(),
            velocity: [0.0; 3],
            angular_velocity: [0.0; 3],
            pose_is_valid: false,
            device_is_connected: false,
        }
    }
}

impl TrackedDevicePose {
    pub fn valid(device_to_absolute_tracking: HmdMatrix34) -> TrackedDevicePose {
        TrackedDevicePose {
            device_to_absolute_tracking,
            pose_is_valid: true,
            device_is_connected: true,
            ..TrackedDevicePose::default()
        }
    }
}
