// Events reported by the VR runtime between frames.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub enum VREvent {
    // A tracked device was connected. param: device index
    DeviceActivated(u32),

    // A tracked device was disconnected. param: device index
    DeviceDeactivated(u32),

    // Properties of a tracked device changed. param: device index
    DeviceUpdated(u32),

    // The user has put the headset on.
    Mounted,

    // The user has taken the headset off.
    Unmounted,

    // The runtime dashboard took input focus.
    Blur,

    // Input focus returned to the application.
    Focus,

    // Inter-pupillary distance changed, in meters.
    IpdChanged(f32),

    // The runtime asks the application to release the headset.
    Quit,
}
