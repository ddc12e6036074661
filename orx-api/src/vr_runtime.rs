use crate::{Eye, HmdMatrix34, HmdMatrix44, TrackedDevicePose, VREvent, VRError, VRTexture};

/// Boundary to a native VR runtime and its compositor.
///
/// All calls happen on the thread owning the graphics context.
pub trait VRRuntime {
    /// Opens the runtime as a scene application. Calling it again after a
    /// successful initialization is a no-op.
    fn initialize(&mut self) -> Result<(), VRError>;

    /// Releases the runtime handle. Must tolerate being called when not
    /// initialized.
    fn shutdown(&mut self);

    fn is_initialized(&self) -> bool;

    /// Location of the installed runtime, if the runtime reports one.
    fn runtime_path(&self) -> Option<String> {
        None
    }

    fn recommended_render_target_size(&self) -> Result<(u32, u32), VRError>;

    fn projection_matrix(&self, eye: Eye, near_z: f32, far_z: f32) -> Result<HmdMatrix44, VRError>;

    fn eye_to_head_transform(&self, eye: Eye) -> Result<HmdMatrix34, VRError>;

    /// Blocks until the compositor hands out the predicted poses for the
    /// next frame. This is the frame pacing point.
    fn wait_get_poses(&mut self) -> Result<Vec<TrackedDevicePose>, VRError>;

    fn submit(&mut self, eye: Eye, texture: &VRTexture) -> Result<(), VRError>;

    /// Drains the events the runtime queued since the last call.
    fn poll_events(&mut self) -> Vec<VREvent>;
}

pub trait VRRuntimeCreator {
    fn new_runtime(&self) -> Box<dyn VRRuntime>;
}
