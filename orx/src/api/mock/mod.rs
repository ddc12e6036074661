mod drawer;
mod graphics;
mod program;
mod runtime;

pub use self::drawer::{DrawCall, MockDrawer};
pub use self::graphics::{GraphicsLog, GraphicsLogPtr, MockColorBuffer, MockGraphics, MockRenderTarget};
pub use self::program::MockProgram;
pub use self::runtime::{MockVRRuntime, MockVRState};

use orx_api::{HmdMatrix34, HmdMatrix44, VREvent, VRRuntime, VRRuntimeCreator};
use std::cell::RefCell;
use std::rc::Rc;

pub struct MockVRRuntimeCreator;

impl MockVRRuntimeCreator {
    pub fn new() -> Box<dyn VRRuntimeCreator> {
        Box::new(MockVRRuntimeCreator)
    }

    /// A runtime plus a handle to its state, to script the headset and
    /// inspect what the session did with it.
    pub fn new_runtime_with_remote() -> (Box<dyn VRRuntime>, Rc<RefCell<MockVRState>>) {
        let runtime = MockVRRuntime::new();
        let state = runtime.state_handle();
        (Box::new(runtime), state)
    }
}

impl VRRuntimeCreator for MockVRRuntimeCreator {
    fn new_runtime(&self) -> Box<dyn VRRuntime> {
        Box::new(MockVRRuntime::new())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MockVRControlMsg {
    SetHeadPose(HmdMatrix34),
    // Head pose reported but flagged invalid
    LoseTracking,
    // No pose at all for the HMD
    RemoveHeadPose,
    SetProjectionMatrices(HmdMatrix44, HmdMatrix44),
    SetEyeToHeadTransforms(HmdMatrix34, HmdMatrix34),
    SetRenderTargetSize(u32, u32),
    FailInit(String),
    FailQueries(bool),
    FailPoses(bool),
    FailSubmit(bool),
    QueueEvent(VREvent),
}
