#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use self::mock::{MockColorBuffer, MockDrawer, MockGraphics, MockProgram, MockRenderTarget,
                     MockVRControlMsg, MockVRRuntime, MockVRRuntimeCreator, MockVRState};
#[cfg(feature = "mock")]
pub use self::mock::{DrawCall, GraphicsLog, GraphicsLogPtr};

#[cfg(feature = "openvr")]
mod openvr;
#[cfg(feature = "openvr")]
pub use self::openvr::OpenVRRuntimeCreator;
