use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphicsError {
    #[error("invalid size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("failed to allocate {what} ({width}x{height}): {reason}")]
    Allocation {
        what: &'static str,
        width: u32,
        height: u32,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum VRError {
    // Runtime not installed, no headset present, or an interface could not be obtained
    #[error("VR runtime initialization failed: {0}")]
    Init(String),

    #[error("VR runtime is not initialized")]
    NotInitialized,

    #[error("VR compositor error: {0}")]
    Compositor(String),

    #[error("no valid pose for the head-mounted display")]
    NoPose,

    #[error(transparent)]
    Graphics(#[from] GraphicsError),
}

/// Error returned by extension hooks. Reaching the host loop means the
/// failure is not recoverable for the running program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtensionError {
    #[error(transparent)]
    Graphics(#[from] GraphicsError),

    #[error(transparent)]
    VR(#[from] VRError),
}
