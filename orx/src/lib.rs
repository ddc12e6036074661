extern crate euclid;
#[macro_use]
extern crate log;
#[cfg(feature = "openvr")]
extern crate openvr_rs;
extern crate orx_api;
#[cfg(feature = "serde-serialization")]
extern crate serde;

pub mod api;
pub mod camera;
pub mod config;
pub mod extension_manager;
pub mod filter_extension;
pub mod hmd;
pub mod vr_extension;
pub mod vr_frame;
pub mod vr_session;

pub use orx_api::*;
pub use camera::{Orbital, OrbitalCamera, OrbitalControls};
pub use config::VRConfig;
pub use extension_manager::ExtensionManager;
pub use filter_extension::{extend_with_filter, FilterExtension};
pub use hmd::{HmdEvent, HmdEvents, HmdState, Propagation};
pub use vr_extension::VRExtension;
pub use vr_frame::GridOverlay;
pub use vr_session::{SessionState, VRSession};
