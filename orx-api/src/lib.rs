extern crate euclid;
#[cfg(feature = "serde-serialization")]
extern crate serde;
extern crate thiserror;

pub mod color;
pub mod drawer;
pub mod error;
pub mod extension;
pub mod filter;
pub mod graphics;
pub mod hmd_matrix;
pub mod program;
pub mod vr_eye;
pub mod vr_event;
pub mod vr_pose;
pub mod vr_runtime;
pub mod vr_texture;

pub use color::ColorRGBa;
pub use drawer::{isolated, Drawer};
pub use error::{ExtensionError, GraphicsError, VRError};
pub use extension::{Extension, ExtensionPtr};
pub use filter::Filter;
pub use graphics::{ColorBuffer, GraphicsContext, RenderTarget, RenderTargetDescriptor};
pub use hmd_matrix::{convert_hmd_matrix34, convert_hmd_matrix44, HmdMatrix34, HmdMatrix44, Matrix44};
pub use program::{InputEvent, Key, MouseButton, Program};
pub use vr_eye::Eye;
pub use vr_event::VREvent;
pub use vr_pose::{TrackedDevicePose, HMD_DEVICE_INDEX, MAX_TRACKED_DEVICE_COUNT};
pub use vr_runtime::{VRRuntime, VRRuntimeCreator};
pub use vr_texture::{ColorSpace, TextureType, VRTexture};

// Geometry types used across the drawing interfaces
pub use euclid::default::{Point3D, Vector3D};
