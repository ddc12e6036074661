#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub enum TextureType {
    OpenGL,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub enum ColorSpace {
    Auto,
    Gamma,
    Linear,
}

/// Native texture handed to the compositor for one eye.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub struct VRTexture {
    pub handle: u64,
    pub texture_type: TextureType,
    pub color_space: ColorSpace,
    // uMin, vMin, uMax, vMax
    pub bounds: [f32; 4],
}

impl VRTexture {
    pub fn opengl(handle: u64) -> VRTexture {
        VRTexture {
            handle: handle,
            texture_type: TextureType::OpenGL,
            color_space: ColorSpace::Gamma,
            bounds: [0.0, 0.0, 1.0, 1.0],
        }
    }
}
