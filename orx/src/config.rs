/// Settings of the VR session and its frame orchestration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde-serialization", serde(default))]
pub struct VRConfig {
    // Clipping planes used when querying the per-eye projection matrices
    pub near_z: f32,
    pub far_z: f32,

    // Draw the reference grid and axis cross in each eye pass
    pub show_grid: bool,

    // Used when the runtime does not report a recommended render target size
    pub fallback_render_target_size: (u32, u32),

    // Height of the grid plane relative to the tracking origin, in meters
    pub grid_offset_y: f64,
}

impl Default for VRConfig {
    fn default() -> VRConfig {
        VRConfig {
            near_z: 0.1,
            far_z: 500.0,
            show_grid: true,
            fallback_render_target_size: (2048, 2048),
            grid_offset_y: -2.0,
        }
    }
}

impl VRConfig {
    pub fn render_target_size(&self, recommended: (u32, u32)) -> (u32, u32) {
        if recommended.0 == 0 || recommended.1 == 0 {
            self.fallback_render_target_size
        } else {
            recommended
        }
    }
}
