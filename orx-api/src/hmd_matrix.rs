use euclid::default::Transform3D;

/// Host-side 4x4 matrix.
///
/// Follows euclid's row-vector convention: a native column-vector matrix `N`
/// is stored as `Nᵀ`, so translations live in `m41`, `m42` and `m43`.
pub type Matrix44 = Transform3D<f64>;

// Row-major 3x4 affine transform as reported by the VR runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub struct HmdMatrix34 {
    pub m: [[f32; 4]; 3],
}

// Row-major 4x4 matrix as reported by the VR runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub struct HmdMatrix44 {
    pub m: [[f32; 4]; 4],
}

impl Default for HmdMatrix34 {
    fn default() -> HmdMatrix34 {
        HmdMatrix34 {
            m: [[1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0]],
        }
    }
}

impl Default for HmdMatrix44 {
    fn default() -> HmdMatrix44 {
        HmdMatrix44 {
            m: [[1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0]],
        }
    }
}

impl HmdMatrix34 {
    /// Builds a pure translation.
    pub fn from_translation(x: f32, y: f32, z: f32) -> HmdMatrix34 {
        let mut result = HmdMatrix34::default();
        result.m[0][3] = x;
        result.m[1][3] = y;
        result.m[2][3] = z;
        result
    }

    /// Converts the affine transform into a host matrix, appending the
    /// homogeneous row `[0, 0, 0, 1]`.
    pub fn to_matrix44(&self) -> Matrix44 {
        let m = &self.m;
        Transform3D::new(
            m[0][0] as f64, m[1][0] as f64, m[2][0] as f64, 0.0,
            m[0][1] as f64, m[1][1] as f64, m[2][1] as f64, 0.0,
            m[0][2] as f64, m[1][2] as f64, m[2][2] as f64, 0.0,
            m[0][3] as f64, m[1][3] as f64, m[2][3] as f64, 1.0,
        )
    }
}

impl HmdMatrix44 {
    /// Converts the matrix into a host matrix. Every native element is read
    /// exactly once.
    pub fn to_matrix44(&self) -> Matrix44 {
        let m = &self.m;
        Transform3D::new(
            m[0][0] as f64, m[1][0] as f64, m[2][0] as f64, m[3][0] as f64,
            m[0][1] as f64, m[1][1] as f64, m[2][1] as f64, m[3][1] as f64,
            m[0][2] as f64, m[1][2] as f64, m[2][2] as f64, m[3][2] as f64,
            m[0][3] as f64, m[1][3] as f64, m[2][3] as f64, m[3][3] as f64,
        )
    }
}

pub fn convert_hmd_matrix34(matrix: &HmdMatrix34) -> Matrix44 {
    matrix.to_matrix44()
}

pub fn convert_hmd_matrix44(matrix: &HmdMatrix44) -> Matrix44 {
    matrix.to_matrix44()
}
