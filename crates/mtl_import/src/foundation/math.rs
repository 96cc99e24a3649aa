//! Math utilities and types
//!
//! Material colors are stored as plain nalgebra vectors so downstream
//! consumers can feed them straight into shading code.

pub use nalgebra::Vector3;

/// RGB color triple; components are not clamped to `[0, 1]`
pub type Color3 = Vector3<f32>;

/// All-zero color, the value of any color field no directive has set
pub fn black() -> Color3 {
    Color3::zeros()
}
