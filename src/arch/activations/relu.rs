/// Rectified linear unit. Negative inputs and zero map to `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Relu;

impl Relu {
    pub fn f(&self, z: f32) -> f32 {
        if z > 0. { z } else { 0. }
    }
}
