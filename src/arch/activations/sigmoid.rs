/// Logistic activation, `1 / (1 + e^-z)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn f(&self, z: f32) -> f32 {
        1. / (1. + (-z).exp())
    }
}
