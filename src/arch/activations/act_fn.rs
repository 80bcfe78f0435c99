use super::{Relu, Sigmoid, Tanh};

/// The activation applied to the weighted sums of a layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActFn {
    Sigmoid(Sigmoid),
    Relu(Relu),
    Tanh(Tanh),
}

impl ActFn {
    pub fn sigmoid() -> Self {
        Self::Sigmoid(Sigmoid)
    }

    pub fn relu() -> Self {
        Self::Relu(Relu)
    }

    pub fn tanh() -> Self {
        Self::Tanh(Tanh)
    }

    pub fn f(&self, x: f32) -> f32 {
        match self {
            Self::Sigmoid(a) => a.f(x),
            Self::Relu(a) => a.f(x),
            Self::Tanh(a) => a.f(x),
        }
    }
}
