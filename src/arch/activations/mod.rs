mod act_fn;
mod relu;
mod sigmoid;
mod tanh;

pub use act_fn::ActFn;
pub use relu::Relu;
pub use sigmoid::Sigmoid;
pub use tanh::Tanh;

/// `1 / (1 + e^-x)`.
pub fn sigmoid(x: f32) -> f32 {
    Sigmoid.f(x)
}

/// `max(0, x)`.
pub fn relu(x: f32) -> f32 {
    Relu.f(x)
}

/// `tanh(x)`. Not used by the classifier's forward pass, kept for alternate architectures.
pub fn tanh_activation(x: f32) -> f32 {
    Tanh.f(x)
}
