mod dense;
mod softmax;

pub use dense::Dense;
pub use softmax::Softmax;
