pub mod activations;
pub mod layers;
pub mod params;

pub use params::{DEFAULT_PARAMS, HIDDEN, INPUTS, NetworkParams, Normalization, OUTPUTS};
