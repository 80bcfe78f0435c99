//! The fixed parameters of the classifier network.
//!
//! Nothing here is ever written at runtime: the classifier borrows a `&'static NetworkParams`
//! and views its tables through `ndarray`.

/// Number of input features: eda tonic, eda phasic, bpm, hrv and lux, in that order.
pub const INPUTS: usize = 5;

/// Number of hidden units.
pub const HIDDEN: usize = 8;

/// Number of output classes, index-aligned with `MentalHealthStatus`.
pub const OUTPUTS: usize = 4;

/// Reference statistics used to z-score a single feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: f32,
    pub std: f32,
}

impl Normalization {
    pub const fn new(mean: f32, std: f32) -> Self {
        Self { mean, std }
    }
}

/// Weights, biases and normalization constants of the 5→8→4 network.
///
/// Weight matrices are stored `[input][output]`, so `w1[j][i]` connects input `j` to hidden
/// unit `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkParams {
    pub w1: [[f32; HIDDEN]; INPUTS],
    pub b1: [f32; HIDDEN],
    pub w2: [[f32; OUTPUTS]; HIDDEN],
    pub b2: [f32; OUTPUTS],
    pub norm: [Normalization; INPUTS],
}

/// The reference parameter set shipped with the device firmware.
pub static DEFAULT_PARAMS: NetworkParams = NetworkParams {
    w1: [
        [0.452, -0.223, 0.318, -0.185, 0.267, -0.341, 0.198, -0.276],
        [-0.336, 0.284, -0.157, 0.428, -0.231, 0.374, -0.298, 0.185],
        [0.127, -0.376, 0.251, -0.194, 0.329, -0.146, 0.275, -0.218],
        [-0.212, 0.345, -0.289, 0.152, -0.327, 0.173, -0.246, 0.305],
        [0.178, -0.123, 0.237, -0.314, 0.156, -0.283, 0.224, -0.167],
    ],
    b1: [0.126, -0.087, 0.054, -0.032, 0.078, -0.045, 0.063, -0.091],
    w2: [
        [0.387, -0.253, 0.176, -0.312],
        [-0.428, 0.335, -0.227, 0.284],
        [0.192, -0.274, 0.356, -0.147],
        [-0.235, 0.167, -0.318, 0.294],
        [0.312, -0.186, 0.248, -0.273],
        [-0.263, 0.221, -0.164, 0.349],
        [0.179, -0.237, 0.284, -0.198],
        [-0.324, 0.176, -0.213, 0.267],
    ],
    b2: [0.053, -0.034, 0.027, -0.018],
    norm: [
        Normalization::new(512.0, 128.0), // eda tonic
        Normalization::new(0.0, 50.0),    // eda phasic
        Normalization::new(75.0, 12.0),   // bpm
        Normalization::new(65.0, 25.0),   // hrv
        Normalization::new(250.0, 180.0), // lux
    ],
};
