//! Fixed-weight feed-forward classifier of mental-health states from physiological signals.
//!
//! Five readings (tonic and phasic electrodermal activity, heart rate, heart-rate variability
//! and ambient light) go through an HRV history, z-score normalization, a 5→8→4 perceptron
//! and a confidence-thresholded decision.

pub mod arch;
pub mod classifier;
pub mod config;
pub mod error;
pub mod features;
pub mod normalize;
pub mod report;
pub mod runner;
pub mod sample;
pub mod status;

pub use arch::activations::{relu, sigmoid, tanh_activation};
pub use classifier::{MentalHealthNN, decide};
pub use config::{InputFormat, RunConfig};
pub use error::{NnErr, Result};
pub use report::{Prediction, Report};
pub use sample::SampleVector;
pub use status::{MentalHealthStatus, status_description, status_string};
