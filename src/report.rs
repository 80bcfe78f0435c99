use serde::{Deserialize, Serialize};

use crate::{MentalHealthStatus, arch::OUTPUTS};

/// The outcome of a single classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub status: MentalHealthStatus,
    pub probabilities: [f32; OUTPUTS],
}

impl Prediction {
    pub fn new(status: MentalHealthStatus, probabilities: [f32; OUTPUTS]) -> Self {
        Self {
            status,
            probabilities,
        }
    }

    /// Returns the probability the network assigned to `status`.
    pub fn probability_of(&self, status: MentalHealthStatus) -> f32 {
        self.probabilities[status.index()]
    }

    /// Returns the record handed to the display and serial layers.
    pub fn report(&self) -> Report {
        Report {
            code: self.status.into(),
            label: self.status.label(),
            description: self.status.description(),
            probabilities: self.probabilities,
        }
    }
}

/// A self-describing view of a `Prediction`, as written by the runner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    pub code: u8,
    pub label: &'static str,
    pub description: &'static str,
    pub probabilities: [f32; OUTPUTS],
}
