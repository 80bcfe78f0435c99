use std::fmt;

use serde::{Deserialize, Serialize};

use crate::NnErr;

/// Label returned for codes outside the known statuses.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Description returned for codes outside the known statuses.
pub const UNKNOWN_DESCRIPTION: &str = "Unable to classify mental state with current readings.";

/// The classes the network distinguishes, in output index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MentalHealthStatus {
    Normal = 0,
    Stress = 1,
    Anxiety = 2,
    Depression = 3,
}

impl MentalHealthStatus {
    pub const ALL: [MentalHealthStatus; 4] = [
        MentalHealthStatus::Normal,
        MentalHealthStatus::Stress,
        MentalHealthStatus::Anxiety,
        MentalHealthStatus::Depression,
    ];

    /// Returns the status for an output index of the network.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the output index (and wire code) of this status.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label shown on the device display.
    pub fn label(self) -> &'static str {
        match self {
            MentalHealthStatus::Normal => "Normal",
            MentalHealthStatus::Stress => "Stress",
            MentalHealthStatus::Anxiety => "Anxiety",
            MentalHealthStatus::Depression => "Depression",
        }
    }

    /// One sentence explanation of the status.
    pub fn description(self) -> &'static str {
        match self {
            MentalHealthStatus::Normal => {
                "Mental state appears normal. Vital signs within typical ranges."
            }
            MentalHealthStatus::Stress => {
                "Signs of stress detected. Higher GSR and heart rate with reduced HRV."
            }
            MentalHealthStatus::Anxiety => {
                "Anxiety pattern observed. Elevated GSR response and irregular heart rhythm."
            }
            MentalHealthStatus::Depression => {
                "Depression indicators present. Lower physiological reactivity and light sensitivity."
            }
        }
    }
}

impl TryFrom<u8> for MentalHealthStatus {
    type Error = NnErr;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_index(code as usize).ok_or(NnErr::UnknownStatus(code))
    }
}

impl From<MentalHealthStatus> for u8 {
    fn from(value: MentalHealthStatus) -> Self {
        value as u8
    }
}

impl fmt::Display for MentalHealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for a raw status code, `UNKNOWN_LABEL` when the code is out of range.
pub fn status_string(code: u8) -> &'static str {
    MentalHealthStatus::try_from(code).map_or(UNKNOWN_LABEL, MentalHealthStatus::label)
}

/// Description for a raw status code, `UNKNOWN_DESCRIPTION` when the code is out of range.
pub fn status_description(code: u8) -> &'static str {
    MentalHealthStatus::try_from(code).map_or(UNKNOWN_DESCRIPTION, MentalHealthStatus::description)
}
