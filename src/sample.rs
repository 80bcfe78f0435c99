use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{NnErr, Result, arch::INPUTS};

/// One reading of the five physiological signals fed to the classifier.
///
/// JSON input accepts snake_case names, the camelCase names used by the firmware and the
/// `tonic`/`phasic` names used by the GSR sensor feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleVector {
    #[serde(alias = "edaTonic", alias = "tonic")]
    pub eda_tonic: f32,
    #[serde(alias = "edaPhasic", alias = "phasic")]
    pub eda_phasic: f32,
    pub bpm: f32,
    pub hrv: f32,
    pub lux: f32,
}

impl SampleVector {
    /// Field names in network input order.
    pub const FIELDS: [&'static str; INPUTS] = ["eda_tonic", "eda_phasic", "bpm", "hrv", "lux"];

    pub fn new(eda_tonic: f32, eda_phasic: f32, bpm: f32, hrv: f32, lux: f32) -> Self {
        Self {
            eda_tonic,
            eda_phasic,
            bpm,
            hrv,
            lux,
        }
    }

    /// Returns the features in network input order.
    pub fn as_array(&self) -> [f32; INPUTS] {
        [self.eda_tonic, self.eda_phasic, self.bpm, self.hrv, self.lux]
    }

    pub fn from_array([eda_tonic, eda_phasic, bpm, hrv, lux]: [f32; INPUTS]) -> Self {
        Self::new(eda_tonic, eda_phasic, bpm, hrv, lux)
    }

    /// Parses a comma separated `eda_tonic,eda_phasic,bpm,hrv,lux` line.
    ///
    /// # Errors
    /// `NnErr::FieldCount` if the line does not have exactly five fields,
    /// `NnErr::InvalidField` if one of them is not a number.
    pub fn from_csv_line(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();
        if fields.len() != INPUTS {
            return Err(NnErr::FieldCount {
                got: fields.len(),
                expected: INPUTS,
            });
        }

        let mut values = [0.; INPUTS];
        for ((value, raw), field) in values.iter_mut().zip(&fields).zip(Self::FIELDS) {
            *value = raw.parse().map_err(|_| NnErr::InvalidField {
                field,
                value: raw.to_string(),
            })?;
        }

        Ok(Self::from_array(values))
    }

    /// Parses a JSON object holding the five fields.
    ///
    /// # Errors
    /// `NnErr::Json` if the object is malformed or a field is missing.
    pub fn from_json(line: &str) -> Result<Self> {
        Ok(serde_json::from_str(line)?)
    }
}

impl From<[f32; INPUTS]> for SampleVector {
    fn from(value: [f32; INPUTS]) -> Self {
        Self::from_array(value)
    }
}

/// Parses either representation, JSON objects are told apart by their leading brace.
impl FromStr for SampleVector {
    type Err = NnErr;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim_start().starts_with('{') {
            Self::from_json(s)
        } else {
            Self::from_csv_line(s)
        }
    }
}
