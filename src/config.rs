use std::{env, str::FromStr};

use crate::{NnErr, Result, SampleVector};

/// Environment variable selecting the input format.
pub const INPUT_VAR: &str = "MHNN_INPUT";

/// Environment variable deciding whether malformed lines are skipped.
pub const SKIP_INVALID_VAR: &str = "MHNN_SKIP_INVALID";

/// How the runner reads sample lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON objects are recognized by their leading brace, anything else is CSV.
    #[default]
    Auto,
    Csv,
    Json,
}

impl InputFormat {
    pub fn parse_sample(self, line: &str) -> Result<SampleVector> {
        match self {
            InputFormat::Auto => line.parse(),
            InputFormat::Csv => SampleVector::from_csv_line(line),
            InputFormat::Json => SampleVector::from_json(line),
        }
    }
}

impl FromStr for InputFormat {
    type Err = NnErr;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(InputFormat::Auto),
            "csv" => Ok(InputFormat::Csv),
            "json" => Ok(InputFormat::Json),
            _ => Err(NnErr::InvalidConfig {
                var: INPUT_VAR,
                value: s.to_string(),
            }),
        }
    }
}

/// Immutable settings of a runner session.
#[derive(Debug, Clone)]
pub struct RunConfig {
    input: InputFormat,
    skip_invalid: bool,
}

impl RunConfig {
    /// Creates a new run configuration.
    ///
    /// # Args
    /// * `input` - The format of the sample lines.
    /// * `skip_invalid` - Whether malformed lines are skipped instead of aborting the run.
    ///
    /// # Returns
    /// A `RunConfig` instance.
    pub fn new(input: InputFormat, skip_invalid: bool) -> Self {
        Self {
            input,
            skip_invalid,
        }
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// `NnErr::InvalidConfig` if a variable is set to an unrecognized value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds the configuration out of an arbitrary variable lookup, unset variables keep
    /// their defaults.
    ///
    /// # Errors
    /// `NnErr::InvalidConfig` if a variable is set to an unrecognized value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(INPUT_VAR) {
            config.input = value.parse()?;
        }

        if let Some(value) = lookup(SKIP_INVALID_VAR) {
            let flag = value.trim().to_ascii_lowercase();
            config.skip_invalid = match flag.as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(NnErr::InvalidConfig {
                        var: SKIP_INVALID_VAR,
                        value,
                    });
                }
            };
        }

        Ok(config)
    }

    pub fn input(&self) -> InputFormat {
        self.input
    }

    pub fn skip_invalid(&self) -> bool {
        self.skip_invalid
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(InputFormat::Auto, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |var| {
            vars.iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn unset_variables_keep_defaults() {
        let config = RunConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.input(), InputFormat::Auto);
        assert!(config.skip_invalid());
    }

    #[test]
    fn variables_override_defaults() {
        let config =
            RunConfig::from_lookup(lookup(&[(INPUT_VAR, "JSON"), (SKIP_INVALID_VAR, "false")]))
                .unwrap();
        assert_eq!(config.input(), InputFormat::Json);
        assert!(!config.skip_invalid());
    }

    #[test]
    fn unknown_values_are_rejected() {
        let err = RunConfig::from_lookup(lookup(&[(INPUT_VAR, "xml")])).unwrap_err();
        assert!(matches!(err, NnErr::InvalidConfig { var: INPUT_VAR, .. }));

        let err = RunConfig::from_lookup(lookup(&[(SKIP_INVALID_VAR, "maybe")])).unwrap_err();
        assert!(matches!(err, NnErr::InvalidConfig { var: SKIP_INVALID_VAR, .. }));
    }

    #[test]
    fn forced_formats_do_not_sniff() {
        let json = r#"{"eda_tonic":1,"eda_phasic":2,"bpm":3,"hrv":4,"lux":5}"#;

        assert!(InputFormat::Json.parse_sample(json).is_ok());
        assert!(InputFormat::Auto.parse_sample(json).is_ok());
        assert!(InputFormat::Csv.parse_sample(json).is_err());
        assert!(InputFormat::Json.parse_sample("1,2,3,4,5").is_err());
    }
}
