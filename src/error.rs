use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, NnErr>;

/// The crate's error type.
///
/// Inference itself never fails, only the adapters around it (sample parsing, runner
/// configuration and status code conversion) produce these.
#[derive(Debug)]
pub enum NnErr {
    FieldCount {
        got: usize,
        expected: usize,
    },
    InvalidField {
        field: &'static str,
        value: String,
    },
    Json(serde_json::Error),
    Io(io::Error),
    InvalidConfig {
        var: &'static str,
        value: String,
    },
    UnknownStatus(u8),
}

impl Display for NnErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NnErr::FieldCount { got, expected } => {
                write!(f, "sample has {got} fields, expected {expected}")
            }
            NnErr::InvalidField { field, value } => {
                write!(f, "invalid value for {field}: {value:?}")
            }
            NnErr::Json(e) => write!(f, "json error: {e}"),
            NnErr::Io(e) => write!(f, "io error: {e}"),
            NnErr::InvalidConfig { var, value } => {
                write!(f, "invalid value for {var}: {value:?}")
            }
            NnErr::UnknownStatus(code) => write!(f, "unknown status code {code}"),
        }
    }
}

impl Error for NnErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NnErr::Json(e) => Some(e),
            NnErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for NnErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for NnErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
