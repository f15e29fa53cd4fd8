use std::fmt::{self, Debug, Display};
use std::io;

/// Provides `EpirunError` and maps other errors to
/// convert to an `EpirunError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum EpirunError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    CsvError(csv::Error),
    ParametersError(String),
    ReportError(String),
}

impl From<io::Error> for EpirunError {
    fn from(error: io::Error) -> Self {
        EpirunError::IoError(error)
    }
}

impl From<serde_json::Error> for EpirunError {
    fn from(error: serde_json::Error) -> Self {
        EpirunError::JsonError(error)
    }
}

impl From<csv::Error> for EpirunError {
    fn from(error: csv::Error) -> Self {
        EpirunError::CsvError(error)
    }
}

impl std::error::Error for EpirunError {}

impl Display for EpirunError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {self:?}")?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn io_error_converts() {
        let err: EpirunError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, EpirunError::IoError(_)));
    }

    #[test]
    fn display_includes_variant() {
        let err = EpirunError::ParametersError("beta must be in [0, 1]".to_string());
        let message = format!("{err}");
        assert!(message.contains("beta must be in [0, 1]"));
    }
}
