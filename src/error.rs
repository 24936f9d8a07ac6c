use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    InvalidMotif,
    InvalidInput,
    Io,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotifMarkError {
    pub code: ErrorCode,
    pub message: String,
}

impl MotifMarkError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for MotifMarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for MotifMarkError {}

impl From<std::io::Error> for MotifMarkError {
    fn from(err: std::io::Error) -> Self {
        MotifMarkError::new(ErrorCode::Io, err.to_string())
    }
}

pub type Result<T, E = MotifMarkError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MotifMarkError::new(ErrorCode::InvalidMotif, "Motif #2 is empty");
        assert_eq!(err.to_string(), "InvalidMotif: Motif #2 is empty");
    }

    #[test]
    fn test_from_io() {
        let err: MotifMarkError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.code, ErrorCode::Io);
    }
}
