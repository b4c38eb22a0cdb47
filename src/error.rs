use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    FileNotFound,
    ParseError,
    InvalidInput,
    InvalidTaxonomy,
    IoError,
    InvalidRequest,
    PathOutOfBounds,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound => write!(f, "FILE_NOT_FOUND"),
            Self::ParseError => write!(f, "PARSE_ERROR"),
            Self::InvalidInput => write!(f, "INVALID_INPUT"),
            Self::InvalidTaxonomy => write!(f, "INVALID_TAXONOMY"),
            Self::IoError => write!(f, "IO_ERROR"),
            Self::InvalidRequest => write!(f, "INVALID_REQUEST"),
            Self::PathOutOfBounds => write!(f, "PATH_OUT_OF_BOUNDS"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PersonaError {
    pub code: ErrorCode,
    pub message: String,
}

impl fmt::Display for PersonaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for PersonaError {}

impl PersonaError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn file_not_found(path: &str) -> Self {
        Self::new(ErrorCode::FileNotFound, format!("File not found: {path}"))
    }

    pub fn parse_error(path: &str, detail: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ParseError,
            format!("Failed to parse {path}: {detail}"),
        )
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code() {
        let e = PersonaError::file_not_found("owned.json");
        assert_eq!(e.to_string(), "[FILE_NOT_FOUND] File not found: owned.json");
    }

    #[test]
    fn code_serializes_like_display() {
        for code in [
            ErrorCode::FileNotFound,
            ErrorCode::InvalidTaxonomy,
            ErrorCode::PathOutOfBounds,
        ] {
            let json = serde_json::to_value(code).unwrap();
            assert_eq!(json, serde_json::Value::String(code.to_string()));
        }
    }
}
