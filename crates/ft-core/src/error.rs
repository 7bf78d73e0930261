use thiserror::Error;

// Code prefixes partition the failure surface: WORKBOOK_/SHEET_ for the
// row source, SURVEY_ for structural problems in the row stream, FIELD_
// for row types, CHOICES_ for dangling list references, REPEAT_ for bad
// repeat counts, NAV_ for id assignment and CLI_ for the binary.
#[derive(Debug, Error, Clone)]
#[error("{code}: {message}")]
pub struct FormError {
    pub code: String,
    pub message: String,
    pub line: Option<u32>,
}

impl FormError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            line: None,
        }
    }

    pub fn at_line(code: impl Into<String>, message: impl Into<String>, line: u32) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            line: Some(line),
        }
    }
}
