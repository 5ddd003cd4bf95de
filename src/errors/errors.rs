use std::fmt::Display;

use thiserror::Error;

/// A recoverable lexical error, tagged with the 1-based source line it
/// occurred on. Diagnostics never interrupt scanning: the scanner records
/// them and keeps producing tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    internal_error: DiagnosticImpl,
    line: u32,
}

impl Diagnostic {
    pub fn new(error_impl: DiagnosticImpl, line: u32) -> Self {
        Diagnostic {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            DiagnosticImpl::InvalidCharacter { .. } => "InvalidCharacter",
            DiagnosticImpl::UnterminatedComment => "UnterminatedComment",
        }
    }

    pub fn get_tip(&self) -> DiagnosticTip {
        match &self.internal_error {
            DiagnosticImpl::InvalidCharacter { .. } => DiagnosticTip::None,
            DiagnosticImpl::UnterminatedComment => DiagnosticTip::Suggestion(String::from(
                "Block comment is never closed, did you forget a `*/`?",
            )),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.internal_error)
    }
}

pub enum DiagnosticTip {
    None,
    Suggestion(String),
}

impl Display for DiagnosticTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagnosticTip::None => write!(f, ""),
            DiagnosticTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticImpl {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
    #[error("unterminated block comment")]
    UnterminatedComment,
}
