use std::{fmt, sync::Arc};

use nom::error::{ContextError, ErrorKind, ParseError};
use thiserror::Error;

use crate::script::DslScript;

/// The lexical conditions that stop tokenization, each with a stable code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalErrorKind {
    #[error("Unexpected end of script within quoted string. Missing closing character: {quote}.")]
    UnterminatedQuotedString { quote: char },

    #[error("Unexpected end of script within external text reference. Missing closing character: '>'.")]
    UnterminatedExternalText,

    #[error("Invalid file name character {found:?} within external text reference.")]
    InvalidExternalTextCharacter { found: char },

    #[error("External text reference has an empty file name ({path}).")]
    EmptyFileName { path: String },

    #[error("Cannot find the file referenced by external text reference. Looked for:\n{}", .candidates.join("\n"))]
    ExternalFileNotFound { candidates: Vec<String> },

    #[error("Cannot read the file referenced by external text reference ({path}): {reason}")]
    ExternalFileUnreadable { path: String, reason: String },
}

impl LexicalErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            LexicalErrorKind::UnterminatedQuotedString { .. } => "LEX0001",
            LexicalErrorKind::UnterminatedExternalText => "LEX0002",
            LexicalErrorKind::InvalidExternalTextCharacter { .. } => "LEX0003",
            LexicalErrorKind::EmptyFileName { .. } => "LEX0004",
            LexicalErrorKind::ExternalFileNotFound { .. } => "LEX0005",
            LexicalErrorKind::ExternalFileUnreadable { .. } => "LEX0006",
        }
    }
}

/// A lexical error anchored in a script.
///
/// `position` is the character offset of the token that failed (the opening
/// quote or `<`); `length`, when present, is the number of characters from
/// there up to and including the offending character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    pub kind: LexicalErrorKind,
    pub script: Arc<DslScript>,
    pub position: usize,
    pub length: Option<usize>,
}

impl LexicalError {
    pub fn new(kind: LexicalErrorKind, script: Arc<DslScript>, position: usize) -> Self {
        Self {
            kind,
            script,
            position,
            length: None,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn line_column(&self) -> (usize, usize) {
        self.script.line_column(self.position)
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.line_column();
        write!(
            f,
            "{}({},{}): {} {}",
            self.script.path().display(),
            line,
            column,
            self.code(),
            self.kind
        )
    }
}

impl std::error::Error for LexicalError {}

/// Error type of the recognizer parsers.
///
/// `Nom` means "this recognizer does not apply here"; `Lexical` is raised as
/// `nom::Err::Failure` once a recognizer has committed to a token.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError<'a> {
    Nom {
        input: &'a str,
        kind: ErrorKind,
    },
    Lexical {
        kind: LexicalErrorKind,
        length: Option<usize>,
    },
}

impl<'a> ScanError<'a> {
    pub fn lexical(kind: LexicalErrorKind) -> Self {
        ScanError::Lexical { kind, length: None }
    }

    pub fn lexical_with_length(kind: LexicalErrorKind, length: usize) -> Self {
        ScanError::Lexical {
            kind,
            length: Some(length),
        }
    }
}

impl<'a> ParseError<&'a str> for ScanError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        ScanError::Nom { input, kind }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> ContextError<&'a str> for ScanError<'a> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_codes_are_distinct() {
        let kinds = [
            LexicalErrorKind::UnterminatedQuotedString { quote: '\'' },
            LexicalErrorKind::UnterminatedExternalText,
            LexicalErrorKind::InvalidExternalTextCharacter { found: '|' },
            LexicalErrorKind::EmptyFileName {
                path: ".sql".to_string(),
            },
            LexicalErrorKind::ExternalFileNotFound { candidates: vec![] },
            LexicalErrorKind::ExternalFileUnreadable {
                path: "a.sql".to_string(),
                reason: "denied".to_string(),
            },
        ];
        let mut codes: Vec<_> = kinds.iter().map(|k| k.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_not_found_message_lists_candidates() {
        let kind = LexicalErrorKind::ExternalFileNotFound {
            candidates: vec!["a.pg.sql".to_string(), "a.sql".to_string()],
        };
        let message = kind.to_string();
        assert!(message.contains("a.pg.sql\na.sql"));
    }

    #[test]
    fn test_display_includes_location_and_code() {
        let script = DslScript::shared("dsl/main.dsl", "Module A\n{ 'x");
        let error = LexicalError::new(
            LexicalErrorKind::UnterminatedQuotedString { quote: '\'' },
            script,
            11,
        );
        assert_eq!(error.line_column(), (2, 3));
        assert_eq!(
            error.to_string(),
            "dsl/main.dsl(2,3): LEX0001 Unexpected end of script within quoted string. Missing closing character: '."
        );
    }
}
