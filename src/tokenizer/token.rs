use std::sync::Arc;

use nom::IResult;
use strum_macros::{Display, EnumIter, EnumString};

use super::error::{LexicalError, ScanError};
use crate::script::DslScript;

/// Token categories handed to the parser.
///
/// Bare words, quoted strings and resolved external text references are all
/// [`TokenType::Text`]; the parser cannot tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum TokenType {
    Text,
    Special,
    Comment,
    EndOfFile,
}

/// One lexical unit with its decoded value and `[start, end)` character span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    pub script: Arc<DslScript>,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn end_of_file(script: &Arc<DslScript>) -> Self {
        let end = script.char_len();
        Self {
            token_type: TokenType::EndOfFile,
            value: String::new(),
            script: Arc::clone(script),
            start: end,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_end_of_file(&self) -> bool {
        self.token_type == TokenType::EndOfFile
    }

    /// Whether this token is the given special (punctuation) character.
    pub fn is_special(&self, c: char) -> bool {
        self.token_type == TokenType::Special && self.value.chars().eq(std::iter::once(c))
    }

    /// 1-based (line, column) of the token start.
    pub fn line_column(&self) -> (usize, usize) {
        self.script.line_column(self.start)
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, ScanError<'a>>;

/// Outcome of a tokenization run.
///
/// When `error` is set, `tokens` holds what was produced before the failure
/// and is only meant for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenizerResult {
    pub tokens: Vec<Token>,
    pub error: Option<LexicalError>,
}

impl TokenizerResult {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<Vec<Token>, LexicalError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.tokens),
        }
    }
}
