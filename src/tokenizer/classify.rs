//! # Character Classification
//!
//! Decides which recognizer handles the input at the current position. The
//! checks run in a fixed order: word, quoted string, external text
//! reference, comment, and finally the single special character.

pub const QUOTE_CHARS: &str = "'\"";
pub const EXTERNAL_TEXT_START: char = '<';
pub const EXTERNAL_TEXT_END: char = '>';
pub const LINE_COMMENT_START: &str = "//";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStart {
    Word,
    Quoted(char),
    ExternalText,
    Comment,
    Special,
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Letters, digits and `_`.
///
/// Uses the Unicode `Alphabetic` and `Numeric` properties, so letter numbers
/// and other numerics such as `²` or `½` continue a word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub fn is_quote(c: char) -> bool {
    QUOTE_CHARS.contains(c)
}

/// Characters that cannot appear in a referenced file path.
pub fn is_invalid_path_char(c: char) -> bool {
    c <= '\u{1f}' || matches!(c, '"' | '<' | '|')
}

/// Classifies the token starting at `input`, which must not start with whitespace.
///
/// Returns `None` for empty input.
pub fn classify(input: &str) -> Option<TokenStart> {
    let c = input.chars().next()?;
    let start = if is_word_char(c) {
        TokenStart::Word
    } else if is_quote(c) {
        TokenStart::Quoted(c)
    } else if c == EXTERNAL_TEXT_START {
        TokenStart::ExternalText
    } else if input.starts_with(LINE_COMMENT_START) {
        TokenStart::Comment
    } else {
        TokenStart::Special
    };
    Some(start)
}
