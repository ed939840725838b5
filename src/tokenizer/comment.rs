use nom::{
    bytes::complete::{tag, take_till},
    error::context,
    sequence::preceded,
};

use super::{classify::LINE_COMMENT_START, token::ParserResult};

/// Reads a `//` comment up to, but not including, the next `\r` or `\n`.
///
/// The returned content excludes the `//` marker. Comment tokens only move the
/// scan position forward; the tokenizer drops them from its output.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_line_comment(input: &str) -> ParserResult<&str> {
    context(
        "line comment",
        preceded(
            tag(LINE_COMMENT_START),
            take_till(|c| c == '\r' || c == '\n'),
        ),
    )(input)
}
