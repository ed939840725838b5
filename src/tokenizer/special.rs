//! # Special Characters
//!
//! Anything that does not start a word, a quoted string, an external text
//! reference or a comment is a special character. Multi-character operators
//! are not recognized; `->` arrives as `-` followed by `>`.

use nom::{character::complete::anychar, error::context};

use super::token::ParserResult;

/// Reads exactly one character of punctuation.
///
/// Braces, separators and operators reach the parser this way, one character
/// per token, so the tokenizer carries no grammar knowledge.
///
/// # Arguments
///
/// * `input` - The input string, positioned at a non-whitespace character
///
/// # Returns
///
/// * `ParserResult<char>` - The character and the remaining input; fails only
///   on empty input
///
/// # Examples
///
/// ```
/// # use declex::tokenizer::special::parse_special;
/// assert_eq!(parse_special("{ Entity").unwrap(), (" Entity", '{'));
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_special(input: &str) -> ParserResult<char> {
    context("special character", anychar)(input)
}
