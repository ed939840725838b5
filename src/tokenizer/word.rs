//! # Word Recognition
//!
//! A word is any identifier-shaped run: keywords, names and numbers all
//! arrive at the parser as plain text tokens. Which characters belong to a
//! word is decided by [`is_word_char`].

use nom::{bytes::complete::take_while1, error::context};

use super::{classify::is_word_char, token::ParserResult};

/// Reads a maximal run of letters, digits and underscores.
///
/// Keywords are not recognized here; every word is plain text for the parser.
///
/// # Arguments
///
/// * `input` - The input string, positioned at a word character
///
/// # Returns
///
/// * `ParserResult<&str>` - The word and the remaining input, or a recoverable
///   `nom::Err::Error` when the input does not start with a word character
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_word(input: &str) -> ParserResult<&str> {
    context("word", take_while1(is_word_char))(input)
}
