use nom::bytes::complete::take_while;

use super::{classify::is_whitespace, token::ParserResult};

/// Skips spaces, tabs and line breaks; whitespace never produces a token.
///
/// # Examples
///
/// ```
/// # use declex::tokenizer::whitespace::skip_whitespace;
/// let (rest, skipped) = skip_whitespace(" \t\r\n  Entity").unwrap();
/// assert_eq!(rest, "Entity");
/// assert_eq!(skipped, " \t\r\n  ");
/// ```
pub fn skip_whitespace(input: &str) -> ParserResult<&str> {
    take_while(is_whitespace)(input)
}
