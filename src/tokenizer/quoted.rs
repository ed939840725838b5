//! # Quoted Strings
//!
//! Single- and double-quoted strings both produce text tokens. The decoded
//! value has the delimiters removed and doubled delimiters collapsed; the
//! token span still covers the quotes.
//!
//! Once the opening quote is read the recognizer is committed: an
//! unterminated string is reported as a lexical error instead of letting
//! another recognizer try.

use nom::{
    branch::alt,
    bytes::complete::take_till1,
    character::complete::{char, one_of},
    combinator::value,
    error::context,
    multi::fold_many0,
    sequence::pair,
};

use super::{
    classify::QUOTE_CHARS,
    error::{LexicalErrorKind, ScanError},
    token::ParserResult,
};

/// Reads a string delimited by `'` or `"` and returns its decoded content.
///
/// Inside the string, the delimiter is escaped by doubling it: `'it''s'`
/// decodes to `it's`. The other quote character needs no escaping. Reaching
/// the end of the input before the closing quote is a fatal error.
///
/// # Arguments
///
/// * `input` - The input string, positioned at the opening quote
///
/// # Returns
///
/// * `ParserResult<String>` - The decoded content and the input after the
///   closing quote. `nom::Err::Failure` with
///   [`LexicalErrorKind::UnterminatedQuotedString`] when the closing quote is missing.
///
/// # Examples
///
/// ```
/// # use declex::tokenizer::quoted::parse_quoted_string;
/// let (rest, value) = parse_quoted_string(r#""a""b" tail"#).unwrap();
/// assert_eq!(value, "a\"b");
/// assert_eq!(rest, " tail");
/// ```
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_quoted_string(input: &str) -> ParserResult<String> {
    let (rest, quote) = context("quoted string", one_of(QUOTE_CHARS))(input)?;
    let (rest, content) = quoted_content(quote)(rest)?;
    match char::<_, ScanError>(quote)(rest) {
        Ok((rest, _)) => Ok((rest, content)),
        Err(_) => Err(nom::Err::Failure(ScanError::lexical(
            LexicalErrorKind::UnterminatedQuotedString { quote },
        ))),
    }
}

/// Everything up to the closing quote, with doubled quotes collapsed.
fn quoted_content<'a>(quote: char) -> impl FnMut(&'a str) -> ParserResult<'a, String> {
    fold_many0(
        alt((
            take_till1(move |c: char| c == quote),
            value(quote_str(quote), pair(char(quote), char(quote))),
        )),
        String::new,
        |mut content: String, part: &str| {
            content.push_str(part);
            content
        },
    )
}

fn quote_str(quote: char) -> &'static str {
    if quote == '"' {
        "\""
    } else {
        "'"
    }
}
