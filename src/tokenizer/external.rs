//! # External Text References
//!
//! `<path>` inlines the content of another file at the reference position.
//! This module recognizes the reference syntax and turns the raw path into a
//! file system path next to the referencing script; reading the file is the
//! job of [`ExternalTextResolver`](super::resolver::ExternalTextResolver).

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use nom::{bytes::complete::take_till, character::complete::char, error::context};

use super::{
    classify::{is_invalid_path_char, EXTERNAL_TEXT_END, EXTERNAL_TEXT_START},
    error::{LexicalErrorKind, ScanError},
    token::ParserResult,
};

/// Reads `<path>` and returns the raw path between the markers.
///
/// Fails fatally when the input ends before `>` or when a character that
/// cannot appear in a path comes first. The invalid-character failure carries
/// the length from `<` through the offending character.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_external_reference(input: &str) -> ParserResult<&str> {
    let (rest, _) = context("external text reference", char(EXTERNAL_TEXT_START))(input)?;
    let (rest, path) = take_till(|c: char| c == EXTERNAL_TEXT_END || is_invalid_path_char(c))(rest)?;

    match rest.chars().next() {
        Some(EXTERNAL_TEXT_END) => Ok((&rest[EXTERNAL_TEXT_END.len_utf8()..], path)),
        Some(found) => Err(nom::Err::Failure(ScanError::lexical_with_length(
            LexicalErrorKind::InvalidExternalTextCharacter { found },
            path.chars().count() + 2,
        ))),
        None => Err(nom::Err::Failure(ScanError::lexical(
            LexicalErrorKind::UnterminatedExternalText,
        ))),
    }
}

/// Builds the path of a referenced file relative to the script folder.
///
/// Both `/` and `\` are accepted as separators in the DSL source and are
/// converted to the host separator.
pub fn reference_path(script_folder: &Path, reference: &str) -> PathBuf {
    let normalized: String = reference
        .chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect();
    script_folder.join(normalized)
}
