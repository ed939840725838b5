use std::sync::Arc;

use tracing::{debug, error};

use super::{
    classify::{classify, TokenStart},
    comment::parse_line_comment,
    error::{LexicalError, ScanError},
    external::{parse_external_reference, reference_path},
    quoted::parse_quoted_string,
    resolver::ExternalTextResolver,
    special::parse_special,
    token::{ParserResult, Token, TokenType, TokenizerResult},
    whitespace::skip_whitespace,
    word::parse_word,
};
use crate::{
    config::{ConfigResult, TokenizerConfig},
    fs::FileSystem,
    script::{DslScript, DslScriptsProvider},
};

/// Scans DSL scripts into one token stream.
///
/// Scripts are scanned in the given order; each ends with an end-of-file
/// token. Scanning stops at the first lexical error, which is returned
/// together with the tokens produced before it.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    resolver: ExternalTextResolver,
}

/// Byte and character offsets into the script text, advanced together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cursor {
    byte: usize,
    char: usize,
}

impl Cursor {
    fn advance(self, consumed: &str) -> Self {
        Self {
            byte: self.byte + consumed.len(),
            char: self.char + consumed.chars().count(),
        }
    }
}

impl Tokenizer {
    /// Builds a tokenizer for the dialect in `config`.
    ///
    /// Fails when the configuration is invalid, e.g. an empty dialect that
    /// would produce override names like `report..sql`.
    pub fn new(config: &TokenizerConfig, fs: Arc<dyn FileSystem>) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_resolver(ExternalTextResolver::new(
            config.database_language.clone(),
            fs,
        )))
    }

    pub fn with_resolver(resolver: ExternalTextResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ExternalTextResolver {
        &self.resolver
    }

    pub fn get_tokens<P: DslScriptsProvider + ?Sized>(&self, provider: &P) -> TokenizerResult {
        self.tokenize(provider.dsl_scripts())
    }

    #[tracing::instrument(level = "debug", skip(self, scripts), fields(scripts = scripts.len()))]
    pub fn tokenize(&self, scripts: &[Arc<DslScript>]) -> TokenizerResult {
        let mut tokens = Vec::new();

        for script in scripts {
            if let Err(e) = self.tokenize_script(script, &mut tokens) {
                error!("{}", e);
                return TokenizerResult {
                    tokens,
                    error: Some(e),
                };
            }
        }

        TokenizerResult {
            tokens,
            error: None,
        }
    }

    fn tokenize_script(
        &self,
        script: &Arc<DslScript>,
        tokens: &mut Vec<Token>,
    ) -> Result<(), LexicalError> {
        let text = script.text();
        let mut cursor = Cursor::default();
        let first_token = tokens.len();

        loop {
            let remaining = &text[cursor.byte..];
            let (remaining, skipped) = skip_whitespace(remaining).unwrap_or((remaining, ""));
            cursor = cursor.advance(skipped);

            let Some(start) = classify(remaining) else {
                break;
            };

            let (rest, (token_type, value)) = match self.scan_token(script, start, remaining) {
                Ok(scanned) => scanned,
                Err(nom::Err::Failure(ScanError::Lexical { kind, length })) => {
                    let error = LexicalError::new(kind, Arc::clone(script), cursor.char);
                    return Err(match length {
                        Some(length) => error.with_length(length),
                        None => error,
                    });
                }
                // Every classified start has a recognizer that accepts it.
                Err(e) => {
                    error!(
                        "Recognizer for {:?} rejected input at {:?}:{}: {:?}",
                        start,
                        script.path(),
                        cursor.char,
                        e
                    );
                    split_first_char(remaining)
                }
            };

            let token_start = cursor;
            cursor = cursor.advance(&remaining[..remaining.len() - rest.len()]);

            if token_type != TokenType::Comment {
                tokens.push(Token {
                    token_type,
                    value,
                    script: Arc::clone(script),
                    start: token_start.char,
                    end: cursor.char,
                });
            }
        }

        tokens.push(Token::end_of_file(script));
        debug!(
            "Tokenized {:?}: {} tokens",
            script.path(),
            tokens.len() - first_token
        );
        Ok(())
    }

    fn scan_token<'a>(
        &self,
        script: &DslScript,
        start: TokenStart,
        input: &'a str,
    ) -> ParserResult<'a, (TokenType, String)> {
        match start {
            TokenStart::Word => {
                let (rest, word) = parse_word(input)?;
                Ok((rest, (TokenType::Text, word.to_string())))
            }
            TokenStart::Quoted(_) => {
                let (rest, value) = parse_quoted_string(input)?;
                Ok((rest, (TokenType::Text, value)))
            }
            TokenStart::ExternalText => {
                let (rest, reference) = parse_external_reference(input)?;
                let path = reference_path(script.folder(), reference);
                let value = self
                    .resolver
                    .resolve(&path)
                    .map_err(|kind| nom::Err::Failure(ScanError::lexical(kind)))?;
                Ok((rest, (TokenType::Text, value)))
            }
            TokenStart::Comment => {
                let (rest, content) = parse_line_comment(input)?;
                Ok((rest, (TokenType::Comment, content.to_string())))
            }
            TokenStart::Special => {
                let (rest, c) = parse_special(input)?;
                Ok((rest, (TokenType::Special, c.to_string())))
            }
        }
    }
}

fn split_first_char(input: &str) -> (&str, (TokenType, String)) {
    let len = input.chars().next().map_or(0, char::len_utf8);
    (&input[len..], (TokenType::Special, input[..len].to_string()))
}
