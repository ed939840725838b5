//! # Tokenizer Component
//!
//! The tokenizer performs the lexical analysis of DSL scripts, transforming
//! raw text into a flat token stream for the grammar-driven parser.
//!
//! ## Design Principles
//!
//! * **Grammar agnostic**: words become [`TokenType::Text`] and punctuation
//!   becomes one [`TokenType::Special`] token per character. Keywords are the
//!   parser's business.
//! * **Precise positions**: every token records its script and its
//!   `[start, end)` character span.
//! * **Errors as data**: the first lexical error stops the run and is returned
//!   inside [`TokenizerResult`] alongside the tokens produced so far.
//!
//! ## Component Structure
//!
//! * [`classify`]: decides which recognizer handles the next character
//! * [`whitespace`]: whitespace skipping
//! * [`word`]: letters, digits and underscores
//! * [`quoted`]: `'...'` and `"..."` strings with doubled-quote escapes
//! * [`comment`]: `//` line comments, dropped from the output
//! * [`external`]: `<path>` external text references
//! * [`resolver`]: dialect-aware lookup of referenced files
//! * [`special`]: single punctuation characters
//! * [`token`]: token types and the tokenization result
//! * [`error`]: lexical errors and their stable codes
//!
//! ## Usage Example
//!
//! ```rust
//! use std::sync::Arc;
//! use declex::{
//!     config::TokenizerConfig,
//!     fs::MemoryFileSystem,
//!     script::DslScript,
//!     tokenizer::{TokenType, Tokenizer},
//! };
//!
//! let fs = MemoryFileSystem::new().with_file("init.PostgreSql.sql", "CREATE SCHEMA demo;");
//! let config = TokenizerConfig::default().with_database_language("PostgreSql");
//! let tokenizer = Tokenizer::new(&config, Arc::new(fs)).unwrap();
//!
//! let script = DslScript::shared("main.dsl", "Module Demo { SqlObject Init <init.sql>; }");
//! let tokens = tokenizer.tokenize(&[script]).into_result().unwrap();
//!
//! assert_eq!(tokens[5].value, "CREATE SCHEMA demo;");
//! assert_eq!(tokens.last().unwrap().token_type, TokenType::EndOfFile);
//! ```

pub mod classify;
pub mod comment;
pub mod error;
pub mod external;
pub mod quoted;
pub mod resolver;
pub mod special;
pub mod token;
#[allow(clippy::module_inception)]
pub mod tokenizer;
pub mod whitespace;
pub mod word;

pub use error::{LexicalError, LexicalErrorKind};
pub use resolver::ExternalTextResolver;
pub use token::{Token, TokenType, TokenizerResult};
pub use tokenizer::Tokenizer;
