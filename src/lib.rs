//! # declex: Lexical Analysis for a Declarative Application DSL
//!
//! declex turns DSL source documents into a flat, position-aware token stream
//! that a grammar-driven parser can consume. It knows nothing about the DSL's
//! grammar: every identifier-shaped run becomes a text token and every
//! punctuation character becomes a special token.
//!
//! ## Processing Pipeline
//!
//! ```text
//! DslScript(s) → Tokenizer → (classify → recognize → resolve) → TokenizerResult → Parser
//! ```
//!
//! * Source documents are represented by [`script::DslScript`] and supplied in a
//!   fixed order, either directly or through a [`script::DslScriptsProvider`].
//! * The [`tokenizer`] module scans each script, inlines external text
//!   references (`<path>`) through the [`fs::FileSystem`] capability and stops at
//!   the first lexical error.
//! * Errors are returned as data inside [`tokenizer::token::TokenizerResult`],
//!   never thrown across the tokenizer boundary.
//!
//! ## Configuration
//!
//! The SQL dialect used for dialect-specific file overrides is supplied once
//! through [`config::TokenizerConfig`].

pub mod config;
pub mod error;
pub mod fs;
pub mod script;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use tokenizer::{LexicalError, LexicalErrorKind, Token, TokenType, Tokenizer, TokenizerResult};

#[cfg(test)]
mod tests {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    #[ctor::ctor]
    fn init_tests() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}
