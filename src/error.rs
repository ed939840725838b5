use thiserror::Error;

use crate::config::ConfigError;
use crate::fs::FsError;
use crate::tokenizer::LexicalError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("File system error: {0}")]
    FileSystem(#[from] FsError),
    #[error("Lexical error: {0}")]
    Lexical(#[from] LexicalError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InternalResult<T> = Result<T, Error>;
