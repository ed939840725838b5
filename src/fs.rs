//! # File System Capability
//!
//! The tokenizer reads external text references through the [`FileSystem`]
//! trait instead of calling `std::fs` directly, so embedders and tests can
//! serve files from memory.
//!
//! * [`NativeFileSystem`]: the host file system
//! * [`MemoryFileSystem`]: an immutable in-memory map of path to text

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FsError {
    #[error("Path not found: {path}")]
    NotFound { path: String },

    #[error("IO error on {path}: {source}")]
    Io { path: String, source: io::Error },
}

pub type FsResult<T> = Result<T, FsError>;

/// Read-only file access used when resolving external text references.
pub trait FileSystem: Send + Sync {
    /// True only for existing regular files; directories do not count.
    fn is_file(&self, path: &Path) -> bool;

    /// Reads the whole file as UTF-8 text without a leading byte-order mark.
    fn read_to_string(&self, path: &Path) -> FsResult<String>;
}

#[derive(Debug, Clone, Default)]
pub struct NativeFileSystem;

impl NativeFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for NativeFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                FsError::NotFound {
                    path: path.display().to_string(),
                }
            } else {
                FsError::Io {
                    path: path.display().to_string(),
                    source,
                }
            }
        })?;
        Ok(strip_bom(text))
    }
}

const BOM: char = '\u{feff}';

fn strip_bom(mut text: String) -> String {
    if text.starts_with(BOM) {
        text.replace_range(..BOM.len_utf8(), "");
    }
    text
}

/// An in-memory file system.
///
/// Paths are compared component-wise, so `dsl/sql/a.sql` built with
/// [`Path::join`] matches an entry inserted as `"dsl/sql/a.sql"`.
///
/// # Examples
///
/// ```
/// # use declex::fs::{FileSystem, MemoryFileSystem};
/// # use std::path::Path;
/// let fs = MemoryFileSystem::new().with_file("sql/init.sql", "SELECT 1");
/// assert!(fs.is_file(Path::new("sql/init.sql")));
/// assert_eq!(fs.read_to_string(Path::new("sql/init.sql")).unwrap(), "SELECT 1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: HashMap<PathBuf, String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn with_files<I, P, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: Into<String>,
    {
        let mut fs = Self::new();
        for (path, content) in files {
            fs.insert(path, content);
        }
        fs
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound {
                path: path.display().to_string(),
            })
    }
}
