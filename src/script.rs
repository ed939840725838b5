//! # DSL Scripts
//!
//! A [`DslScript`] is one loaded source document: an immutable `(path, text)`
//! pair. Scripts are shared as `Arc<DslScript>` so tokens and errors can point
//! back at the document they came from for as long as they live.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, warn};

use crate::{
    config::TokenizerConfig,
    fs::{FileSystem, NativeFileSystem},
    InternalResult,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DslScript {
    path: PathBuf,
    text: String,
}

impl DslScript {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn shared(path: impl Into<PathBuf>, text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(path, text))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Directory that relative external references are resolved against.
    pub fn folder(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Length of the text in characters, which is where the end-of-file token sits.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Maps a character offset to a 1-based (line, column) pair.
    ///
    /// `\r\n`, `\n` and a lone `\r` each end a line. Offsets past the end
    /// resolve to the position just after the last character.
    pub fn line_column(&self, char_offset: usize) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        let mut chars = self.text.chars().take(char_offset).peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' if chars.peek() == Some(&'\n') => {}
                '\r' | '\n' => {
                    line += 1;
                    column = 1;
                }
                _ => column += 1,
            }
        }
        (line, column)
    }
}

/// Supplies the ordered list of scripts of one DSL project.
pub trait DslScriptsProvider {
    fn dsl_scripts(&self) -> &[Arc<DslScript>];
}

impl DslScriptsProvider for Vec<Arc<DslScript>> {
    fn dsl_scripts(&self) -> &[Arc<DslScript>] {
        self
    }
}

impl DslScriptsProvider for [Arc<DslScript>] {
    fn dsl_scripts(&self) -> &[Arc<DslScript>] {
        self
    }
}

/// Loads every script with the configured extension below a root folder.
///
/// Scripts are ordered by their path relative to the root, so the token
/// stream of a project does not depend on directory iteration order.
#[derive(Debug, Clone)]
pub struct DslScriptLoader {
    root: PathBuf,
    scripts: Vec<Arc<DslScript>>,
}

impl DslScriptLoader {
    pub fn load(root: impl AsRef<Path>, config: &TokenizerConfig) -> InternalResult<Self> {
        config.validate()?;
        let root = root.as_ref().to_path_buf();
        let mut paths = Vec::new();
        if root.is_dir() {
            collect_script_paths(&root, &config.script_extension, &mut paths)?;
        } else {
            warn!("Script folder does not exist: {:?}", root);
        }
        paths.sort_by(|a, b| a.strip_prefix(&root).ok().cmp(&b.strip_prefix(&root).ok()));

        let fs = NativeFileSystem::new();
        let mut scripts = Vec::with_capacity(paths.len());
        for path in paths {
            let text = fs.read_to_string(&path)?;
            debug!("Loaded DSL script {:?} ({} bytes)", path, text.len());
            scripts.push(Arc::new(DslScript::new(path, text)));
        }

        Ok(Self { root, scripts })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn into_scripts(self) -> Vec<Arc<DslScript>> {
        self.scripts
    }
}

impl DslScriptsProvider for DslScriptLoader {
    fn dsl_scripts(&self) -> &[Arc<DslScript>] {
        &self.scripts
    }
}

fn collect_script_paths(
    dir: &Path,
    extension: &str,
    paths: &mut Vec<PathBuf>,
) -> InternalResult<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_script_paths(&path, extension, paths)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
        {
            paths.push(path);
        }
    }
    Ok(())
}
