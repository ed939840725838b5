use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, trace};

use super::error::LexicalErrorKind;
use crate::fs::FileSystem;

/// Referenced files with this extension may have dialect-specific variants.
pub const SQL_EXTENSION: &str = ".sql";

/// Finds and reads the file behind an external text reference.
///
/// For a `.sql` reference `name.sql` and dialect `D` the candidates are, in
/// order: `name.D.sql`, `name (D).sql`, `name.sql`. Any other extension only
/// tries the referenced path itself. The first existing file wins.
#[derive(Clone)]
pub struct ExternalTextResolver {
    database_language: String,
    fs: Arc<dyn FileSystem>,
}

impl fmt::Debug for ExternalTextResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExternalTextResolver")
            .field("database_language", &self.database_language)
            .finish_non_exhaustive()
    }
}

impl ExternalTextResolver {
    pub fn new(database_language: impl Into<String>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            database_language: database_language.into(),
            fs,
        }
    }

    pub fn database_language(&self) -> &str {
        &self.database_language
    }

    /// Lists the paths to probe for `path`, most specific first.
    pub fn candidates(&self, path: &Path) -> Result<Vec<PathBuf>, LexicalErrorKind> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (stem, extension) = split_extension(&file_name);

        if !extension.eq_ignore_ascii_case(SQL_EXTENSION) {
            return Ok(vec![path.to_path_buf()]);
        }

        if stem.trim().is_empty() {
            return Err(LexicalErrorKind::EmptyFileName {
                path: path.display().to_string(),
            });
        }

        let folder = path.parent().unwrap_or_else(|| Path::new(""));
        let dialect = &self.database_language;
        Ok(vec![
            folder.join(format!("{}.{}{}", stem, dialect, extension)),
            folder.join(format!("{} ({}){}", stem, dialect, extension)),
            path.to_path_buf(),
        ])
    }

    /// Returns the full text of the first existing candidate.
    pub fn resolve(&self, path: &Path) -> Result<String, LexicalErrorKind> {
        let candidates = self.candidates(path)?;

        for candidate in &candidates {
            trace!("Probing external text file {:?}", candidate);
            if self.fs.is_file(candidate) {
                debug!("Resolved external text reference {:?} to {:?}", path, candidate);
                return self.fs.read_to_string(candidate).map_err(|e| {
                    LexicalErrorKind::ExternalFileUnreadable {
                        path: candidate.display().to_string(),
                        reason: e.to_string(),
                    }
                });
            }
        }

        Err(LexicalErrorKind::ExternalFileNotFound {
            candidates: candidates
                .iter()
                .map(|candidate| candidate.display().to_string())
                .collect(),
        })
    }
}

/// Splits at the last dot: `report.sql` → (`report`, `.sql`), `.sql` → (``, `.sql`).
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(index) => file_name.split_at(index),
        None => (file_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFileSystem;
    use pretty_assertions::assert_eq;

    fn resolver(fs: MemoryFileSystem) -> ExternalTextResolver {
        ExternalTextResolver::new("PostgreSql", Arc::new(fs))
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("report.sql"), ("report", ".sql"));
        assert_eq!(split_extension("a.b.SQL"), ("a.b", ".SQL"));
        assert_eq!(split_extension(".sql"), ("", ".sql"));
        assert_eq!(split_extension("README"), ("README", ""));
    }

    #[test]
    fn test_sql_candidates_in_order() {
        let path = Path::new("dsl").join("report.sql");
        let candidates = resolver(MemoryFileSystem::new()).candidates(&path).unwrap();
        assert_eq!(
            candidates,
            vec![
                Path::new("dsl").join("report.PostgreSql.sql"),
                Path::new("dsl").join("report (PostgreSql).sql"),
                path.clone(),
            ]
        );
    }

    #[test]
    fn test_extension_match_ignores_case() {
        let candidates = resolver(MemoryFileSystem::new())
            .candidates(Path::new("Report.SQL"))
            .unwrap();
        assert_eq!(candidates[0], PathBuf::from("Report.PostgreSql.SQL"));
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_other_extensions_only_try_plain_path() {
        let candidates = resolver(MemoryFileSystem::new())
            .candidates(Path::new("docs/readme.txt"))
            .unwrap();
        assert_eq!(candidates, vec![PathBuf::from("docs/readme.txt")]);
    }

    #[test]
    fn test_empty_stem() {
        let result = resolver(MemoryFileSystem::new()).resolve(Path::new("sql/.sql"));
        assert!(matches!(result, Err(LexicalErrorKind::EmptyFileName { .. })));

        let result = resolver(MemoryFileSystem::new()).resolve(Path::new(" .sql"));
        assert!(matches!(result, Err(LexicalErrorKind::EmptyFileName { .. })));
    }

    #[test]
    fn test_dialect_file_wins() {
        let fs = MemoryFileSystem::new()
            .with_file("report.sql", "generic")
            .with_file("report.PostgreSql.sql", "dotted")
            .with_file("report (PostgreSql).sql", "parenthesized");
        assert_eq!(resolver(fs).resolve(Path::new("report.sql")).unwrap(), "dotted");
    }

    #[test]
    fn test_parenthesized_dialect_file_before_generic() {
        let fs = MemoryFileSystem::new()
            .with_file("report.sql", "generic")
            .with_file("report (PostgreSql).sql", "parenthesized");
        assert_eq!(
            resolver(fs).resolve(Path::new("report.sql")).unwrap(),
            "parenthesized"
        );
    }

    #[test]
    fn test_generic_fallback() {
        let fs = MemoryFileSystem::new()
            .with_file("report.sql", "generic")
            .with_file("report.MsSql.sql", "other dialect");
        assert_eq!(resolver(fs).resolve(Path::new("report.sql")).unwrap(), "generic");
    }

    #[test]
    fn test_not_found_lists_every_candidate() {
        let result = resolver(MemoryFileSystem::new()).resolve(Path::new("missing.sql"));
        assert_eq!(
            result,
            Err(LexicalErrorKind::ExternalFileNotFound {
                candidates: vec![
                    "missing.PostgreSql.sql".to_string(),
                    "missing (PostgreSql).sql".to_string(),
                    "missing.sql".to_string(),
                ]
            })
        );
    }
}
