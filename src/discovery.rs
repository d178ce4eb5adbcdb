//! Locating and reading script files on disk.
//!
//! This is the only part of the crate that performs I/O. Parsing itself works on
//! in-memory text, so the sources returned here can be parsed in any order or in parallel.

use crate::error::SourceError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name rules deciding which files hold recipe scripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFilter {
    /// Accepted file name prefixes.
    pub prefixes: Vec<String>,
    /// Required file name suffix.
    pub suffix: String,
    /// File names containing any of these are skipped.
    pub exclude: Vec<String>,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self {
            prefixes: vec![
                "recipes".to_string(),
                "entity".to_string(),
                "craftrecipe".to_string(),
            ],
            suffix: ".txt".to_string(),
            exclude: vec!["test".to_string(), "dbg".to_string()],
        }
    }
}

impl SourceFilter {
    /// Case-insensitive check of a bare file name against the rules.
    pub fn matches(&self, file_name: &str) -> bool {
        let name = file_name.to_ascii_lowercase();
        name.ends_with(&self.suffix.to_ascii_lowercase())
            && self
                .prefixes
                .iter()
                .any(|p| name.starts_with(&p.to_ascii_lowercase()))
            && !self
                .exclude
                .iter()
                .any(|x| name.contains(&x.to_ascii_lowercase()))
    }
}

/// A script file's path and contents.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    pub path: PathBuf,
    pub text: String,
}

/// Walks `root` and returns every file accepted by `filter`, sorted by path.
pub fn discover_sources(root: &Path, filter: &SourceFilter) -> Result<Vec<PathBuf>, SourceError> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|source| SourceError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let accepted = entry
            .file_name()
            .to_str()
            .is_some_and(|name| filter.matches(name));
        if accepted {
            tracing::debug!(path = %entry.path().display(), "found script source");
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}

pub fn load_source(path: &Path) -> Result<ScriptSource, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ScriptSource {
        path: path.to_path_buf(),
        text,
    })
}

/// Reads every path, failing on the first unreadable file.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ScriptSource>, SourceError> {
    paths.iter().map(|p| load_source(p.as_ref())).collect()
}
