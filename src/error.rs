use std::path::PathBuf;
use thiserror::Error;

/// Recoverable conditions met while parsing a script.
///
/// None of these abort a parse. The driver collects them in source order so callers
/// can report them, and every one of them is also logged when it happens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseIssue {
    #[error("{kind} block '{name}' never reaches balanced closure and was dropped")]
    MalformedBlock { kind: String, name: String },

    #[error("Unrecognized line skipped: '{line}'")]
    UnrecognizedLine { line: String },

    #[error("Recipe '{recipe}' has no '{section}' section, using an empty list")]
    MissingSection { recipe: String, section: String },

    #[error("Block comment opened at byte {offset} is never closed, dropping the remaining text")]
    UnterminatedComment { offset: usize },
}

/// Errors raised while locating or reading script sources. This is the only fatal class.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Could not read script '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not walk directory '{}': {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Errors that can occur when loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not open config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
