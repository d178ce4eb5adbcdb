//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kumitate crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumitate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let config = KumitateConfig::default();
//! let paths = discover_sources(Path::new("media/scripts"), &config.sources)?;
//! let sources = load_sources(&paths)?;
//!
//! let parser = ScriptParser::builder().with_config(config.parser).build();
//! let report = parser.parse_sources(sources.iter().map(|s| s.text.as_str()));
//!
//! println!("{}", report.into_document().to_json_pretty()?);
//! # Ok(())
//! # }
//! ```

// Parsing
pub use crate::parser::{ParseReport, ScriptParser, ScriptParserBuilder, parse_script};

// Records
pub use crate::recipe::{
    EnergyEntry, Entry, FluidEntry, FluidModifier, ItemEntry, MapperTable, PropertyValue,
    RecipeDocument, RecipeRecord, SkinEntry, SpriteFaces,
};

// Configuration and sources
pub use crate::config::{KumitateConfig, ParserConfig};
pub use crate::discovery::{
    ScriptSource, SourceFilter, discover_sources, load_source, load_sources,
};

// Error types
pub use crate::error::{ConfigError, ParseIssue, SourceError};

// Standard library re-exports commonly used with this crate
pub use std::path::Path;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
