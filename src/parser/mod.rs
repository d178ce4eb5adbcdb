//! Turning script text into [`RecipeRecord`]s.
//!
//! [`ScriptParser`] drives the whole pass: comments are stripped once per buffer, every
//! `craftRecipe` block is assembled, then the same text is searched for construction
//! modules. Parsing never fails; recoverable problems end up in [`ParseReport::issues`].

use crate::config::ParserConfig;
use crate::error::ParseIssue;
use crate::recipe::{RecipeDocument, RecipeRecord};
use crate::scan::{extract_recipe_blocks, strip_comments_detailed};
use ahash::AHashMap;

pub mod assembler;
pub mod construction;
pub mod lines;
pub mod mappers;

pub use assembler::assemble_recipe;
pub use construction::parse_construction;
pub use lines::{
    ClassifiedLine, FluidDirection, FluidLine, SectionEntries, classify_line, parse_energy_line,
    parse_fluid_line, parse_item_line, parse_section,
};
pub use mappers::extract_item_mappers;

/// Records from one or more buffers plus the issues met along the way.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub recipes: Vec<RecipeRecord>,
    pub issues: Vec<ParseIssue>,
    positions: AHashMap<String, usize>,
}

impl ParseReport {
    /// Adds a record. A later record with a known name replaces the earlier one in place.
    pub fn insert(&mut self, record: RecipeRecord) {
        match self.positions.get(&record.name) {
            Some(&index) => {
                tracing::debug!(recipe = %record.name, "replacing earlier recipe with same name");
                self.recipes[index] = record;
            }
            None => {
                self.positions.insert(record.name.clone(), self.recipes.len());
                self.recipes.push(record);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&RecipeRecord> {
        self.positions.get(name).map(|&index| &self.recipes[index])
    }

    /// Folds another report in, applying the same last-wins rule.
    pub fn merge(&mut self, other: ParseReport) {
        self.issues.extend(other.issues);
        for record in other.recipes {
            self.insert(record);
        }
    }

    pub fn into_document(self) -> RecipeDocument {
        RecipeDocument::new(self.recipes)
    }
}

pub struct ScriptParser {
    config: ParserConfig,
}

pub struct ScriptParserBuilder {
    config: ParserConfig,
}

impl ScriptParserBuilder {
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_default_module(mut self, module: &str) -> Self {
        self.config.default_module = module.to_string();
        self
    }
    pub fn with_wildcard_fluid_label(mut self, label: &str) -> Self {
        self.config.wildcard_fluid_label = label.to_string();
        self
    }
    pub fn build(self) -> ScriptParser {
        ScriptParser {
            config: self.config,
        }
    }
}

impl Default for ScriptParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ScriptParser {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScriptParser {
    pub fn builder() -> ScriptParserBuilder {
        ScriptParserBuilder::new()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses one buffer and returns its records in source order.
    pub fn parse(&self, source: &str) -> Vec<RecipeRecord> {
        self.parse_report(source).recipes
    }

    /// Parses one buffer, keeping the issues met along the way.
    pub fn parse_report(&self, source: &str) -> ParseReport {
        let mut report = ParseReport::default();
        self.parse_into(source, &mut report);
        report
    }

    /// Parses several buffers in order into a single report.
    pub fn parse_sources<I, S>(&self, sources: I) -> ParseReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = ParseReport::default();
        for source in sources {
            self.parse_into(source.as_ref(), &mut report);
        }
        report
    }

    fn parse_into(&self, source: &str, report: &mut ParseReport) {
        let stripped = strip_comments_detailed(source);
        if let Some(offset) = stripped.unterminated_at {
            tracing::warn!(offset, "unterminated block comment, ignoring the rest of the buffer");
            report
                .issues
                .push(ParseIssue::UnterminatedComment { offset });
        }

        let mut issues = Vec::new();
        let mut records = Vec::new();
        for block in extract_recipe_blocks(&stripped.text, &mut issues) {
            if let Some(body) = block.body() {
                records.push(assemble_recipe(&block.name, body, &self.config, &mut issues));
            }
        }
        records.extend(parse_construction(&stripped.text, &self.config, &mut issues));

        report.issues.extend(issues);
        for record in records {
            report.insert(record);
        }
    }
}

/// Parses one buffer with the default configuration.
pub fn parse_script(source: &str) -> Vec<RecipeRecord> {
    ScriptParser::default().parse(source)
}
