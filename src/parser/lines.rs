//! Grammars for the lines of an `inputs` or `outputs` section.
//!
//! Each grammar is a pure function from one line to a classified value. The section parser
//! threads a small accumulator through the lines so fluid lines can attach to the item
//! that precedes them.

use crate::config::ParserConfig;
use crate::error::ParseIssue;
use crate::recipe::{EnergyEntry, Entry, FluidEntry, FluidModifier, ItemEntry};
use itertools::Itertools;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

macro_rules! line_regex {
    ($name:ident, $pattern:literal) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect("valid line grammar"));
    };
}

line_regex!(ITEM_LINE, r"(?i)^item\s+(\d+)\b\s*(.*)$");
line_regex!(FLUID_LINE, r"(?i)^([+-])fluid\s+(\d*\.?\d+)\s*(.*)$");
line_regex!(ENERGY_LINE, r"(?i)^energy\s+(\d*\.?\d+)\s+(\S+)\s*(.*)$");
line_regex!(TAGS_ATTR, r"(?i)\btags\[([^\]]*)\]");
line_regex!(FLAGS_ATTR, r"(?i)\bflags\[([^\]]*)\]");
line_regex!(MAPPER_ATTR, r"(?i)\bmapper:\s*([^\s\[\]]+)");
line_regex!(MODE_ATTR, r"(?i)\bmode:\s*(\w+)");
line_regex!(ITEMCOUNT_TOKEN, r"(?i)(?:^|\s)itemcount(?:\s|$)");
line_regex!(BRACKET_GROUP, r"\[([^\]]*)\]");

/// Splits a `;`- or `,`-separated list, dropping blanks.
fn split_list(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split([';', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Removes the first match of `re` from `rest`, returning its first capture group.
fn take_attr(re: &Regex, rest: &mut String) -> Option<String> {
    let (range, value) = {
        let caps = re.captures(rest.as_str())?;
        (caps.get(0)?.range(), caps.get(1)?.as_str().to_string())
    };
    rest.replace_range(range, " ");
    Some(value)
}

/// Removes every match of `re` from `rest`, returning each first capture group.
fn take_all_attrs(re: &Regex, rest: &mut String) -> Vec<String> {
    let values = re
        .captures_iter(rest.as_str())
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect_vec();
    if !values.is_empty() {
        *rest = re.replace_all(rest.as_str(), " ").into_owned();
    }
    values
}

/// Removes every occurrence of a bare token from `rest`, reporting whether any was present.
fn take_token(re: &Regex, rest: &mut String) -> bool {
    if !re.is_match(rest.as_str()) {
        return false;
    }
    *rest = re.replace_all(rest.as_str(), " ").into_owned();
    true
}

/// `item <index> <rest>`, where `rest` holds attributes in any order plus the item ids.
pub fn parse_item_line(line: &str, config: &ParserConfig) -> Option<ItemEntry> {
    let caps = ITEM_LINE.captures(line)?;
    let index = caps[1].parse().ok()?;
    let mut rest = caps[2].to_string();

    // Bracketed attributes go first so their contents are not mistaken for item groups.
    let tags = take_all_attrs(&TAGS_ATTR, &mut rest)
        .iter()
        .flat_map(|list| split_list(list))
        .collect();
    let mut flags: BTreeSet<String> = take_all_attrs(&FLAGS_ATTR, &mut rest)
        .iter()
        .flat_map(|list| split_list(list))
        .collect();
    let mapper = take_attr(&MAPPER_ATTR, &mut rest);
    let mode = take_attr(&MODE_ATTR, &mut rest).map(|m| capitalize(&m));

    let groups = take_all_attrs(&BRACKET_GROUP, &mut rest);
    // Only a free-standing token counts; ids ending in `ItemCount` must survive.
    if take_token(&ITEMCOUNT_TOKEN, &mut rest) {
        flags.insert("itemcount".to_string());
    }
    let raw_items = if groups.is_empty() {
        split_list(&rest).collect_vec()
    } else {
        groups.iter().flat_map(|g| split_list(g)).collect_vec()
    };
    let items = raw_items.iter().map(|id| config.qualify(id)).collect();

    Some(ItemEntry {
        index,
        items,
        mapper,
        mode,
        tags,
        flags,
        fluid_modifier: None,
    })
}

/// Whether a fluid line consumes (`-fluid`) or produces (`+fluid`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluidDirection {
    Consumed,
    Produced,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FluidLine {
    pub direction: FluidDirection,
    pub modifier: FluidModifier,
}

/// `<sign>fluid <amount> ([list] | token)`.
pub fn parse_fluid_line(line: &str) -> Option<FluidLine> {
    let caps = FLUID_LINE.captures(line)?;
    let direction = if &caps[1] == "+" {
        FluidDirection::Produced
    } else {
        FluidDirection::Consumed
    };
    let amount = caps[2].parse().ok()?;
    let rest = caps[3].trim();

    let fluid_type = match BRACKET_GROUP.captures(rest) {
        Some(group) if rest.starts_with('[') => split_list(&group[1]).collect(),
        _ => rest
            .split_whitespace()
            .next()
            .map(|token| vec![token.to_string()])
            .unwrap_or_default(),
    };

    Some(FluidLine {
        direction,
        modifier: FluidModifier { fluid_type, amount },
    })
}

/// `energy <amount> <type> [modifiers]`.
pub fn parse_energy_line(line: &str) -> Option<EnergyEntry> {
    let caps = ENERGY_LINE.captures(line)?;
    let modifiers = caps[3].trim();
    Some(EnergyEntry {
        amount: caps[1].parse().ok()?,
        energy_type: caps[2].to_string(),
        modifiers: (!modifiers.is_empty()).then(|| modifiers.to_string()),
    })
}

/// A section line after classification.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedLine {
    Item(ItemEntry),
    Fluid(FluidLine),
    Energy(EnergyEntry),
}

/// Tries each grammar in turn. `None` means the line matches none of them.
pub fn classify_line(line: &str, config: &ParserConfig) -> Option<ClassifiedLine> {
    if let Some(fluid) = parse_fluid_line(line) {
        return Some(ClassifiedLine::Fluid(fluid));
    }
    if let Some(energy) = parse_energy_line(line) {
        return Some(ClassifiedLine::Energy(energy));
    }
    parse_item_line(line, config).map(ClassifiedLine::Item)
}

/// Entries parsed from one section, plus the `+fluid` clones bound for the recipe outputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionEntries {
    pub entries: Vec<Entry>,
    pub siphoned: Vec<Entry>,
}

/// Running state while walking the lines of one section.
struct SectionAccumulator<'c> {
    config: &'c ParserConfig,
    out: SectionEntries,
    /// Position in `out.entries` of the item that fluid lines attach to.
    last_item: Option<usize>,
}

impl<'c> SectionAccumulator<'c> {
    fn new(config: &'c ParserConfig) -> Self {
        Self {
            config,
            out: SectionEntries::default(),
            last_item: None,
        }
    }

    fn apply(&mut self, line: ClassifiedLine) {
        match line {
            ClassifiedLine::Item(item) => {
                self.last_item = Some(self.out.entries.len());
                self.out.entries.push(Entry::Item(item));
            }
            ClassifiedLine::Energy(energy) => {
                self.last_item = None;
                self.out.entries.push(Entry::Energy(energy));
            }
            ClassifiedLine::Fluid(fluid) => self.apply_fluid(fluid),
        }
    }

    fn apply_fluid(&mut self, fluid: FluidLine) {
        let FluidLine {
            direction,
            modifier,
        } = fluid;

        match direction {
            FluidDirection::Consumed => {
                let Some(index) = self.last_item else {
                    return self.push_standalone(modifier);
                };
                let config = self.config;
                if let Some(Entry::Item(item)) = self.out.entries.get_mut(index) {
                    if item.items.len() == 1 && item.items[0] == config.wildcard_item() {
                        item.items = vec![config.wildcard_fluid_label.clone()];
                    }
                    item.fluid_modifier = Some(modifier);
                }
            }
            FluidDirection::Produced => {
                let clone = self
                    .last_item
                    .and_then(|index| self.out.entries.get(index))
                    .and_then(Entry::as_item)
                    .map(|item| item.with_fluid_modifier(modifier.clone()));
                match clone {
                    Some(clone) => self.out.siphoned.push(Entry::Item(clone)),
                    None => self.push_standalone(modifier),
                }
            }
        }
    }

    fn push_standalone(&mut self, modifier: FluidModifier) {
        self.out.entries.push(Entry::Fluid(FluidEntry::from(modifier)));
    }

    fn finish(self) -> SectionEntries {
        self.out
    }
}

/// Parses the text inside one `inputs { }` or `outputs { }` region.
pub fn parse_section(
    text: &str,
    config: &ParserConfig,
    issues: &mut Vec<ParseIssue>,
) -> SectionEntries {
    let mut acc = SectionAccumulator::new(config);

    for raw in text.lines() {
        let line = match raw.find("//") {
            Some(cut) => &raw[..cut],
            None => raw,
        };
        let line = line.trim().trim_end_matches(',').trim_end();
        if line.is_empty() {
            continue;
        }
        match classify_line(line, config) {
            Some(classified) => acc.apply(classified),
            None => {
                tracing::trace!(line, "skipping unrecognized section line");
                issues.push(ParseIssue::UnrecognizedLine {
                    line: line.to_string(),
                });
            }
        }
    }

    acc.finish()
}
