use super::lines::{SectionEntries, parse_section};
use super::mappers::extract_item_mappers;
use crate::config::ParserConfig;
use crate::error::ParseIssue;
use crate::recipe::{PropertyValue, RecipeRecord};
use crate::scan::{block_inner, extract_balanced, parse_properties};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static INPUTS_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\binputs\s*\{").expect("valid regex"));
static OUTPUTS_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\boutputs\s*\{").expect("valid regex"));

/// Location of a section inside a recipe body.
struct Section {
    inner: Range<usize>,
    span: Range<usize>,
}

fn locate_section(body: &str, opener: &Regex) -> Option<Section> {
    let found = opener.find(body)?;
    let (block, end) = extract_balanced(body, found.end() - 1)?;
    let inner_start = found.end();
    Some(Section {
        inner: inner_start..inner_start + block_inner(block).len(),
        span: found.start()..end,
    })
}

/// Parses one section and cuts it out of `body`. A missing section yields nothing.
fn take_section(
    body: &mut String,
    opener: &Regex,
    recipe: &str,
    section: &str,
    config: &ParserConfig,
    issues: &mut Vec<ParseIssue>,
) -> SectionEntries {
    match locate_section(body, opener) {
        Some(found) => {
            let entries = parse_section(&body[found.inner.clone()], config, issues);
            body.replace_range(found.span, "");
            entries
        }
        None => {
            tracing::debug!(recipe, section, "recipe has no section");
            issues.push(ParseIssue::MissingSection {
                recipe: recipe.to_string(),
                section: section.to_string(),
            });
            SectionEntries::default()
        }
    }
}

fn property_value(value: String) -> PropertyValue {
    if value.contains(';') {
        PropertyValue::List(
            value
                .split(';')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    } else {
        PropertyValue::Scalar(value)
    }
}

/// Builds one record from the comment-free text between a recipe's outer braces.
///
/// Mappers and the two sections are cut from the body first; whatever remains is read as
/// `key = value` properties.
pub fn assemble_recipe(
    name: &str,
    body: &str,
    config: &ParserConfig,
    issues: &mut Vec<ParseIssue>,
) -> RecipeRecord {
    let (mappers, mut body) = extract_item_mappers(body);

    let inputs = take_section(&mut body, &INPUTS_OPENER, name, "inputs", config, issues);
    let outputs = take_section(&mut body, &OUTPUTS_OPENER, name, "outputs", config, issues);

    let mut record = RecipeRecord::new(name);
    record.item_mappers = (!mappers.is_empty()).then_some(mappers);
    record.inputs = inputs.entries;
    record.outputs = outputs.entries;
    record.outputs.extend(inputs.siphoned);
    record.outputs.extend(outputs.siphoned);

    for (key, value) in parse_properties(&body) {
        if key.eq_ignore_ascii_case("category") {
            record.category = Some(value);
        } else {
            record.extra.insert(key, property_value(value));
        }
    }

    tracing::debug!(
        recipe = name,
        inputs = record.inputs.len(),
        outputs = record.outputs.len(),
        "assembled recipe"
    );
    record
}
