//! Construction recipes, read from `module { xuiSkin { entity } entity { component } }` nesting.

use super::assembler::assemble_recipe;
use crate::config::ParserConfig;
use crate::error::ParseIssue;
use crate::recipe::{Entry, RecipeRecord, SkinEntry, SpriteFaces};
use crate::scan::{BlockKind, find_blocks, find_property, parse_properties, remove_spans};
use ahash::AHashMap;
use regex::Regex;
use std::sync::LazyLock;

static SPRITE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brow\s*=\s*([^,\n}]*)").expect("valid regex"));
static SKILL_BASE_HEALTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bskillBaseHealth\s*=\s*(\d*\.?\d+)").expect("valid regex")
});

/// Display labels declared by a module's `xuiSkin` block, keyed by skin entity name.
#[derive(Debug, Default)]
pub struct SkinTable {
    pub name: String,
    pub entries: AHashMap<String, SkinEntry>,
}

impl SkinTable {
    fn from_block(name: &str, body: &str, issues: &mut Vec<ParseIssue>) -> Self {
        let entries = find_blocks(body, BlockKind::Entity, issues)
            .into_iter()
            .map(|entity| {
                let props = parse_properties(entity.body);
                let skin = SkinEntry {
                    display_name: find_property(&props, "DisplayName").map(str::to_string),
                    icon: find_property(&props, "Icon").map(str::to_string),
                };
                (entity.name.to_string(), skin)
            })
            .collect();
        Self {
            name: name.to_string(),
            entries,
        }
    }

    /// Looks `style` up among the skin entities. When the style names the skin block
    /// itself, the constructed entity's own name is used instead.
    pub fn resolve(&self, style: &str, entity: &str) -> Option<&SkinEntry> {
        self.entries.get(style).or_else(|| {
            if style == self.name {
                self.entries.get(entity)
            } else {
                None
            }
        })
    }
}

/// Sprite faces and base health from a `SpriteConfig` component.
fn parse_sprite_config(
    body: &str,
    issues: &mut Vec<ParseIssue>,
) -> (Option<SpriteFaces>, Option<f64>) {
    let faces: SpriteFaces = find_blocks(body, BlockKind::Face, issues)
        .into_iter()
        .map(|face| {
            let sprites = SPRITE_ROW
                .captures_iter(face.body)
                .flat_map(|caps| {
                    caps[1]
                        .split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .collect();
            (face.name.to_string(), sprites)
        })
        .collect();

    let health = SKILL_BASE_HEALTH
        .captures(body)
        .and_then(|caps| caps[1].parse().ok());

    ((!faces.is_empty()).then_some(faces), health)
}

/// Builds a record for an entity carrying a `CraftRecipe` component.
fn parse_entity(
    name: &str,
    body: &str,
    skins: Option<&SkinTable>,
    config: &ParserConfig,
    issues: &mut Vec<ParseIssue>,
) -> Option<RecipeRecord> {
    let components: AHashMap<&str, &str> = find_blocks(body, BlockKind::Component, issues)
        .into_iter()
        .map(|component| (component.name, component.body))
        .collect();

    let craft = components.get("CraftRecipe")?;
    let mut record = assemble_recipe(name, craft, config, issues);
    record.construction = true;

    let style = components.get("UiConfig").and_then(|ui| {
        let props = parse_properties(ui);
        find_property(&props, "entityStyle").map(str::to_string)
    });
    if let (Some(style), Some(skins)) = (style, skins) {
        match skins.resolve(&style, name) {
            Some(skin) => record.outputs.push(Entry::Skin(skin.clone())),
            None => tracing::debug!(entity = name, style = %style, "entity style not found in skin"),
        }
    }

    if let Some(sprites) = components.get("SpriteConfig") {
        let (faces, health) = parse_sprite_config(sprites, issues);
        record.sprite_outputs = faces;
        record.skill_base_health = health;
    }

    tracing::debug!(entity = name, "assembled construction recipe");
    Some(record)
}

/// Parses every `module` region of comment-free text into construction records.
pub fn parse_construction(
    text: &str,
    config: &ParserConfig,
    issues: &mut Vec<ParseIssue>,
) -> Vec<RecipeRecord> {
    let mut records = Vec::new();

    for module in find_blocks(text, BlockKind::Module, issues) {
        let skin_block = find_blocks(module.body, BlockKind::XuiSkin, issues)
            .into_iter()
            .next();
        let skins = skin_block
            .as_ref()
            .map(|skin| SkinTable::from_block(skin.name, skin.body, issues));

        // Entities inside the skin are labels, not constructions.
        let body = match &skin_block {
            Some(skin) => remove_spans(module.body, std::slice::from_ref(&skin.span)),
            None => module.body.to_string(),
        };

        for entity in find_blocks(&body, BlockKind::Entity, issues) {
            if let Some(record) =
                parse_entity(entity.name, entity.body, skins.as_ref(), config, issues)
            {
                records.push(record);
            }
        }
    }

    records
}
