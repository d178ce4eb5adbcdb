use super::entry::{Entry, ItemEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapper name -> (key -> value), scoped to the recipe that declares it.
pub type MapperTable = BTreeMap<String, BTreeMap<String, String>>;

/// Facing direction -> sprite ids, in row order.
pub type SpriteFaces = BTreeMap<String, Vec<String>>;

/// A leftover `key = value` property of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    List(Vec<String>),
    Scalar(String),
}

impl PropertyValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            PropertyValue::Scalar(value) => Some(value),
            PropertyValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::List(values) => Some(values),
            PropertyValue::Scalar(_) => None,
        }
    }
}

/// One crafting or construction recipe, as read from a script.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<Entry>,
    #[serde(default)]
    pub outputs: Vec<Entry>,
    /// Absent, never empty, when the recipe declares no mappers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_mappers: Option<MapperTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub construction: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_outputs: Option<SpriteFaces>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_base_health: Option<f64>,
    #[serde(default)]
    pub extra: BTreeMap<String, PropertyValue>,
}

impl RecipeRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Item entries among the inputs, in order.
    pub fn item_inputs(&self) -> impl Iterator<Item = &ItemEntry> {
        self.inputs.iter().filter_map(Entry::as_item)
    }

    /// Item entries among the outputs, in order.
    pub fn item_outputs(&self) -> impl Iterator<Item = &ItemEntry> {
        self.outputs.iter().filter_map(Entry::as_item)
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.extra.get(key)
    }
}
