use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One line of an `inputs` or `outputs` section, after classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Item(ItemEntry),
    Fluid(FluidEntry),
    Energy(EnergyEntry),
    /// Display label attached to construction recipe outputs.
    Skin(SkinEntry),
}

impl Entry {
    pub fn as_item(&self) -> Option<&ItemEntry> {
        match self {
            Entry::Item(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_fluid(&self) -> Option<&FluidEntry> {
        match self {
            Entry::Fluid(fluid) => Some(fluid),
            _ => None,
        }
    }

    pub fn as_energy(&self) -> Option<&EnergyEntry> {
        match self {
            Entry::Energy(energy) => Some(energy),
            _ => None,
        }
    }

    pub fn as_skin(&self) -> Option<&SkinEntry> {
        match self {
            Entry::Skin(skin) => Some(skin),
            _ => None,
        }
    }
}

/// An `item <index> ...` line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEntry {
    pub index: u32,
    /// Module-qualified item ids, in source order.
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub flags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid_modifier: Option<FluidModifier>,
}

impl ItemEntry {
    /// Returns a copy of this entry carrying `modifier`, replacing any previous one.
    pub fn with_fluid_modifier(&self, modifier: FluidModifier) -> Self {
        Self {
            fluid_modifier: Some(modifier),
            ..self.clone()
        }
    }
}

/// Fluid consumed or produced alongside an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidModifier {
    pub fluid_type: Vec<String>,
    pub amount: f64,
}

/// A fluid line with no item to attach to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidEntry {
    pub amount: f64,
    pub items: Vec<String>,
}

impl From<FluidModifier> for FluidEntry {
    fn from(modifier: FluidModifier) -> Self {
        Self {
            amount: modifier.amount,
            items: modifier.fluid_type,
        }
    }
}

/// An `energy <amount> <type> [modifiers]` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyEntry {
    pub amount: f64,
    #[serde(rename = "type")]
    pub energy_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
