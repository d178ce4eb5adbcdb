use super::definition::RecipeRecord;
use serde::{Deserialize, Serialize};

/// The ordered record list as a single nested document.
///
/// This is the form handed to downstream table generation. Writing it anywhere is left
/// to the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeDocument {
    pub recipes: Vec<RecipeRecord>,
}

impl RecipeDocument {
    pub fn new(recipes: Vec<RecipeRecord>) -> Self {
        Self { recipes }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, name: &str) -> Option<&RecipeRecord> {
        self.recipes.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl From<Vec<RecipeRecord>> for RecipeDocument {
    fn from(recipes: Vec<RecipeRecord>) -> Self {
        Self::new(recipes)
    }
}
