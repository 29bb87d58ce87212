use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::SkillLevel;
use crate::error::{RadarError, RadarResult};
use crate::render::Color;

/// One selectable skill category with its accent color and skill records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// CSS-style hex color (`#rrggbb` or `#rrggbbaa`) used for the polygon,
    /// markers, and center dot of this category's chart.
    pub accent_color: String,
    pub skills: Vec<SkillLevel>,
}

impl SkillCategory {
    pub fn validate(&self) -> RadarResult<()> {
        if self.id.is_empty() {
            return Err(RadarError::InvalidArgument(
                "category id must not be empty".to_owned(),
            ));
        }
        if self.name.is_empty() {
            return Err(RadarError::InvalidArgument(format!(
                "category `{}` name must not be empty",
                self.id
            )));
        }
        Color::from_hex(&self.accent_color)?;

        for (i, skill) in self.skills.iter().enumerate() {
            skill.validate()?;
            // Hover correlation and label lookup require unique names.
            if self.skills[..i].iter().any(|s| s.name == skill.name) {
                return Err(RadarError::InvalidArgument(format!(
                    "category `{}` has duplicate skill `{}`",
                    self.id, skill.name
                )));
            }
        }
        Ok(())
    }

    /// Parsed accent color.
    pub fn accent(&self) -> RadarResult<Color> {
        Color::from_hex(&self.accent_color)
    }
}

/// Ordered catalog of skill categories keyed by id.
///
/// `IndexMap` is used to preserve insertion order for stable snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCatalog {
    categories: IndexMap<String, SkillCategory>,
}

impl SkillCatalog {
    pub fn from_categories(categories: Vec<SkillCategory>) -> RadarResult<Self> {
        let mut map = IndexMap::with_capacity(categories.len());
        for category in categories {
            category.validate()?;
            let id = category.id.clone();
            if map.insert(id.clone(), category).is_some() {
                return Err(RadarError::InvalidArgument(format!(
                    "duplicate category id `{id}`"
                )));
            }
        }
        Ok(Self { categories: map })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SkillCategory> {
        self.categories.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.categories.contains_key(id)
    }

    pub fn categories(&self) -> impl Iterator<Item = &SkillCategory> {
        self.categories.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Serializes the category list to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> RadarResult<String> {
        let categories: Vec<&SkillCategory> = self.categories.values().collect();
        serde_json::to_string_pretty(&categories)
            .map_err(|e| RadarError::InvalidArgument(format!("failed to serialize catalog: {e}")))
    }

    /// Deserializes a category list from JSON.
    pub fn from_json_str(input: &str) -> RadarResult<Self> {
        let categories: Vec<SkillCategory> = serde_json::from_str(input)
            .map_err(|e| RadarError::InvalidArgument(format!("failed to parse catalog: {e}")))?;
        Self::from_categories(categories)
    }
}
