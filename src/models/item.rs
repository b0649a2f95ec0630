use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::error::EngineError;

/// Garment category, the slot vocabulary shared by the whole engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
    Makeup,
}

impl Category {
    /// All categories in slot order
    pub const ALL: [Category; 7] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
        Category::Makeup,
    ];

    /// Lower-case name, as wardrobe backends store it
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Dresses => "dresses",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
            Category::Makeup => "makeup",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tops" => Ok(Category::Tops),
            "bottoms" => Ok(Category::Bottoms),
            "dresses" => Ok(Category::Dresses),
            "outerwear" => Ok(Category::Outerwear),
            "shoes" => Ok(Category::Shoes),
            "accessories" => Ok(Category::Accessories),
            "makeup" => Ok(Category::Makeup),
            _ => Err(EngineError::UnknownCategory(s.to_string())),
        }
    }
}

/// A single garment as supplied by the wardrobe store.
///
/// Only `id`, `name` and `category` are guaranteed; every other field may be
/// absent and is then treated as unknown rather than penalized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WardrobeItem {
    /// Store-issued identifier, stable across calls
    pub id: i64,
    /// Display name
    pub name: String,
    /// Garment category
    pub category: Category,
    /// Free-text subcategory, e.g. "t-shirt"
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Free-text color name
    #[serde(default)]
    pub color: Option<String>,
    /// Season text matched by substring, e.g. "winter" or "all"
    #[serde(default)]
    pub season: Option<String>,
    /// Free-text descriptive tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Marked as a favorite by the owner
    #[serde(default)]
    pub favorite: bool,
}

impl WardrobeItem {
    /// Creates an item with only the required fields set
    pub fn new(id: i64, name: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            subcategory: None,
            color: None,
            season: None,
            tags: Vec::new(),
            favorite: false,
        }
    }

    /// Sets the subcategory
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    /// Sets the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the season text
    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    /// Replaces the tag list
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Marks the item as a favorite
    pub fn with_favorite(mut self) -> Self {
        self.favorite = true;
        self
    }

    /// Declared color, treating an empty string as unset
    pub fn declared_color(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| !c.is_empty())
    }

    /// Declared season, treating an empty string as unset
    pub fn declared_season(&self) -> Option<&str> {
        self.season.as_deref().filter(|s| !s.is_empty())
    }

    /// Lower-cased searchable tags: the free-text tags plus the subcategory
    /// and the category name
    pub fn tag_set(&self) -> Vec<String> {
        let mut tags: Vec<String> = self.tags.iter().map(|t| t.to_lowercase()).collect();
        if let Some(subcategory) = self.subcategory.as_deref().filter(|s| !s.is_empty()) {
            tags.push(subcategory.to_lowercase());
        }
        tags.push(self.category.as_str().to_string());
        tags
    }
}
