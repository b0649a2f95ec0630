use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::WardrobeItem;

/// Selected garments grouped by category slot.
///
/// An outfit is built around either a dress or a top/bottom pair; the other
/// slots are optional extras. Empty slots are omitted from the serialized
/// form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Outfit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<WardrobeItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<WardrobeItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dress: Option<WardrobeItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outerwear: Option<WardrobeItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shoes: Option<WardrobeItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accessories: Vec<WardrobeItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub makeup: Vec<WardrobeItem>,
}

impl Outfit {
    /// Iterates over every garment across all slots
    pub fn items(&self) -> impl Iterator<Item = &WardrobeItem> {
        self.top
            .iter()
            .chain(self.bottom.iter())
            .chain(self.dress.iter())
            .chain(self.outerwear.iter())
            .chain(self.shoes.iter())
            .chain(self.accessories.iter())
            .chain(self.makeup.iter())
    }

    /// Number of garments in the outfit
    pub fn len(&self) -> usize {
        self.items().count()
    }

    /// Whether the outfit holds no garments at all
    pub fn is_empty(&self) -> bool {
        self.items().next().is_none()
    }

    /// Item-identifier set, the unit of duplicate detection: two outfits
    /// with the same id set are the same outfit regardless of slot layout
    pub fn id_set(&self) -> BTreeSet<i64> {
        self.items().map(|item| item.id).collect()
    }
}

/// A scored outfit in its final ranked position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutfitRecommendation {
    pub outfit: Outfit,
    /// Aggregate score in [0, 1]
    pub score: f64,
    /// 1-based position in score order
    pub rank: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn item(id: i64, category: Category) -> WardrobeItem {
        WardrobeItem::new(id, format!("item-{}", id), category)
    }

    #[test]
    fn test_len_counts_every_slot() {
        let outfit = Outfit {
            top: Some(item(1, Category::Tops)),
            bottom: Some(item(2, Category::Bottoms)),
            shoes: Some(item(3, Category::Shoes)),
            accessories: vec![item(4, Category::Accessories), item(5, Category::Accessories)],
            makeup: vec![item(6, Category::Makeup)],
            ..Outfit::default()
        };

        assert_eq!(outfit.len(), 6);
        assert!(!outfit.is_empty());
        assert!(Outfit::default().is_empty());
    }

    #[test]
    fn test_id_set_ignores_slot_layout() {
        let as_separates = Outfit {
            top: Some(item(1, Category::Tops)),
            bottom: Some(item(2, Category::Bottoms)),
            ..Outfit::default()
        };
        let as_extras = Outfit {
            accessories: vec![item(2, Category::Accessories), item(1, Category::Accessories)],
            ..Outfit::default()
        };

        assert_eq!(as_separates.id_set(), as_extras.id_set());
    }

    #[test]
    fn test_empty_slots_are_not_serialized() {
        let outfit = Outfit {
            dress: Some(item(9, Category::Dresses)),
            shoes: Some(item(10, Category::Shoes)),
            ..Outfit::default()
        };

        let value = serde_json::to_value(&outfit).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("dress"));
        assert!(object.contains_key("shoes"));
        assert!(!object.contains_key("top"));
        assert!(!object.contains_key("bottom"));
        assert!(!object.contains_key("outerwear"));
        assert!(!object.contains_key("accessories"));
        assert!(!object.contains_key("makeup"));
    }
}
