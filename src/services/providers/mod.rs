//! Collaborator seams for the recommendation service.
//!
//! The engine itself is pure; wardrobe contents and weather observations
//! reach it through these traits, so embedders can plug in any backend
//! without the engine knowing where the data lives.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::{
    error::EngineResult,
    models::{WardrobeItem, WeatherReport},
};

/// Source of a user's wardrobe items
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WardrobeStore: Send + Sync {
    /// Every item the owner can build outfits from
    async fn items_for_owner(&self, owner_id: i64) -> EngineResult<Vec<WardrobeItem>>;

    /// Store name for logging
    fn name(&self) -> &'static str;
}

/// Source of current weather observations
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current weather for a free-text location
    async fn current(&self, location: &str) -> EngineResult<WeatherReport>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Lock-protected in-memory wardrobe, for tests and embedders without a
/// persistent backend
#[derive(Default)]
pub struct InMemoryWardrobe {
    items: RwLock<HashMap<i64, Vec<WardrobeItem>>>,
}

impl InMemoryWardrobe {
    /// Creates an empty wardrobe store
    pub fn new() -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Adds an item to an owner's wardrobe
    pub async fn add_item(&self, owner_id: i64, item: WardrobeItem) {
        self.items.write().await.entry(owner_id).or_default().push(item);
    }

    /// Number of items an owner holds
    pub async fn item_count(&self, owner_id: i64) -> usize {
        self.items
            .read()
            .await
            .get(&owner_id)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[async_trait::async_trait]
impl WardrobeStore for InMemoryWardrobe {
    async fn items_for_owner(&self, owner_id: i64) -> EngineResult<Vec<WardrobeItem>> {
        Ok(self
            .items
            .read()
            .await
            .get(&owner_id)
            .cloned()
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[tokio::test]
    async fn test_in_memory_wardrobe_separates_owners() {
        let store = InMemoryWardrobe::new();
        store
            .add_item(1, WardrobeItem::new(10, "Tee", Category::Tops))
            .await;
        store
            .add_item(1, WardrobeItem::new(11, "Jeans", Category::Bottoms))
            .await;
        store
            .add_item(2, WardrobeItem::new(20, "Dress", Category::Dresses))
            .await;

        let first = store.items_for_owner(1).await.unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(store.item_count(2).await, 1);
        assert!(store.items_for_owner(3).await.unwrap().is_empty());
    }
}
