//! Outfit recommendation engine.
//!
//! Scores wardrobe items against the current weather and a selected mood,
//! assembles category-balanced outfit candidates with randomized
//! tie-breaking, and returns the top-scoring unique combinations.
//!
//! The core is pure and synchronous; wardrobe contents and weather
//! observations arrive through the async collaborator traits in
//! [`services::providers`].

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use models::{
    Category, Mood, Outfit, OutfitRecommendation, WardrobeItem, WeatherCondition, WeatherReport,
};
pub use services::{
    providers::{InMemoryWardrobe, WardrobeStore, WeatherProvider},
    recommend_for_owner, ColorFamily, ItemScorer, OutfitComposer, RecommendationEngine,
};
