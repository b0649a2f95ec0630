use crate::{
    error::EngineResult,
    models::{Mood, OutfitRecommendation},
    services::{
        engine::RecommendationEngine,
        providers::{WardrobeStore, WeatherProvider},
    },
};

/// Produces outfit recommendations for one owner at one location.
///
/// Fetches the wardrobe and the current weather through the collaborator
/// traits, then hands both to the engine. This is the call an API layer
/// wraps one-to-one.
pub async fn recommend_for_owner(
    store: &dyn WardrobeStore,
    weather: &dyn WeatherProvider,
    engine: &RecommendationEngine,
    owner_id: i64,
    location: &str,
    mood: Mood,
    count: usize,
) -> EngineResult<Vec<OutfitRecommendation>> {
    let items = store.items_for_owner(owner_id).await?;
    tracing::info!(
        store = store.name(),
        owner_id,
        items = items.len(),
        "Wardrobe loaded"
    );

    let report = weather.current(location).await?;
    tracing::info!(
        provider = weather.name(),
        location,
        condition = %report.condition,
        temperature_c = report.temperature_c,
        "Weather resolved"
    );

    engine.generate(&items, report.condition, mood, count)
}
