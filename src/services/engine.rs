use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use rand::Rng;

use crate::{
    config::EngineConfig,
    error::{EngineError, EngineResult},
    models::{Mood, Outfit, OutfitRecommendation, WardrobeItem, WeatherCondition},
    services::{composer::OutfitComposer, scoring::ItemScorer},
};

/// Generates ranked outfit recommendations from a wardrobe snapshot.
///
/// Stateless between calls: every invocation scores, composes and ranks from
/// scratch, so any number of them may run concurrently.
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Creates an engine with default tuning
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine with custom tuning
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The tuning constants this engine runs with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates up to `count` unique outfit recommendations, best first.
    ///
    /// A sparse wardrobe may fill fewer than `count` slots; that is a normal
    /// outcome, not an error. Only a zero `count` is rejected.
    pub fn generate(
        &self,
        items: &[WardrobeItem],
        weather: WeatherCondition,
        mood: Mood,
        count: usize,
    ) -> EngineResult<Vec<OutfitRecommendation>> {
        self.generate_with_rng(items, weather, mood, count, &mut rand::rng())
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied random
    /// source, for reproducible runs
    pub fn generate_with_rng<R: Rng>(
        &self,
        items: &[WardrobeItem],
        weather: WeatherCondition,
        mood: Mood,
        count: usize,
        rng: &mut R,
    ) -> EngineResult<Vec<OutfitRecommendation>> {
        if count == 0 {
            return Err(EngineError::InvalidCount(count));
        }
        if items.is_empty() {
            return Ok(Vec::new());
        }

        tracing::info!(
            items = items.len(),
            weather = %weather,
            mood = %mood,
            count,
            "Generating outfit recommendations"
        );

        let scorer = ItemScorer::new(&self.config, weather, mood);
        let composer = OutfitComposer::new(&self.config, items, weather, mood);

        let budget = count * self.config.attempt_multiplier;
        let mut seen: HashSet<BTreeSet<i64>> = HashSet::new();
        let mut accepted: Vec<(Outfit, f64)> = Vec::new();
        let mut attempts = 0;

        while attempts < budget && accepted.len() < count {
            attempts += 1;
            let outfit = composer.compose(rng);

            if outfit.len() < 2 {
                tracing::debug!(
                    attempt = attempts,
                    items = outfit.len(),
                    "Skipping undersized candidate"
                );
                continue;
            }
            if !seen.insert(outfit.id_set()) {
                tracing::debug!(attempt = attempts, "Skipping duplicate candidate");
                continue;
            }

            let score = scorer.score_outfit(&outfit);
            accepted.push((outfit, score));
        }

        if accepted.len() < count {
            tracing::warn!(
                requested = count,
                produced = accepted.len(),
                attempts,
                "Attempt budget exhausted before filling the request"
            );
        }

        accepted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        accepted.truncate(count);

        let recommendations: Vec<OutfitRecommendation> = accepted
            .into_iter()
            .enumerate()
            .map(|(index, (outfit, score))| OutfitRecommendation {
                outfit,
                score,
                rank: index + 1,
            })
            .collect();

        tracing::info!(
            produced = recommendations.len(),
            attempts,
            "Outfit recommendations ready"
        );

        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use rand::{rngs::StdRng, SeedableRng};

    fn wardrobe() -> Vec<WardrobeItem> {
        vec![
            WardrobeItem::new(1, "Yellow Tee", Category::Tops)
                .with_tags(["t-shirt"])
                .with_color("yellow"),
            WardrobeItem::new(2, "Navy Tee", Category::Tops)
                .with_tags(["t-shirt"])
                .with_color("navy"),
            WardrobeItem::new(3, "White Shorts", Category::Bottoms)
                .with_tags(["shorts"])
                .with_color("white"),
            WardrobeItem::new(4, "Khaki Shorts", Category::Bottoms)
                .with_tags(["shorts"])
                .with_color("tan"),
            WardrobeItem::new(5, "Sandals", Category::Shoes).with_tags(["sandals"]),
        ]
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let engine = RecommendationEngine::new();
        let result = engine.generate(&wardrobe(), WeatherCondition::Sunny, Mood::Happy, 0);
        assert!(matches!(result, Err(EngineError::InvalidCount(0))));
    }

    #[test]
    fn test_empty_wardrobe_yields_no_recommendations() {
        let engine = RecommendationEngine::new();
        let recommendations = engine
            .generate(&[], WeatherCondition::Rainy, Mood::Relaxed, 5)
            .unwrap();
        assert!(recommendations.is_empty());
    }

    #[test]
    fn test_recommendations_are_unique_sized_and_ranked() {
        let engine = RecommendationEngine::new();
        let mut rng = StdRng::seed_from_u64(42);
        let recommendations = engine
            .generate_with_rng(&wardrobe(), WeatherCondition::Sunny, Mood::Happy, 3, &mut rng)
            .unwrap();

        assert!(!recommendations.is_empty());
        assert!(recommendations.len() <= 3);

        let mut seen = HashSet::new();
        for (index, rec) in recommendations.iter().enumerate() {
            assert!(rec.outfit.len() >= 2);
            assert!(seen.insert(rec.outfit.id_set()));
            assert_eq!(rec.rank, index + 1);
            if index > 0 {
                assert!(recommendations[index - 1].score >= rec.score);
            }
        }
    }

    #[test]
    fn test_fixed_seed_reproduces_the_run() {
        let engine = RecommendationEngine::new();
        let items = wardrobe();

        let mut first_rng = StdRng::seed_from_u64(9);
        let first = engine
            .generate_with_rng(&items, WeatherCondition::Sunny, Mood::Happy, 3, &mut first_rng)
            .unwrap();

        let mut second_rng = StdRng::seed_from_u64(9);
        let second = engine
            .generate_with_rng(&items, WeatherCondition::Sunny, Mood::Happy, 3, &mut second_rng)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_two_item_wardrobe_yields_exactly_one_outfit() {
        let engine = RecommendationEngine::new();
        let items = vec![
            WardrobeItem::new(1, "Yellow Tee", Category::Tops)
                .with_tags(["t-shirt"])
                .with_color("yellow"),
            WardrobeItem::new(2, "White Shorts", Category::Bottoms)
                .with_tags(["shorts"])
                .with_color("white"),
        ];

        let mut rng = StdRng::seed_from_u64(13);
        let recommendations = engine
            .generate_with_rng(&items, WeatherCondition::Sunny, Mood::Happy, 3, &mut rng)
            .unwrap();

        assert_eq!(recommendations.len(), 1);
        let rec = &recommendations[0];
        assert_eq!(rec.outfit.id_set(), BTreeSet::from([1, 2]));
        assert_eq!(rec.rank, 1);
        assert!(rec.score > 0.5);
    }
}
