use std::cmp::Ordering;

use rand::Rng;

use crate::{
    config::EngineConfig,
    models::{Category, Mood, Outfit, WardrobeItem, WeatherCondition},
};

use super::{color, scoring::ItemScorer};

/// A category pool with per-item scores, kept sorted best first
type ScoredPool<'a> = Vec<(&'a WardrobeItem, f64)>;

/// Assembles one outfit candidate per call from pre-scored category pools.
///
/// Each slot is filled by a uniform random pick among that pool's top
/// scorers, which trades a little optimality for variety between attempts.
/// Composition never fails; a sparse wardrobe just yields a small outfit.
pub struct OutfitComposer<'a> {
    config: &'a EngineConfig,
    weather: WeatherCondition,
    tops: ScoredPool<'a>,
    bottoms: ScoredPool<'a>,
    dresses: ScoredPool<'a>,
    outerwear: ScoredPool<'a>,
    shoes: ScoredPool<'a>,
    accessories: ScoredPool<'a>,
    makeup: ScoredPool<'a>,
}

impl<'a> OutfitComposer<'a> {
    /// Scores every item once and partitions the wardrobe into sorted
    /// category pools
    pub fn new(
        config: &'a EngineConfig,
        items: &'a [WardrobeItem],
        weather: WeatherCondition,
        mood: Mood,
    ) -> Self {
        let scorer = ItemScorer::new(config, weather, mood);

        let mut composer = Self {
            config,
            weather,
            tops: Vec::new(),
            bottoms: Vec::new(),
            dresses: Vec::new(),
            outerwear: Vec::new(),
            shoes: Vec::new(),
            accessories: Vec::new(),
            makeup: Vec::new(),
        };

        for item in items {
            let entry = (item, scorer.score(item));
            match item.category {
                Category::Tops => composer.tops.push(entry),
                Category::Bottoms => composer.bottoms.push(entry),
                Category::Dresses => composer.dresses.push(entry),
                Category::Outerwear => composer.outerwear.push(entry),
                Category::Shoes => composer.shoes.push(entry),
                Category::Accessories => composer.accessories.push(entry),
                Category::Makeup => composer.makeup.push(entry),
            }
        }

        sort_pool(&mut composer.tops);
        sort_pool(&mut composer.bottoms);
        sort_pool(&mut composer.dresses);
        sort_pool(&mut composer.outerwear);
        sort_pool(&mut composer.shoes);
        sort_pool(&mut composer.accessories);
        sort_pool(&mut composer.makeup);

        composer
    }

    /// Composes one candidate outfit.
    ///
    /// The base is either a dress or a top/bottom pair; the dress coin is
    /// flipped on every call so the random sequence does not depend on what
    /// the wardrobe happens to contain.
    pub fn compose<R: Rng>(&self, rng: &mut R) -> Outfit {
        let mut outfit = Outfit::default();

        let use_dress = rng.random_bool(self.config.dress_bias) && !self.dresses.is_empty();
        if use_dress {
            outfit.dress = self
                .pick(&self.dresses, self.config.base_pool_size, rng)
                .cloned();
        } else {
            outfit.top = self
                .pick(&self.tops, self.config.base_pool_size, rng)
                .cloned();
            outfit.bottom = self.pick_bottom(outfit.top.as_ref(), rng).cloned();
        }

        if self.weather.wants_outerwear() {
            outfit.outerwear = self
                .pick(&self.outerwear, self.config.accent_pool_size, rng)
                .cloned();
        }

        outfit.shoes = self
            .pick(&self.shoes, self.config.accent_pool_size, rng)
            .cloned();

        outfit.accessories = self.pick_extras(&self.accessories, rng);
        outfit.makeup = self.pick_extras(&self.makeup, rng);

        outfit
    }

    /// Uniform random pick among the pool's top `pool_size` entries
    fn pick<R: Rng>(
        &self,
        pool: &[(&'a WardrobeItem, f64)],
        pool_size: usize,
        rng: &mut R,
    ) -> Option<&'a WardrobeItem> {
        if pool.is_empty() {
            return None;
        }
        let width = pool_size.min(pool.len()).max(1);
        Some(pool[rng.random_range(0..width)].0)
    }

    /// Picks a bottom, preferring ones that harmonize with the chosen top
    fn pick_bottom<R: Rng>(
        &self,
        top: Option<&WardrobeItem>,
        rng: &mut R,
    ) -> Option<&'a WardrobeItem> {
        let Some(top) = top else {
            return self.pick(&self.bottoms, self.config.base_pool_size, rng);
        };

        let mut ranked: ScoredPool<'a> = self
            .bottoms
            .iter()
            .map(|&(item, score)| (item, score + color::harmony(item, top)))
            .collect();
        sort_pool(&mut ranked);

        self.pick(&ranked, self.config.base_pool_size, rng)
    }

    /// Takes the pool's best one-or-two entries; only the count is random
    fn pick_extras<R: Rng>(
        &self,
        pool: &[(&'a WardrobeItem, f64)],
        rng: &mut R,
    ) -> Vec<WardrobeItem> {
        if pool.is_empty() {
            return Vec::new();
        }

        let cap = self.config.max_extras.max(1);
        let want = rng.random_range(1..=cap).min(pool.len());
        pool.iter()
            .take(want)
            .map(|&(item, _)| item.clone())
            .collect()
    }
}

fn sort_pool(pool: &mut ScoredPool<'_>) {
    pool.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
}
