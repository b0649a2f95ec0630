use crate::{
    config::EngineConfig,
    models::{Mood, Outfit, WardrobeItem, WeatherCondition},
};

use super::color;

/// Floor for mood fit when nothing about a garment speaks to the mood
const MOOD_BASELINE: f64 = 0.5;
/// Mood bonus for favorite garments, applied after keyword matching
const FAVORITE_BONUS: f64 = 0.1;
/// Weather fit when a garment matches no keyword and declares no season
const WEATHER_BASELINE: f64 = 0.5;

/// Tag keywords marking a garment appropriate for a condition
fn weather_keywords(condition: WeatherCondition) -> &'static [&'static str] {
    match condition {
        WeatherCondition::Sunny => &[
            "t-shirt",
            "shorts",
            "sundress",
            "sandals",
            "sunglasses",
            "hat",
        ],
        WeatherCondition::Cloudy => &["blouse", "sweater", "jeans", "light jacket", "sneakers"],
        WeatherCondition::Rainy => &[
            "raincoat",
            "rain coat",
            "boots",
            "umbrella",
            "waterproof",
            "jacket",
        ],
        WeatherCondition::Snowy => &[
            "coat", "boots", "scarf", "gloves", "sweater", "hat", "jacket",
        ],
        WeatherCondition::Windy => &["jacket", "windbreaker", "jeans", "sweater", "hoodie"],
    }
}

/// Season fallback per condition: favored season substrings, the score a
/// favored season earns and the score any other declared season earns
fn season_fallback(condition: WeatherCondition) -> (&'static [&'static str], f64, f64) {
    match condition {
        WeatherCondition::Sunny => (&["summer"], 0.9, 0.5),
        WeatherCondition::Cloudy => (&["spring", "fall", "autumn"], 0.8, 0.6),
        WeatherCondition::Rainy => (&["spring", "fall", "autumn"], 0.8, 0.5),
        WeatherCondition::Snowy => (&["winter"], 0.9, 0.3),
        WeatherCondition::Windy => (&["fall", "autumn", "spring"], 0.8, 0.6),
    }
}

/// Keyword scores for a mood; the best hit wins
fn mood_keywords(mood: Mood) -> &'static [(&'static str, f64)] {
    match mood {
        Mood::Happy => &[
            ("colorful", 1.0),
            ("bright", 1.0),
            ("casual", 0.9),
            ("fun", 1.0),
            ("print", 0.9),
            ("yellow", 1.0),
            ("orange", 0.9),
        ],
        Mood::Confident => &[
            ("suit", 1.0),
            ("blazer", 1.0),
            ("heels", 0.9),
            ("red", 1.0),
            ("bold", 1.0),
            ("leather", 0.9),
            ("fitted", 0.9),
        ],
        Mood::Relaxed => &[
            ("loose", 1.0),
            ("soft", 1.0),
            ("comfortable", 1.0),
            ("casual", 0.9),
            ("hoodie", 1.0),
            ("pajamas", 1.0),
            ("loungewear", 1.0),
        ],
        Mood::Energetic => &[
            ("sports", 1.0),
            ("bright", 0.9),
            ("athleisure", 1.0),
            ("sneakers", 0.9),
            ("activewear", 1.0),
            ("workout", 1.0),
        ],
        Mood::Romantic => &[
            ("dress", 0.9),
            ("floral", 1.0),
            ("pink", 0.8),
            ("red", 0.8),
            ("lace", 1.0),
            ("soft", 0.8),
            ("elegant", 0.9),
        ],
        Mood::Professional => &[
            ("suit", 1.0),
            ("blazer", 1.0),
            ("business", 1.0),
            ("formal", 0.9),
            ("office", 1.0),
            ("shirt", 0.8),
            ("tie", 1.0),
            ("slacks", 1.0),
        ],
        Mood::Creative => &[
            ("unique", 1.0),
            ("pattern", 1.0),
            ("colorful", 0.9),
            ("artistic", 1.0),
            ("bold", 0.9),
            ("mixed", 1.0),
            ("unconventional", 1.0),
        ],
    }
}

/// Scores a garment's appropriateness for a weather condition, in [0, 1].
///
/// A keyword hit in the garment's tags is a perfect fit; otherwise the
/// declared season decides; otherwise a neutral 0.5.
pub fn weather_fit(item: &WardrobeItem, condition: WeatherCondition) -> f64 {
    let tags = item.tag_set();
    let keywords = weather_keywords(condition);
    if tags
        .iter()
        .any(|tag| keywords.iter().any(|keyword| tag.contains(keyword)))
    {
        return 1.0;
    }

    if let Some(season) = item.declared_season() {
        let season = season.to_lowercase();
        let (favored, favored_score, off_score) = season_fallback(condition);
        return if favored.iter().any(|s| season.contains(s)) {
            favored_score
        } else {
            off_score
        };
    }

    WEATHER_BASELINE
}

/// Scores a garment's appropriateness for a mood, in [0, 1].
///
/// The garment's tags plus its color are matched against the mood's keyword
/// table; the best hit wins over a 0.5 floor. Favorites earn a small bonus,
/// capped at 1.0.
pub fn mood_fit(item: &WardrobeItem, mood: Mood) -> f64 {
    let mut tags = item.tag_set();
    if let Some(color) = item.declared_color() {
        tags.push(color.to_lowercase());
    }

    let mut best = MOOD_BASELINE;
    for (keyword, score) in mood_keywords(mood) {
        if *score > best && tags.iter().any(|tag| tag.contains(keyword)) {
            best = *score;
        }
    }

    if item.favorite {
        best = (best + FAVORITE_BONUS).min(1.0);
    }

    best
}

/// Scores items and whole outfits for one weather/mood context
pub struct ItemScorer<'a> {
    config: &'a EngineConfig,
    weather: WeatherCondition,
    mood: Mood,
}

impl<'a> ItemScorer<'a> {
    pub fn new(config: &'a EngineConfig, weather: WeatherCondition, mood: Mood) -> Self {
        Self {
            config,
            weather,
            mood,
        }
    }

    /// Weighted blend of weather fit and mood fit for one garment
    pub fn score(&self, item: &WardrobeItem) -> f64 {
        self.config.weather_weight * weather_fit(item, self.weather)
            + self.config.mood_weight * mood_fit(item, self.mood)
    }

    /// Weighted blend of the average item score and the average pairwise
    /// color harmony across the outfit.
    ///
    /// Outfits too small to form a pair take a neutral harmony; an empty
    /// outfit scores 0.
    pub fn score_outfit(&self, outfit: &Outfit) -> f64 {
        let items: Vec<&WardrobeItem> = outfit.items().collect();
        if items.is_empty() {
            return 0.0;
        }

        let item_total: f64 = items.iter().map(|item| self.score(item)).sum();
        let avg_item = item_total / items.len() as f64;

        let mut harmony_total = 0.0;
        let mut pairs = 0usize;
        for i in 0..items.len() {
            for j in (i + 1)..items.len() {
                harmony_total += color::harmony(items[i], items[j]);
                pairs += 1;
            }
        }
        let avg_harmony = if pairs > 0 {
            harmony_total / pairs as f64
        } else {
            color::UNKNOWN_HARMONY
        };

        let harmony_weight = self.config.color_harmony_weight;
        avg_item * (1.0 - harmony_weight) + avg_harmony * harmony_weight
    }
}
