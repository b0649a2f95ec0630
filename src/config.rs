use serde::Deserialize;

/// Engine tuning constants, overridable through `OUTFIT_`-prefixed
/// environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Weight of the weather-fit component in an item's score
    #[serde(default = "default_weather_weight")]
    pub weather_weight: f64,

    /// Weight of the mood-fit component in an item's score
    #[serde(default = "default_mood_weight")]
    pub mood_weight: f64,

    /// Weight of pairwise color harmony in an outfit's score
    #[serde(default = "default_color_harmony_weight")]
    pub color_harmony_weight: f64,

    /// Random-pick pool size for tops, dresses and bottoms
    #[serde(default = "default_base_pool_size")]
    pub base_pool_size: usize,

    /// Random-pick pool size for shoes and outerwear
    #[serde(default = "default_accent_pool_size")]
    pub accent_pool_size: usize,

    /// Hard cap on accessories and on makeup items per outfit
    #[serde(default = "default_max_extras")]
    pub max_extras: usize,

    /// Probability that a composition attempt builds around a dress
    #[serde(default = "default_dress_bias")]
    pub dress_bias: f64,

    /// Composition attempts allowed per requested recommendation
    #[serde(default = "default_attempt_multiplier")]
    pub attempt_multiplier: usize,
}

fn default_weather_weight() -> f64 {
    0.4
}

fn default_mood_weight() -> f64 {
    0.4
}

fn default_color_harmony_weight() -> f64 {
    0.2
}

fn default_base_pool_size() -> usize {
    3
}

fn default_accent_pool_size() -> usize {
    2
}

fn default_max_extras() -> usize {
    2
}

fn default_dress_bias() -> f64 {
    0.4
}

fn default_attempt_multiplier() -> usize {
    3
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weather_weight: default_weather_weight(),
            mood_weight: default_mood_weight(),
            color_harmony_weight: default_color_harmony_weight(),
            base_pool_size: default_base_pool_size(),
            accent_pool_size: default_accent_pool_size(),
            max_extras: default_max_extras(),
            dress_bias: default_dress_bias(),
            attempt_multiplier: default_attempt_multiplier(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from `OUTFIT_`-prefixed environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("OUTFIT_")
            .from_env::<EngineConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
