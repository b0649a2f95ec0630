mod item;
mod mood;
mod outfit;
mod weather;

pub use item::{Category, WardrobeItem};
pub use mood::Mood;
pub use outfit::{Outfit, OutfitRecommendation};
pub use weather::{WeatherCondition, WeatherReport};
