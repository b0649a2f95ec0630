pub mod color;
pub mod composer;
pub mod engine;
pub mod providers;
pub mod recommendation;
pub mod scoring;

pub use color::ColorFamily;
pub use composer::OutfitComposer;
pub use engine::RecommendationEngine;
pub use recommendation::recommend_for_owner;
pub use scoring::ItemScorer;
