/// Engine-level errors
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown weather condition: {0}")]
    UnknownWeather(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Requested count must be positive, got {0}")]
    InvalidCount(usize),

    #[error("Wardrobe store error: {0}")]
    Store(String),

    #[error("Weather provider error: {0}")]
    Weather(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
