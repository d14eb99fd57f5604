use thiserror::Error;

/// Rejected input when building a [`crate::models::Meal`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Meal name must not be empty")]
    EmptyName,

    #[error("Rating {0} is outside 0..={max}", max = crate::models::MEAL_RATING_MAX)]
    RatingOutOfRange(u32),
}

/// A tap referenced a star that is not part of the control's live sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Star {reference} is not in the rating control (live generation {generation}, {star_count} stars)")]
pub struct IntegrityError {
    pub reference: String,
    pub generation: u64,
    pub star_count: usize,
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid photo: {0}")]
    InvalidPhoto(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
