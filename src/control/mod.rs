mod glyphs;
mod rating;

pub use glyphs::{StarStyle, MAX_STAR_CELLS, POINTS_PER_CELL};
pub use rating::{
    RatingControl, RatingListener, Star, StarId, StarSize, DEFAULT_STAR_COUNT, DEFAULT_STAR_SIZE,
    MAX_STAR_COUNT,
};
