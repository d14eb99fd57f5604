mod meal;

pub use meal::{Meal, Photo, MEAL_RATING_MAX, PHOTO_EXTENSIONS};
