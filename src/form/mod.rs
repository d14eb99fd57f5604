mod meal_form;

pub use meal_form::{MealForm, DEFAULT_TITLE};
