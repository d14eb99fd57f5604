pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_meal_name, prompt_photo, prompt_rating, prompt_yes_no, run_meal_form,
};
pub use render::{display_meal, display_rating, meal_summary};
