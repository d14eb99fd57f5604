use dialoguer::{Confirm, Input, Select};
use tracing::warn;

use crate::config::TrackerConfig;
use crate::control::{RatingControl, StarStyle};
use crate::error::Result;
use crate::form::MealForm;
use crate::interface::render::display_rating;
use crate::models::{Meal, Photo};

/// Prompt for the meal name and commit it to the form.
pub fn prompt_meal_name(form: &mut MealForm) -> Result<()> {
    form.begin_editing_name();

    let input: String = Input::new()
        .with_prompt("Meal name")
        .with_initial_text(form.name().to_string())
        .allow_empty(true)
        .interact_text()?;

    form.set_name(input.trim());
    form.end_editing_name();
    Ok(())
}

/// Prompt for an optional photo path, re-asking until it is empty or valid.
pub fn prompt_photo(form: &mut MealForm) -> Result<()> {
    loop {
        let input: String = Input::new()
            .with_prompt("Photo path (or press Enter for none)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            form.clear_photo();
            return Ok(());
        }

        match Photo::from_path(input) {
            Ok(photo) => {
                println!("Attached: {}", photo.file_name());
                form.set_photo(photo);
                return Ok(());
            }
            Err(e) => {
                warn!("Rejected photo {}: {}", input, e);
                println!("{}", e);
            }
        }
    }
}

/// Let the user tap stars until they choose "Done".
///
/// Returns the final rating.
pub fn prompt_rating(control: &mut RatingControl, style: &StarStyle) -> Result<u32> {
    loop {
        display_rating(control, style);

        let mut options: Vec<String> = control
            .stars()
            .iter()
            .map(|star| format!("Tap star {}", star.position()))
            .collect();
        options.push("Done".to_string());

        let selection = Select::new()
            .with_prompt("Rate this meal (tap the current star again to clear)")
            .items(&options)
            .default(rating_cursor(control))
            .interact()?;

        if selection == control.stars().len() {
            return Ok(control.rating());
        }

        let id = control.stars()[selection].id();
        control.tap(id)?;
    }
}

/// Menu index the star menu opens on: the star holding the current rating,
/// or the first star when nothing is rated.
fn rating_cursor(control: &RatingControl) -> usize {
    (control.rating() as usize)
        .saturating_sub(1)
        .min(control.stars().len().saturating_sub(1))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the user through the meal form.
///
/// Returns `None` when the user cancels or the meal fails validation.
pub fn run_meal_form(config: &TrackerConfig) -> Result<Option<Meal>> {
    let mut form = MealForm::new(config);
    let style = config.star_style();

    prompt_meal_name(&mut form)?;
    println!();
    println!("=== {} ===", form.title());
    println!();

    prompt_photo(&mut form)?;
    prompt_rating(form.rating_control_mut(), &style)?;

    if !form.can_save() {
        println!("A meal needs a name before it can be saved.");
        form.cancel();
        return Ok(None);
    }

    if !prompt_yes_no("Save meal?", true)? {
        form.cancel();
        return Ok(None);
    }

    match form.save() {
        Ok(meal) => Ok(Some(meal)),
        Err(e) => {
            println!("Meal not saved: {}", e);
            Ok(None)
        }
    }
}
