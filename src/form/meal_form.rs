use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, info};

use crate::config::TrackerConfig;
use crate::control::{RatingControl, StarStyle};
use crate::error::ValidationError;
use crate::models::{Meal, Photo};

/// Title shown before a meal has been named.
pub const DEFAULT_TITLE: &str = "New Meal";

/// The meal entry screen: a name, an optional photo and a rating control.
///
/// Holds no terminal I/O itself; the prompts in [`crate::interface`] drive it.
#[derive(Debug)]
pub struct MealForm {
    name: String,
    title: String,
    editing_name: bool,
    photo: Option<Photo>,
    rating_control: RatingControl,
    style: StarStyle,
    last_notified: Rc<Cell<Option<u32>>>,
}

impl MealForm {
    pub fn new(config: &TrackerConfig) -> Self {
        let mut rating_control = RatingControl::with_config(config.star_count, config.star_size());

        let last_notified = Rc::new(Cell::new(None));
        let sink = Rc::clone(&last_notified);
        rating_control.set_on_change_listener(move |rating: u32| {
            info!("New rating: {}", rating);
            sink.set(Some(rating));
        });

        Self {
            name: String::new(),
            title: DEFAULT_TITLE.to_string(),
            editing_name: false,
            photo: None,
            rating_control,
            style: config.star_style(),
            last_notified,
        }
    }

    /// Mark the name field as being edited; saving is blocked until it ends.
    pub fn begin_editing_name(&mut self) {
        self.editing_name = true;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Commit the name field: re-enables saving and retitles the form.
    pub fn end_editing_name(&mut self) {
        self.editing_name = false;
        self.title = if self.name.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            self.name.clone()
        };
    }

    pub fn set_photo(&mut self, photo: Photo) {
        self.photo = Some(photo);
    }

    pub fn clear_photo(&mut self) {
        self.photo = None;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    pub fn is_editing_name(&self) -> bool {
        self.editing_name
    }

    /// Whether the save action is available.
    pub fn can_save(&self) -> bool {
        !self.editing_name && !self.name.is_empty()
    }

    pub fn rating_control(&self) -> &RatingControl {
        &self.rating_control
    }

    pub fn rating_control_mut(&mut self) -> &mut RatingControl {
        &mut self.rating_control
    }

    /// The control drawn with the configured glyphs.
    pub fn rating_line(&self) -> String {
        self.style.render(&self.rating_control)
    }

    /// Rating most recently reported by the control, if any.
    pub fn last_notified_rating(&self) -> Option<u32> {
        self.last_notified.get()
    }

    /// Build a meal from the current fields.
    pub fn save(&self) -> Result<Meal, ValidationError> {
        let meal = Meal::new(
            self.name.clone(),
            self.photo.clone(),
            self.rating_control.rating(),
        )?;
        info!(name = meal.name(), rating = meal.rating(), "Meal saved");
        Ok(meal)
    }

    /// Leave the form without producing a meal.
    pub fn cancel(self) {
        debug!("Save was not pressed, cancelling");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_disabled_until_named() {
        let mut form = MealForm::new(&TrackerConfig::default());
        assert!(!form.can_save());
        assert_eq!(form.title(), DEFAULT_TITLE);

        form.begin_editing_name();
        form.set_name("Pancakes");
        assert!(form.is_editing_name());
        assert!(!form.can_save());

        form.end_editing_name();
        assert!(!form.is_editing_name());
        assert!(form.can_save());
        assert_eq!(form.title(), "Pancakes");
    }

    #[test]
    fn test_listener_tracks_taps() {
        let mut form = MealForm::new(&TrackerConfig::default());
        assert_eq!(form.last_notified_rating(), None);

        form.rating_control_mut().tap_star(4).unwrap();
        assert_eq!(form.last_notified_rating(), Some(4));

        form.rating_control_mut().tap_star(4).unwrap();
        assert_eq!(form.last_notified_rating(), Some(0));
    }

    #[test]
    fn test_save_uses_control_rating() {
        let mut form = MealForm::new(&TrackerConfig::default());
        form.set_name("Toast");
        form.end_editing_name();
        form.rating_control_mut().tap_star(3).unwrap();

        let meal = form.save().unwrap();
        assert_eq!(meal.name(), "Toast");
        assert_eq!(meal.rating(), 3);
        assert!(meal.photo().is_none());
    }

    #[test]
    fn test_save_rejects_rating_above_meal_max() {
        let config = TrackerConfig {
            star_count: 7,
            ..TrackerConfig::default()
        };
        let mut form = MealForm::new(&config);
        form.set_name("Feast");
        form.rating_control_mut().tap_star(7).unwrap();

        assert_eq!(form.save(), Err(ValidationError::RatingOutOfRange(7)));
    }
}
