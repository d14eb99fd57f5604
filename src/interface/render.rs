use crate::control::{RatingControl, StarStyle};
use crate::models::Meal;

/// Print the rating control with its current value.
pub fn display_rating(control: &RatingControl, style: &StarStyle) {
    if control.stars().is_empty() {
        println!("(no stars configured)");
        return;
    }

    println!(
        "{}  {}/{}",
        style.render(control),
        control.rating(),
        control.star_count()
    );
}

/// One-line description of a meal.
pub fn meal_summary(meal: &Meal, style: &StarStyle) -> String {
    let stars: String = (1..=crate::models::MEAL_RATING_MAX)
        .map(|i| {
            if i <= meal.rating() {
                style.filled.as_str()
            } else {
                style.empty.as_str()
            }
        })
        .collect();

    let photo = meal
        .photo()
        .map(|p| p.file_name())
        .unwrap_or_else(|| "no photo".to_string());

    format!("{} {} ({})", meal.name(), stars, photo)
}

/// Print a saved meal.
pub fn display_meal(meal: &Meal, style: &StarStyle) {
    println!();
    println!("=== Meal ===");
    println!();
    println!("{}", meal_summary(meal, style));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_summary() {
        let meal = Meal::new("Toast", None, 3).unwrap();
        assert_eq!(
            meal_summary(&meal, &StarStyle::new("*", ".")),
            "Toast ***.. (no photo)"
        );
    }
}
