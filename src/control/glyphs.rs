use serde::{Deserialize, Serialize};

use super::rating::{RatingControl, Star, StarSize};

/// Points covered by one terminal cell when laying out stars.
pub const POINTS_PER_CELL: f64 = 22.0;

/// Widest a single star is ever drawn, in terminal cells.
pub const MAX_STAR_CELLS: usize = 8;

/// Glyphs used to draw stars in the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarStyle {
    pub filled: String,
    pub empty: String,
}

impl Default for StarStyle {
    fn default() -> Self {
        Self {
            filled: "★".to_string(),
            empty: "☆".to_string(),
        }
    }
}

impl StarStyle {
    pub fn new(filled: impl Into<String>, empty: impl Into<String>) -> Self {
        Self {
            filled: filled.into(),
            empty: empty.into(),
        }
    }

    pub fn glyph(&self, star: &Star) -> &str {
        if star.is_selected() {
            &self.filled
        } else {
            &self.empty
        }
    }

    /// Draw the whole control on one line.
    pub fn render(&self, control: &RatingControl) -> String {
        let padding = " ".repeat(cells_for(control.star_size()) - 1);

        let mut line = String::new();
        for star in control.stars() {
            line.push_str(self.glyph(star));
            line.push_str(&padding);
        }

        line.trim_end().to_string()
    }
}

/// Terminal cells occupied by a star of the given size, in `1..=MAX_STAR_CELLS`.
fn cells_for(size: StarSize) -> usize {
    let cells = (size.width / POINTS_PER_CELL).round();
    if !cells.is_finite() || cells < 1.0 {
        1
    } else if cells >= MAX_STAR_CELLS as f64 {
        MAX_STAR_CELLS
    } else {
        cells as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_size() {
        let mut control = RatingControl::new();
        control.set_rating(2);
        assert_eq!(StarStyle::default().render(&control), "★ ★ ☆ ☆ ☆");
    }

    #[test]
    fn test_render_small_stars_have_no_gap() {
        let mut control = RatingControl::with_config(3, StarSize::new(10.0, 10.0));
        control.set_rating(1);
        assert_eq!(StarStyle::new("*", ".").render(&control), "*..");
    }

    #[test]
    fn test_render_empty_control() {
        let control = RatingControl::with_config(0, StarSize::default());
        assert_eq!(StarStyle::default().render(&control), "");
    }

    #[test]
    fn test_cells_for_wide_star() {
        assert_eq!(cells_for(StarSize::new(66.0, 44.0)), 3);
        assert_eq!(cells_for(StarSize::new(0.0, 0.0)), 1);
    }

    #[test]
    fn test_huge_star_is_capped() {
        assert_eq!(cells_for(StarSize::new(1e300, 44.0)), MAX_STAR_CELLS);
        assert_eq!(cells_for(StarSize::new(f64::INFINITY, 44.0)), 1);

        let mut control = RatingControl::with_config(2, StarSize::new(1e300, 44.0));
        control.set_rating(1);
        let expected = format!("*{}.", " ".repeat(MAX_STAR_CELLS - 1));
        assert_eq!(StarStyle::new("*", ".").render(&control), expected);
    }
}
