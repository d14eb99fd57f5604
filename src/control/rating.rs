use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::error::IntegrityError;

/// Number of stars a control is built with unless told otherwise.
pub const DEFAULT_STAR_COUNT: usize = 5;

/// Upper bound on stars per control.
pub const MAX_STAR_COUNT: usize = 100;

/// Source of star generations, shared by every control in the process.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Size of each star unless told otherwise, in points.
pub const DEFAULT_STAR_SIZE: StarSize = StarSize {
    width: 44.0,
    height: 44.0,
};

/// Visual size of a single star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSize {
    pub width: f64,
    pub height: f64,
}

impl StarSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for StarSize {
    fn default() -> Self {
        DEFAULT_STAR_SIZE
    }
}

/// Identifies one star of one particular build of a [`RatingControl`].
///
/// Every call to [`RatingControl::configure`] on any control starts a new
/// generation, so ids from an earlier build or from another control never
/// resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StarId {
    generation: u64,
    index: usize,
}

impl StarId {
    /// 1-based position of the star within its build.
    pub fn position(&self) -> usize {
        self.index + 1
    }
}

impl fmt::Display for StarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} (generation {})", self.position(), self.generation)
    }
}

/// One selectable star.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    id: StarId,
    size: StarSize,
    selected: bool,
}

impl Star {
    pub fn id(&self) -> StarId {
        self.id
    }

    pub fn position(&self) -> usize {
        self.id.position()
    }

    pub fn size(&self) -> StarSize {
        self.size
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// Receives every rating assignment made on a [`RatingControl`].
pub trait RatingListener {
    fn rating_changed(&mut self, rating: u32);
}

impl<F> RatingListener for F
where
    F: FnMut(u32),
{
    fn rating_changed(&mut self, rating: u32) {
        self(rating)
    }
}

/// A row of selectable stars holding a rating.
///
/// `rating` is the only source of truth: every star's selection is derived
/// from it on each render. At most one listener is registered at a time and
/// it hears about every assignment, including one that leaves the value
/// unchanged.
pub struct RatingControl {
    rating: u32,
    star_count: usize,
    star_size: StarSize,
    stars: Vec<Star>,
    generation: u64,
    listener: Option<Box<dyn RatingListener>>,
}

impl RatingControl {
    /// Control with the default star count and size.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_STAR_COUNT, DEFAULT_STAR_SIZE)
    }

    pub fn with_config(star_count: usize, star_size: StarSize) -> Self {
        let mut control = Self {
            rating: 0,
            star_count: 0,
            star_size,
            stars: Vec::new(),
            generation: 0,
            listener: None,
        };
        control.configure(star_count, star_size);
        control
    }

    /// Rebuild the star sequence from scratch.
    ///
    /// Old stars are dropped and their ids stop resolving. The rating is left
    /// as is, even when it now exceeds `star_count`.
    pub fn configure(&mut self, star_count: usize, star_size: StarSize) {
        self.generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        self.star_count = star_count;
        self.star_size = star_size;

        let generation = self.generation;
        self.stars = (0..star_count)
            .map(|index| Star {
                id: StarId { generation, index },
                size: star_size,
                selected: false,
            })
            .collect();

        debug!(
            star_count,
            width = star_size.width,
            height = star_size.height,
            generation,
            "Rating control configured"
        );

        self.render();
    }

    /// Change only the star count, keeping the current size.
    pub fn set_star_count(&mut self, star_count: usize) {
        self.configure(star_count, self.star_size);
    }

    /// Change only the star size, keeping the current count.
    pub fn set_star_size(&mut self, star_size: StarSize) {
        self.configure(self.star_count, star_size);
    }

    /// Register the change listener, replacing any previous one.
    pub fn set_on_change_listener<L>(&mut self, listener: L)
    where
        L: RatingListener + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_on_change_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Assign the rating, notify the listener, then re-render.
    pub fn set_rating(&mut self, rating: u32) {
        self.rating = rating;
        debug!(rating, "Rating assigned");

        if let Some(listener) = self.listener.as_mut() {
            listener.rating_changed(rating);
        }

        self.render();
    }

    /// Handle a tap on the star identified by `id`.
    ///
    /// Tapping the star that sits exactly on the current rating resets the
    /// rating to zero; any other star sets the rating to its position.
    pub fn tap(&mut self, id: StarId) -> Result<u32, IntegrityError> {
        let index = self.resolve(id)?;
        let selected_rating = (index + 1) as u32;

        if selected_rating == self.rating {
            self.set_rating(0);
        } else {
            self.set_rating(selected_rating);
        }

        Ok(self.rating)
    }

    /// Handle a tap on the star at 1-based `position`.
    pub fn tap_star(&mut self, position: usize) -> Result<u32, IntegrityError> {
        let id = position
            .checked_sub(1)
            .and_then(|index| self.stars.get(index))
            .map(Star::id)
            .ok_or_else(|| self.integrity_error(format!("at position {}", position)))?;

        self.tap(id)
    }

    pub fn rating(&self) -> u32 {
        self.rating
    }

    pub fn star_count(&self) -> usize {
        self.star_count
    }

    pub fn star_size(&self) -> StarSize {
        self.star_size
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Number of stars currently drawn as selected.
    pub fn filled_count(&self) -> usize {
        self.stars.iter().filter(|s| s.selected).count()
    }

    fn resolve(&self, id: StarId) -> Result<usize, IntegrityError> {
        match self.stars.iter().position(|s| s.id == id) {
            Some(index) => Ok(index),
            None => Err(self.integrity_error(id.to_string())),
        }
    }

    fn integrity_error(&self, reference: String) -> IntegrityError {
        IntegrityError {
            reference,
            generation: self.generation,
            star_count: self.stars.len(),
        }
    }

    fn render(&mut self) {
        let rating = self.rating as usize;
        for (index, star) in self.stars.iter_mut().enumerate() {
            star.selected = index < rating;
        }
    }
}

impl Default for RatingControl {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RatingControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RatingControl")
            .field("rating", &self.rating)
            .field("star_count", &self.star_count)
            .field("star_size", &self.star_size)
            .field("generation", &self.generation)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
