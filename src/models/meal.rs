use std::path::{Path, PathBuf};

use crate::error::{Result, TrackerError, ValidationError};

/// Highest rating a meal may carry.
pub const MEAL_RATING_MAX: u32 = 5;

/// File extensions accepted as meal photos (lowercase).
pub const PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "heic", "bmp", "webp"];

/// An image on disk attached to a meal.
///
/// Only the location is kept; the image itself is never decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    path: PathBuf,
}

impl Photo {
    /// Wrap a path that points to an existing image file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(TrackerError::InvalidPhoto(format!(
                "{} does not exist or is not a file",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        if !PHOTO_EXTENSIONS.contains(&extension.as_str()) {
            return Err(TrackerError::InvalidPhoto(format!(
                "{} is not an image (expected one of: {})",
                path.display(),
                PHOTO_EXTENSIONS.join(", ")
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// A rated meal.
///
/// Built only through [`Meal::new`], so every instance has a non-empty name
/// and a rating in `0..=MEAL_RATING_MAX`. There are no setters; a changed
/// meal is a new `Meal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meal {
    name: String,
    photo: Option<Photo>,
    rating: u32,
}

impl Meal {
    pub fn new(
        name: impl Into<String>,
        photo: Option<Photo>,
        rating: u32,
    ) -> std::result::Result<Self, ValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if rating > MEAL_RATING_MAX {
            return Err(ValidationError::RatingOutOfRange(rating));
        }

        Ok(Self {
            name,
            photo,
            rating,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    pub fn rating(&self) -> u32 {
        self.rating
    }
}
