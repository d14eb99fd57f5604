use clap::{Parser, Subcommand};

/// FoodTracker: name a meal, attach a photo, and give it a star rating.
#[derive(Parser, Debug)]
#[command(name = "food-tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the JSON config file.
    #[arg(short, long, default_value = "food_tracker.json")]
    pub config: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Fill in a new meal interactively.
    #[default]
    New,

    /// Try out the star rating control on its own.
    Rate {
        /// Number of stars (defaults to the config value).
        #[arg(long)]
        stars: Option<usize>,
    },

    /// Validate a meal without prompting.
    Check {
        /// Meal name.
        name: String,

        /// Path to a photo of the meal.
        #[arg(long)]
        photo: Option<String>,

        /// Rating from 0 to 5.
        #[arg(long, default_value = "0")]
        rating: u32,
    },
}
