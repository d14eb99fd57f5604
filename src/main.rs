use clap::Parser;
use tracing::{debug, error};

use food_tracker_rs::cli::{Cli, Command};
use food_tracker_rs::config::{check_star_count, load_config, TrackerConfig};
use food_tracker_rs::control::RatingControl;
use food_tracker_rs::error::{Result, TrackerError};
use food_tracker_rs::interface::{display_meal, prompt_rating, run_meal_form};
use food_tracker_rs::models::{Meal, Photo};

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    if let Err(e) = run(cli) {
        if let TrackerError::Integrity(_) = e {
            error!("{}", e);
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    debug!(?config, "Starting");

    match cli.command.unwrap_or_default() {
        Command::New => cmd_new(&config),
        Command::Rate { stars } => cmd_rate(&config, stars),
        Command::Check {
            name,
            photo,
            rating,
        } => cmd_check(&config, name, photo, rating),
    }
}

/// Fill in a meal through the interactive form.
fn cmd_new(config: &TrackerConfig) -> Result<()> {
    match run_meal_form(config)? {
        Some(meal) => display_meal(&meal, &config.star_style()),
        None => println!("No meal recorded."),
    }
    Ok(())
}

/// Tap stars on a standalone control.
fn cmd_rate(config: &TrackerConfig, stars: Option<usize>) -> Result<()> {
    let star_count = stars.unwrap_or(config.star_count);
    check_star_count(star_count)?;

    let mut control = RatingControl::with_config(star_count, config.star_size());
    control.set_on_change_listener(|rating: u32| println!("New rating: {}", rating));

    if star_count == 0 {
        println!("No stars to tap.");
        return Ok(());
    }

    let rating = prompt_rating(&mut control, &config.star_style())?;
    println!("Final rating: {}/{}", rating, star_count);
    Ok(())
}

/// Validate a meal given entirely on the command line.
fn cmd_check(
    config: &TrackerConfig,
    name: String,
    photo: Option<String>,
    rating: u32,
) -> Result<()> {
    let photo = photo.map(Photo::from_path).transpose()?;
    let meal = Meal::new(name, photo, rating)?;
    display_meal(&meal, &config.star_style());
    Ok(())
}
