// ABOUTME: Macroplan CLI - command-line front end for the meal planning engine
// ABOUTME: Manages the profile, recipes, meal plans, saved plans, and daily tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Set the profile and compute targets
//! macroplan-cli profile set --weight 180 --feet 5 --inches 10 --age 25 --activity moderate --goal maintain
//!
//! # Generate and show the weekly plan
//! macroplan-cli plan generate-week
//! macroplan-cli plan show
//!
//! # Swap Wednesday's dinner for another dinner recipe
//! macroplan-cli plan swap wednesday dinner
//!
//! # Save the plan and list saved plans
//! macroplan-cli saved save "Cut week 1"
//! macroplan-cli saved list
//!
//! # Track water and a meal
//! macroplan-cli track water
//! macroplan-cli track meal "Protein shake" 10:30 --protein 40 --carbs 5 --fats 2
//! ```

mod commands;
mod helpers;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use macroplan::catalog::RecipeCatalog;
use macroplan::config::MacroplanConfig;
use macroplan::errors::{AppError, ErrorResponse};
use macroplan::external::AiMealClient;
use macroplan::logging::LoggingConfig;
use macroplan::models::{
    ActivityLevel, Checklist, FoodPreferences, Goal, MealType, PlanType, RecipeId, UserProfile,
    Weekday,
};
use macroplan::persistence::FileStore;
use macroplan::services::MealPlanService;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "macroplan-cli",
    about = "Macro targets and meal plans from the command line",
    long_about = "Compute daily macro targets, generate daily or weekly meal plans from the recipe catalog, and track what you eat."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print command errors as JSON on stdout
    #[arg(long, global = true)]
    json_errors: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlanTypeArg {
    Daily,
    Weekly,
}

impl From<PlanTypeArg> for PlanType {
    fn from(value: PlanTypeArg) -> Self {
        match value {
            PlanTypeArg::Daily => Self::Daily,
            PlanTypeArg::Weekly => Self::Weekly,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Profile and food preferences
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Show the daily macro targets
    Targets,

    /// Browse the recipe catalog
    Recipes {
        #[command(subcommand)]
        action: RecipeCommand,
    },

    /// Favorite recipes
    Favorites {
        #[command(subcommand)]
        action: FavoriteCommand,
    },

    /// Generate and edit meal plans
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },

    /// Saved meal plans
    Saved {
        #[command(subcommand)]
        action: SavedCommand,
    },

    /// Daily tracking
    Track {
        #[command(subcommand)]
        action: TrackCommand,
    },

    /// Describe a meal and let the AI estimate its macros
    AiMeal {
        /// Meal description
        description: String,

        /// Also log the meal for today at this time
        #[arg(long)]
        log_at: Option<String>,
    },

    /// Delete all stored data
    Reset {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Set the profile and recompute targets
    Set {
        /// Weight in pounds
        #[arg(long)]
        weight: f64,

        /// Height, feet
        #[arg(long)]
        feet: u32,

        /// Height, remaining inches
        #[arg(long, default_value = "0")]
        inches: u32,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Activity level (minimal, light, moderate, active)
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,

        /// Goal (bulk, maintain, cut)
        #[arg(long, default_value = "maintain")]
        goal: Goal,

        /// Replace the computed calorie target
        #[arg(long)]
        calories: Option<f64>,
    },

    /// Show the profile
    Show,

    /// Set food preferences (comma-separated, at least 3 per category)
    Foods {
        /// Protein foods
        #[arg(long, value_delimiter = ',')]
        proteins: Vec<String>,

        /// Carb foods
        #[arg(long, value_delimiter = ',')]
        carbs: Vec<String>,

        /// Fat foods
        #[arg(long, value_delimiter = ',')]
        fats: Vec<String>,
    },

    /// Show food preferences
    ShowFoods,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecipeCommand {
    /// List recipes
    List {
        /// Only this meal type
        #[arg(long)]
        meal_type: Option<MealType>,

        /// Only favorites
        #[arg(long)]
        favorites: bool,

        /// Only recipes whose required foods are all in your preferences
        #[arg(long)]
        matching: bool,
    },

    /// Search recipes by name or ingredient
    Search {
        /// Search text
        query: String,

        /// Only recipes requiring this food
        #[arg(long)]
        food: Option<String>,
    },

    /// Show a recipe
    Show {
        /// Recipe id
        id: u32,
    },

    /// Toggle a recipe in your selection
    Select {
        /// Recipe id
        id: u32,
    },

    /// Mark meal selection finished
    Done {
        /// Reopen selection instead
        #[arg(long)]
        reopen: bool,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum FavoriteCommand {
    /// Add or remove a favorite
    Toggle {
        /// Recipe id
        id: u32,
    },

    /// List favorites
    List,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum PlanCommand {
    /// Generate one day of the weekly plan
    GenerateDay {
        /// Day to generate
        day: Weekday,
    },

    /// Generate the whole weekly plan
    GenerateWeek,

    /// Show the active plan
    Show {
        /// Show this plan instead of the active one
        #[arg(long, value_enum)]
        kind: Option<PlanTypeArg>,
    },

    /// Switch the active plan type
    Type {
        /// daily or weekly
        #[arg(value_enum)]
        kind: PlanTypeArg,
    },

    /// Add a recipe to the daily plan
    Add {
        /// Meal slot
        meal_type: MealType,
        /// Recipe id
        id: u32,
    },

    /// Remove a recipe from the daily plan
    Remove {
        /// Meal slot
        meal_type: MealType,
        /// Recipe id
        id: u32,
    },

    /// Replace a recipe in the daily plan
    Replace {
        /// Meal slot
        meal_type: MealType,
        /// Recipe id to replace
        old: u32,
        /// Replacement recipe id
        new: u32,
    },

    /// Set a slot of the weekly plan (omit the id to clear it)
    Set {
        /// Day
        day: Weekday,
        /// Meal slot
        meal_type: MealType,
        /// Recipe id
        id: Option<u32>,
    },

    /// Swap a weekly slot for a random recipe of the same meal type
    Swap {
        /// Day
        day: Weekday,
        /// Meal slot
        meal_type: MealType,
    },

    /// Clear the daily plan
    Clear {
        /// Clear the weekly plan instead
        #[arg(long)]
        week: bool,
    },

    /// Clear one day of the weekly plan
    ClearDay {
        /// Day
        day: Weekday,
    },

    /// Copy one day to the whole week
    CopyDay {
        /// Source day
        day: Weekday,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SavedCommand {
    /// Save the active plan
    Save {
        /// Plan name
        name: String,
    },

    /// Load a saved plan
    Load {
        /// Saved plan id
        id: String,
    },

    /// Delete a saved plan
    Delete {
        /// Saved plan id
        id: String,
    },

    /// List saved plans
    List,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TrackCommand {
    /// Add a glass of water
    Water {
        /// Remove a glass instead
        #[arg(long)]
        remove: bool,
    },

    /// Log a meal
    Meal {
        /// Meal name
        name: String,
        /// Time eaten (e.g. 12:30)
        time: String,
        /// Protein (g)
        #[arg(long, default_value = "0")]
        protein: f64,
        /// Carbohydrates (g)
        #[arg(long, default_value = "0")]
        carbs: f64,
        /// Fat (g)
        #[arg(long, default_value = "0")]
        fats: f64,
    },

    /// Delete a logged meal by its position in `track show`
    DeleteMeal {
        /// 1-based position
        position: usize,
    },

    /// Mark breakfast, lunch, or dinner as eaten
    Complete {
        /// Meal
        meal_type: MealType,
        /// Mark as not eaten
        #[arg(long)]
        undo: bool,
    },

    /// Tick or untick a daily checklist item
    Check {
        /// Checklist: morning, supplements, or bedtime
        list: Checklist,
        /// 1-based item position
        position: usize,
    },

    /// Tick or untick the after-lunch fiber habit
    Fiber,

    /// Show today's tracking
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let mut config = MacroplanConfig::global().clone();
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }

    info!(data_dir = %config.storage.data_dir.display(), "Macroplan CLI");

    let store = Arc::new(FileStore::new(config.storage.data_dir.clone()));
    let catalog = Arc::new(RecipeCatalog::builtin().context("loading recipe catalog")?);
    let ai_client = AiMealClient::from_config(&config.ai)?;
    let today = Local::now().date_naive();

    let mut service = MealPlanService::load(store, catalog, config, today).await;
    if let Some(client) = ai_client {
        service = service.with_meal_generator(Arc::new(client));
    }

    match run(cli.command, &mut service).await {
        Err(error) if cli.json_errors => match error.downcast::<AppError>() {
            Ok(app_error) => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&ErrorResponse::from(app_error))?
                );
                process::exit(1);
            }
            Err(other) => Err(other),
        },
        result => result,
    }
}

async fn run(command: Command, service: &mut MealPlanService) -> anyhow::Result<()> {
    match command {
        Command::Profile { action } => match action {
            ProfileCommand::Set {
                weight,
                feet,
                inches,
                age,
                activity,
                goal,
                calories,
            } => {
                let profile = UserProfile {
                    weight_lbs: weight,
                    height_feet: feet,
                    height_inches: inches,
                    age,
                    activity_level: activity,
                    goal,
                    calorie_override: calories,
                };
                commands::profile::set(service, profile).await?;
            }
            ProfileCommand::Show => commands::profile::show(service)?,
            ProfileCommand::Foods {
                proteins,
                carbs,
                fats,
            } => {
                let preferences = FoodPreferences {
                    proteins,
                    carbs,
                    fats,
                };
                commands::profile::set_preferences(service, preferences).await?;
            }
            ProfileCommand::ShowFoods => commands::profile::show_preferences(service),
        },
        Command::Targets => commands::profile::targets(service)?,
        Command::Recipes { action } => match action {
            RecipeCommand::List {
                meal_type,
                favorites,
                matching,
            } => commands::recipes::list(service, meal_type, favorites, matching),
            RecipeCommand::Search { query, food } => {
                commands::recipes::search(service, &query, food.as_deref());
            }
            RecipeCommand::Show { id } => commands::recipes::show(service, RecipeId(id))?,
            RecipeCommand::Select { id } => {
                commands::recipes::toggle_selected(service, RecipeId(id)).await?;
            }
            RecipeCommand::Done { reopen } => {
                commands::recipes::finish_selection(service, !reopen).await?;
            }
        },
        Command::Favorites { action } => match action {
            FavoriteCommand::Toggle { id } => {
                commands::recipes::toggle_favorite(service, RecipeId(id)).await?;
            }
            FavoriteCommand::List => commands::recipes::list_favorites(service),
        },
        Command::Plan { action } => run_plan(action, service).await?,
        Command::Saved { action } => match action {
            SavedCommand::Save { name } => commands::saved::save(service, &name).await?,
            SavedCommand::Load { id } => commands::saved::load(service, &id).await?,
            SavedCommand::Delete { id } => commands::saved::delete(service, &id).await?,
            SavedCommand::List => commands::saved::list(service),
        },
        Command::Track { action } => run_track(action, service).await?,
        Command::AiMeal {
            description,
            log_at,
        } => commands::ai::generate(service, &description, log_at.as_deref()).await?,
        Command::Reset { yes } => {
            if yes {
                commands::profile::reset(service).await?;
            } else {
                println!("This deletes every stored value. Re-run with --yes to confirm.");
            }
        }
    }
    Ok(())
}

async fn run_plan(action: PlanCommand, service: &mut MealPlanService) -> anyhow::Result<()> {
    match action {
        PlanCommand::GenerateDay { day } => commands::plan::generate_day(service, day).await?,
        PlanCommand::GenerateWeek => commands::plan::generate_week(service).await?,
        PlanCommand::Show { kind } => commands::plan::show(service, kind.map(Into::into)).await?,
        PlanCommand::Type { kind } => commands::plan::set_type(service, kind.into()).await?,
        PlanCommand::Add { meal_type, id } => {
            commands::plan::add(service, meal_type, RecipeId(id)).await?;
        }
        PlanCommand::Remove { meal_type, id } => {
            commands::plan::remove(service, meal_type, RecipeId(id)).await?;
        }
        PlanCommand::Replace {
            meal_type,
            old,
            new,
        } => {
            commands::plan::replace(service, meal_type, RecipeId(old), RecipeId(new)).await?;
        }
        PlanCommand::Set { day, meal_type, id } => {
            commands::plan::set_slot(service, day, meal_type, id.map(RecipeId)).await?;
        }
        PlanCommand::Swap { day, meal_type } => {
            commands::plan::swap(service, day, meal_type).await?;
        }
        PlanCommand::Clear { week } => commands::plan::clear(service, week).await?,
        PlanCommand::ClearDay { day } => commands::plan::clear_day(service, day).await?,
        PlanCommand::CopyDay { day } => commands::plan::copy_day(service, day).await?,
    }
    Ok(())
}

async fn run_track(action: TrackCommand, service: &mut MealPlanService) -> anyhow::Result<()> {
    match action {
        TrackCommand::Water { remove } => commands::track::water(service, remove).await?,
        TrackCommand::Meal {
            name,
            time,
            protein,
            carbs,
            fats,
        } => {
            commands::track::log_meal(service, &name, &time, (protein, carbs, fats)).await?;
        }
        TrackCommand::DeleteMeal { position } => {
            commands::track::delete_meal(service, position).await?;
        }
        TrackCommand::Complete { meal_type, undo } => {
            commands::track::complete(service, meal_type, undo).await?;
        }
        TrackCommand::Check { list, position } => {
            commands::track::check(service, list, position).await?;
        }
        TrackCommand::Fiber => commands::track::fiber(service).await?,
        TrackCommand::Show => commands::track::show(service),
    }
    Ok(())
}
