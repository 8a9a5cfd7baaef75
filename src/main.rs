use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mealplanner::cli::{generate, server, shopping_list};

/// mealplanner - Meal planning and shopping lists
#[derive(Parser)]
#[command(name = "mealplanner")]
#[command(about = "Plan meals and derive a shopping list per supermarket", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the shopping list for the meals in a plan document
    ShoppingList {
        /// Plan document (JSON)
        plan: PathBuf,
    },
    /// Fill a plan document with randomly picked recipes
    Generate {
        /// Plan document (JSON)
        plan: PathBuf,

        /// Number of days to plan (overrides config file)
        #[arg(long)]
        days: Option<u32>,

        /// First planned day, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Seed for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,

        /// Write the result back to the plan document instead of stdout
        #[arg(long)]
        in_place: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = mealplanner::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mealplanner::observability::init_observability(
        "mealplanner",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    match cli.command {
        Commands::Serve { host, port } => server::serve(config, host, port).await,
        Commands::ShoppingList { plan } => shopping_list::run(&plan),
        Commands::Generate {
            plan,
            days,
            start,
            seed,
            in_place,
        } => {
            let input = generate::GenerateInput {
                days: days.unwrap_or(config.planner.default_days),
                start,
                seed,
            };
            generate::run(&plan, input, in_place)
        }
    }
}
