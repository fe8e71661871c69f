use std::env;
use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kitchen::cli::{
    handle_history_command, handle_inventory_command, handle_recipe_command, Menu,
};
use kitchen::config::{paths::KitchenPaths, settings::Settings};
use kitchen::storage::Storage;

#[derive(Parser)]
#[command(
    name = "kitchen",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based fridge and pantry tracker",
    long_about = "KitchenCLI keeps track of what is in your fridge and pantry, \
                  warns you about food that is expiring or running low, and \
                  suggests recipes you can make with what you have."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Inventory management commands
    #[command(subcommand, alias = "inv")]
    Inventory(kitchen::cli::InventoryCommands),

    /// Recipe catalog and matching commands
    #[command(subcommand)]
    Recipe(kitchen::cli::RecipeCommands),

    /// Prepared recipe history
    #[command(subcommand)]
    History(kitchen::cli::HistoryCommands),

    /// Initialize data directories and the starter recipe catalog
    Init,

    /// Show current configuration and paths
    Config,
}

/// Log to stderr; `KITCHEN_LOG` wins over `RUST_LOG`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = env::var("KITCHEN_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new(default_level),
            |directive| EnvFilter::new(&directive),
        );

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = KitchenPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone(), &settings)?;
    for warning in storage.load_all() {
        eprintln!("Warning: {} ({})", warning.message, warning.source);
    }

    match cli.command {
        None | Some(Commands::Menu) => {
            if !paths.recipes_file().exists() {
                println!("No recipe catalog found. Run 'kitchen init' to create one.");
            }
            let stdin = io::stdin();
            Menu::new(&storage, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Some(Commands::Inventory(cmd)) => {
            handle_inventory_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Recipe(cmd)) => {
            handle_recipe_command(&storage, &settings, cmd)?;
        }
        Some(Commands::History(cmd)) => {
            handle_history_command(&storage, cmd)?;
        }
        Some(Commands::Config) => {
            println!("KitchenCLI Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Inventory file:  {}", paths.inventory_file().display());
            println!("Recipes file:    {}", paths.recipes_file().display());
            println!("History file:    {}", paths.history_file().display());
            println!();
            println!("Settings:");
            println!("  Matching policy:      {}", settings.matching_policy);
            println!("  Expiry window (days): {}", settings.expiry_window_days);
            println!("  Low stock threshold:  {}", settings.low_stock_threshold);
            println!("  Date format:          {}", settings.date_format);
        }
        Some(Commands::Init) => {
            println!("Initializing KitchenCLI at: {}", paths.base_dir().display());
            let seeded = kitchen::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            if seeded {
                println!();
                println!("A starter recipe catalog has been created:");
                println!("  - French Toast, Omelette, Grilled Cheese (savory)");
                println!("  - Pancakes (sweet)");
            }
            println!();
            println!("Run 'kitchen recipe list' to see all recipes.");
        }
    }

    Ok(())
}
