use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use budget_planner::audit::AuditLogger;
use budget_planner::cli::{build_service, format_config, format_history, init_config, Menu};
use budget_planner::config::{BudgetPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Menu-driven personal budget planner",
    long_about = "Budget Planner keeps a small set of user budget profiles in a \
                  flat CSV file and estimates how long each user needs to reach \
                  their savings goal."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Write the settings file with current values
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recently audited changes to user records
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("budget_planner={}", log_level)));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            init_config(&paths, &settings)?;
            println!("Wrote settings to {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            print!("{}", format_config(&paths, &settings));
        }
        Some(Commands::History { count }) => {
            let logger = AuditLogger::new(paths.audit_log());
            print!("{}", format_history(&logger, count)?);
        }
        Some(Commands::Menu) | None => {
            let service = build_service(&paths, &settings)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut menu = Menu::new(service, stdin.lock(), stdout.lock());
            menu.run()?;
        }
    }

    Ok(())
}
