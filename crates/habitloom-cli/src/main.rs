use clap::{Parser, Subcommand};
use habitloom_core::logging::LoggerHandle;

mod commands;

#[derive(Parser)]
#[command(name = "habitloom", version, about = "Habitloom CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Progress statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

// Logging is best-effort: a failed init must not break the CLI.
fn init_logging() -> Option<LoggerHandle> {
    let dir = habitloom_core::storage::data_dir().ok()?;
    habitloom_core::logging::init(&dir.join("logs")).ok()
}

fn main() {
    let _logger = init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
