//! Progress statistics commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use habitloom_core::{HabitTracker, KvHabitStore};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Habit counts for today
    Summary,
    /// Weekly progress chart
    Week {
        /// Print the matrix as JSON instead of a chart
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = HabitTracker::new(KvHabitStore::open()?);
    let dashboard = tracker.dashboard(Utc::now())?;

    match action {
        StatsAction::Summary => {
            println!("{}", serde_json::to_string_pretty(&dashboard.summary)?);
        }
        StatsAction::Week { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard.weekly)?);
            } else {
                print!("{}", dashboard.weekly.render_ascii());
            }
        }
    }
    Ok(())
}
