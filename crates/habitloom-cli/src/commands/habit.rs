//! Habit management commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use habitloom_core::{Config, Dashboard, Frequency, HabitTracker, KvHabitStore};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Completion frequency: daily or weekly (default from config)
        #[arg(long)]
        frequency: Option<String>,
    },
    /// List habits
    List,
    /// Mark a habit completed today
    Done {
        /// Habit ID
        id: String,
    },
    /// Rename a habit
    Rename {
        /// Habit ID
        id: String,
        /// New name
        name: String,
    },
    /// Delete a habit
    Rm {
        /// Habit ID
        id: String,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let tracker = HabitTracker::new(KvHabitStore::open()?);
    let now = Utc::now();

    match action {
        HabitAction::Add { name, frequency } => {
            let frequency = match frequency {
                Some(raw) => raw.parse::<Frequency>()?,
                None => config.habits.default_frequency,
            };
            let dashboard = tracker.create_habit(&name, frequency, now)?;
            if let Some(habit) = tracker.habits()?.last() {
                println!("Habit created: {}", habit.id);
            }
            print_dashboard(&config, &dashboard)?;
        }
        HabitAction::List => {
            let habits = tracker.habits()?;
            println!("{}", serde_json::to_string_pretty(&habits)?);
        }
        HabitAction::Done { id } => {
            let dashboard = tracker.mark_habit_completed(&id, now)?;
            println!("Habit completed: {id}");
            print_dashboard(&config, &dashboard)?;
        }
        HabitAction::Rename { id, name } => {
            let dashboard = tracker.rename_habit(&id, &name, now)?;
            println!("Habit renamed: {id}");
            print_dashboard(&config, &dashboard)?;
        }
        HabitAction::Rm { id } => {
            let dashboard = tracker.delete_habit(&id, now)?;
            println!("Habit deleted: {id}");
            print_dashboard(&config, &dashboard)?;
        }
    }
    Ok(())
}

fn print_dashboard(config: &Config, dashboard: &Dashboard) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&dashboard.summary)?);
    if config.ui.weekly_chart {
        print!("{}", dashboard.weekly.render_ascii());
    }
    Ok(())
}
