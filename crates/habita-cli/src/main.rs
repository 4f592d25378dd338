//! Habita CLI - Habit stats, streaks and achievements
//!
//! Reads a local JSON data file (habits + profile) and runs the Habita
//! analytics engine over it: stats, weekly activity, achievement status,
//! and the recompute transaction.

mod config;
mod store;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;

use habita::{
    achievement_catalog, AchievementChecker, Analytics, Clock, FixedClock, Recomputer, Requirement,
    SystemClock,
};

use config::Config;
use store::DataFile;

#[derive(Parser)]
#[command(name = "habita")]
#[command(about = "Habita CLI - habit stats, streaks and achievements", long_about = None)]
#[command(version)]
struct Cli {
    /// Habit data file (JSON). Defaults to the configured path
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Override today's date (YYYY-MM-DD) for deterministic output
    #[arg(long, global = true)]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show streaks, points, level and today's progress
    Stats,

    /// Show the last 7 days of activity
    Weekly,

    /// List achievements with unlock state and progress
    Achievements,

    /// Recompute derived state and award newly unlocked achievements
    Recompute {
        /// Print the outcome without writing the data file back
        #[arg(long)]
        dry_run: bool,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set the default data file path
    SetFile { path: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let clock = build_clock(cli.today.as_deref())?;

    match cli.command {
        Commands::Stats => cmd_stats(cli.file, clock),
        Commands::Weekly => cmd_weekly(cli.file, clock),
        Commands::Achievements => cmd_achievements(cli.file, clock),
        Commands::Recompute { dry_run } => cmd_recompute(cli.file, clock, dry_run),
        Commands::Config { action } => cmd_config(action),
    }
}

fn build_clock(today: Option<&str>) -> Result<Box<dyn Clock>> {
    match today {
        Some(value) => {
            let day = NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .with_context(|| format!("Invalid --today value: {}", value))?;
            Ok(Box::new(FixedClock::new(day)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

fn load_data(file: Option<PathBuf>) -> Result<(DataFile, PathBuf)> {
    let config = Config::load()?;
    let path = config.resolve_data_file(file)?;
    let data = DataFile::load(&path)?;
    Ok((data, path))
}

// ============================================
// Command Implementations
// ============================================

fn cmd_stats(file: Option<PathBuf>, clock: Box<dyn Clock>) -> Result<()> {
    let (data, _) = load_data(file)?;
    let analytics = Analytics::new(clock);

    let habits = &data.habits;
    let base_points = analytics.total_points(habits);
    let total_points = base_points + data.profile.achievement_points;
    let level = analytics.level(total_points);
    let progress = analytics.level_progress(total_points);
    let goal = analytics.daily_goal_progress(habits, data.profile.daily_goal);

    println!("{}", "Habita".bold());
    println!("  Habits:        {}", habits.len());
    println!(
        "  Streak:        {} (best {})",
        analytics.global_streak(habits),
        analytics
            .global_max_streak(habits)
            .max(data.profile.max_streak)
    );
    println!(
        "  Points:        {} ({} from achievements)",
        total_points, data.profile.achievement_points
    );
    println!(
        "  Level:         {} [{}] {}%",
        level,
        bar(progress, 100, 20),
        progress
    );
    println!(
        "  Today:         {}/{} habits {}",
        goal.completed,
        goal.goal,
        if analytics.all_completed_today(habits) {
            "— all done!".green().to_string()
        } else {
            format!("({} to go)", goal.remaining).dimmed().to_string()
        }
    );

    Ok(())
}

fn cmd_weekly(file: Option<PathBuf>, clock: Box<dyn Clock>) -> Result<()> {
    let (data, _) = load_data(file)?;
    let analytics = Analytics::new(clock);

    println!("{}", "Last 7 days".bold());
    for entry in analytics.weekly_activity(&data.habits) {
        let marks = "█".repeat(entry.completed as usize);
        println!(
            "  {} {}  {:3}  {}",
            entry.day.cyan(),
            entry.date,
            entry.completed,
            marks.green()
        );
    }

    Ok(())
}

fn cmd_achievements(file: Option<PathBuf>, clock: Box<dyn Clock>) -> Result<()> {
    let (data, _) = load_data(file)?;
    let analytics = Analytics::new(clock);
    let checker = AchievementChecker::new();

    let base_points = analytics.total_points(&data.habits);
    let max_streak = analytics
        .global_max_streak(&data.habits)
        .max(data.profile.max_streak);
    let snapshot = checker.snapshot(
        &data.habits,
        base_points + data.profile.achievement_points,
        max_streak,
    );

    let mut unlocked_count = 0;
    println!("{}", "Achievements".bold());
    for achievement in achievement_catalog() {
        let progress = checker.progress_for(achievement, &snapshot);
        let unlocked = progress >= achievement.max_progress;
        if unlocked {
            unlocked_count += 1;
        }

        let status = if unlocked {
            "✓".green().to_string()
        } else if matches!(achievement.requirement, Requirement::Special(_)) {
            "·".dimmed().to_string()
        } else {
            " ".to_string()
        };

        println!(
            "  {} {} {} ({}/{}) {}",
            status,
            achievement.icon,
            if unlocked {
                achievement.name.bold().to_string()
            } else {
                achievement.name.dimmed().to_string()
            },
            progress,
            achievement.max_progress,
            format!("+{}", achievement.points_bonus).yellow()
        );
    }
    println!(
        "\n{} of {} unlocked",
        unlocked_count,
        achievement_catalog().len()
    );

    Ok(())
}

fn cmd_recompute(file: Option<PathBuf>, clock: Box<dyn Clock>, dry_run: bool) -> Result<()> {
    let (data, path) = load_data(file)?;
    let recomputer = Recomputer::new(clock);

    let outcome = recomputer
        .recompute(&data.habits, &data.profile)
        .context("Recompute failed")?;

    if outcome.newly_unlocked.is_empty() {
        println!("No new achievements.");
    } else {
        for id in &outcome.newly_unlocked {
            let achievement = habita::achievement_by_id(id)?;
            println!(
                "{} {} {} {}",
                "🏆 Achievement unlocked!".bold(),
                achievement.icon,
                achievement.name,
                format!("+{} points", achievement.points_bonus).yellow()
            );
        }
        println!("Bonus awarded: {}", outcome.bonus_awarded);
    }

    println!(
        "Points: {}  Level: {}  Streak: {} (best {})",
        outcome.profile.total_points,
        outcome.profile.level,
        outcome.profile.current_streak,
        outcome.profile.max_streak
    );

    if dry_run {
        println!("{}", "Dry run, data file not written.".dimmed());
        return Ok(());
    }

    let updated = DataFile {
        habits: outcome.habits,
        profile: outcome.profile,
    };
    updated.save(&path)?;
    println!("{} Saved {:?}", "✓".green(), path);

    Ok(())
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("Config file: {:?}", Config::config_path()?);
            match &config.data_file {
                Some(path) => println!("Data file:   {:?}", path),
                None => println!("Data file:   (default)"),
            }
        }
        ConfigAction::SetFile { path } => {
            config.set_data_file(path.clone());
            config.save()?;
            println!("{} Data file set to {:?}", "✓".green(), path);
        }
    }

    Ok(())
}

fn bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value as usize * width) / max as usize).min(width)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
