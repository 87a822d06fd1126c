// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Presence-Tracker command line client
//!
//! Lists and searches users, prints attendance statistics, saves presence
//! lists and downloads the attendance report from the presence API.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use presence_tracker::{
    config::Config,
    models::{stats, AttendanceStats},
    state::PresenceListState,
    time_utils, AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "presence-tracker", version, about = "Attendance tracking client")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "PRESENCE_JSON_LOGS")]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List users, optionally filtered by name or age
    Users {
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Print attendance statistics
    Stats {
        /// Use /presence counters instead of each user's attendance
        #[arg(long)]
        presence: bool,
        /// Print the full statistics as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark the given users present and save the list
    Save {
        #[arg(required = true)]
        user_ids: Vec<String>,
    },
    /// Download the attendance report PDF
    Report {
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(api = %config.api_base_url, "Configuration loaded");
    let app = AppState::new(config)?;
    let today = time_utils::today();

    match cli.command {
        Command::Users { query } => {
            let mut list = PresenceListState::new();
            list.begin_loading();
            list.load(app.api.get_users_or_sample().await, today);
            list.search(&query, today);

            for user in list.visible() {
                match user.age(today) {
                    Some(age) => println!("{} (age {})", user.username, age),
                    None => println!("{}", user.username),
                }
            }
        }
        Command::Stats { presence, json } => {
            let users = app.api.get_users_or_sample().await;
            let entries = if presence {
                let presences = app.api.get_presence().await?;
                stats::entries_from_presences(&users, &presences)
            } else {
                stats::entries_from_users(&users)
            };
            let stats = AttendanceStats::compute(entries, app.config.stats_settings());

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }
        Command::Save { user_ids } => {
            let mut list = PresenceListState::new();
            list.begin_loading();
            list.load(app.api.get_users().await?, today);
            for id in &user_ids {
                if list.users().iter().any(|u| &u.user_id == id) {
                    list.select(id);
                } else {
                    tracing::warn!(user_id = %id, "Unknown user, skipping");
                }
            }

            let selected = list.save_request()?;
            app.api.save_presence(&selected).await?;
            println!("Saved presence for {} user(s)", selected.len());
        }
        Command::Report { dir } => {
            let path = app.reports.download(&dir).await?;
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn print_stats(stats: &AttendanceStats) {
    println!("Average attendance: {:.2}%", stats.average_percentage);
    println!("Monthly average:    {:.2}%", stats.monthly_percentage);
    println!("Annual average:     {:.2}%", stats.annual_percentage);

    println!();
    println!("Attendance per user:");
    for entry in &stats.ranked {
        println!(
            "  {:<20} {:>4} ({:.0}%)",
            entry.user.username,
            entry.attended,
            stats.percentage_of(entry)
        );
    }

    println!();
    println!("Top students:");
    for (rank, entry) in stats.top_students().iter().enumerate() {
        println!(
            "  {}. {} - {} / {}",
            rank + 1,
            entry.user.username,
            entry.attended,
            stats.settings.total_classes
        );
    }
}

/// Initialize logging to stderr, JSON lines when requested.
fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("presence_tracker=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
