//! jobboard - Painting Job Board
//!
//! Command-line front end for tracking painting jobs and the builders they
//! are done for.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jobboard_adapters::AppConfig;
use tracing::info;

mod bootstrap;
mod commands;

use commands::{BuilderCommands, JobCommands};

/// jobboard - Painting Job Board
#[derive(Parser, Debug)]
#[command(name = "jobboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Snapshot database path (`:memory:` for a throwaway board)
    #[arg(long)]
    store: Option<String>,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Job commands
    #[command(subcommand)]
    Job(JobCommands),

    /// Builder commands
    #[command(subcommand)]
    Builder(BuilderCommands),

    /// Show job counts per status
    Stats,
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load().context("Failed to load configuration")?;

    if let Some(store) = &cli.store {
        config.store.path = store.clone();
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    bootstrap::init_tracing(&config);
    bootstrap::log_config_summary(&config);

    let bootstrap::BoardComponents {
        mut board,
        mut notifications,
    } = bootstrap::initialize_board(&config).context("Failed to open job board")?;

    let output = match cli.command {
        Commands::Job(command) => commands::run_job(&mut board, command)?,
        Commands::Builder(command) => commands::run_builder(&mut board, command)?,
        Commands::Stats => commands::render_stats(&board.status_counts()),
    };

    for event in notifications.drain() {
        println!("{}", commands::render_notification(&event));
    }
    println!("{}", output);

    info!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::JobStatus;

    #[test]
    fn test_parse_job_add() {
        let cli = Cli::try_parse_from([
            "jobboard",
            "--store",
            ":memory:",
            "job",
            "add",
            "PJ-001",
            "123 Main St",
            "--status",
            "touch-ups-1",
            "--notes",
            "Two coats",
        ])
        .unwrap();

        assert_eq!(cli.store.as_deref(), Some(":memory:"));
        match cli.command {
            Commands::Job(JobCommands::Add(args)) => {
                assert_eq!(args.job_number, "PJ-001");
                assert_eq!(args.address, "123 Main St");
                assert_eq!(args.status, JobStatus::TouchUps1);
                assert_eq!(args.notes.as_deref(), Some("Two coats"));
                assert!(args.builder.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_job_add_defaults_to_pending() {
        let cli = Cli::try_parse_from(["jobboard", "job", "add", "PJ-001", "123 Main St"]).unwrap();

        match cli.command {
            Commands::Job(JobCommands::Add(args)) => assert_eq!(args.status, JobStatus::Pending),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_status() {
        let result = Cli::try_parse_from(["jobboard", "job", "status", "some-id", "done"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_stats_and_builder_list() {
        let cli = Cli::try_parse_from(["jobboard", "stats"]).unwrap();
        assert!(matches!(cli.command, Commands::Stats));

        let cli = Cli::try_parse_from(["jobboard", "builder", "ls"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Builder(BuilderCommands::List)
        ));
    }
}
