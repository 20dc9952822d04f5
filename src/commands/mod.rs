pub mod activities;
pub mod config;
pub mod task;
pub mod track;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::tracker::Tracker;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Create, rename, delete or list tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "List recorded activities")]
    Activities(activities::ActivitiesArgs),
    #[command(about = "Track time on a task until Ctrl-C", arg_required_else_help = true)]
    Track(track::TrackArgs),
    #[command(about = "Show or change configuration", arg_required_else_help = true)]
    Config(config::ConfigArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Task(args) => task::cmd(args),
            Commands::Activities(args) => activities::cmd(args),
            Commands::Track(args) => track::cmd(args).await,
            Commands::Config(args) => config::cmd(args),
        }
    }
}

/// Opens the configured store behind a fresh tracker.
pub(crate) fn open_tracker(config: &Config) -> Result<Tracker> {
    let path = config.database_path()?;
    Tracker::open(&path).with_context(|| Message::StoreOpenFailed(path.display().to_string()).to_string())
}
