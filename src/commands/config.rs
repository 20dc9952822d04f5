use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    #[command(about = "Show the current configuration")]
    Show,
    #[command(about = "Set the seconds between checkpoints while tracking")]
    SetInterval { secs: u64 },
}

pub fn cmd(args: ConfigArgs) -> Result<()> {
    let mut config = Config::read()?;
    match args.command {
        ConfigCommand::Show => {
            msg_print!(Message::ConfigPath(Config::path()?.display().to_string()));
            msg_print!(Message::ConfigDatabasePath(config.database_path()?.display().to_string()));
            msg_print!(Message::ConfigCheckpointInterval(config.checkpoint_interval_secs));
        }
        ConfigCommand::SetInterval { secs } => {
            config.set_checkpoint_interval(secs)?;
            config.save()?;
            msg_success!(Message::ConfigSaved);
        }
    }
    Ok(())
}
