//! File lookup and deletion CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use drivepath_core::error::AppError;
use drivepath_service::DriveFilesystem;

/// Arguments for file commands
#[derive(Debug, Args)]
pub struct FileArgs {
    /// File subcommand
    #[command(subcommand)]
    pub command: FileCommand,
}

/// File subcommands
#[derive(Debug, Subcommand)]
pub enum FileCommand {
    /// Check whether a file exists
    Exists {
        /// Slash-delimited file path
        path: String,
    },
    /// Show the remote record for a file
    Find {
        /// Slash-delimited file path
        path: String,
    },
    /// Delete a file
    Delete {
        /// Slash-delimited file path
        path: String,
    },
}

/// Execute file commands
pub async fn execute(
    args: &FileArgs,
    fs: &DriveFilesystem,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        FileCommand::Exists { path } => {
            let exists = fs.file_exists(path).await?;
            output::print_presence("File", path, exists, format);
        }
        FileCommand::Find { path } => {
            let entry = fs.ensure_file_exists(path).await?;
            output::print_item(&entry, format);
        }
        FileCommand::Delete { path } => {
            fs.delete_file(path).await?;
            output::print_success(&format!("Deleted '{}'", path));
        }
    }

    Ok(())
}
