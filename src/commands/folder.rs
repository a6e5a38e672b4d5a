//! Folder lookup CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use drivepath_core::error::AppError;
use drivepath_service::DriveFilesystem;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Check whether a folder path exists
    Exists {
        /// Slash-delimited folder path
        path: String,
    },
    /// Show how each segment of a path resolves
    Resolve {
        /// Slash-delimited folder path
        path: String,
    },
}

/// Segment display row
#[derive(Debug, Serialize, Tabled)]
struct SegmentRow {
    /// Position in the path
    depth: usize,
    /// Segment name
    segment: String,
    /// Resolved folder id
    folder_id: String,
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    fs: &DriveFilesystem,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        FolderCommand::Exists { path } => {
            let exists = fs.folder_exists(path).await?;
            output::print_presence("Folder", path, exists, format);
        }
        FolderCommand::Resolve { path } => {
            let resolution = fs.resolve(path).await?;

            let rows: Vec<SegmentRow> = resolution
                .segments()
                .iter()
                .enumerate()
                .map(|(depth, s)| SegmentRow {
                    depth,
                    segment: s.name.clone(),
                    folder_id: s
                        .folder_id
                        .as_ref()
                        .map(|id| id.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();

            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                if let Some(missing) = resolution.first_unresolved() {
                    output::print_warning(&format!("Segment '{}' does not resolve", missing.name));
                }
            }
        }
    }

    Ok(())
}
