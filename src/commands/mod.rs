//! CLI command definitions and dispatch.

pub mod file;
pub mod folder;
pub mod search;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use drivepath_core::config::AppConfig;
use drivepath_core::error::AppError;
use drivepath_service::DriveFilesystem;
use drivepath_storage::GoogleDriveStore;

/// drivepath — resolve slash-delimited paths on a cloud drive
#[derive(Debug, Parser)]
#[command(name = "drivepath", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/drivepath.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Bearer token; overrides `drive.authorization_token`
    #[arg(short, long)]
    pub token: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder lookups
    Folder(folder::FolderArgs),
    /// File lookups and deletion
    File(file::FileArgs),
    /// Search entries by name
    Search(search::SearchArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let fs = self.connect(config).await;
        match &self.command {
            Commands::Folder(args) => folder::execute(args, &fs, self.format).await,
            Commands::File(args) => file::execute(args, &fs, self.format).await,
            Commands::Search(args) => search::execute(args, &fs, self.format).await,
        }
    }

    /// Build the drive view. The HTTP client itself is created on first use.
    async fn connect(&self, config: &AppConfig) -> DriveFilesystem {
        let store = GoogleDriveStore::new(config.drive.clone());
        if let Some(token) = &self.token {
            store.set_authorization_token(token.clone()).await;
        }
        DriveFilesystem::new(Arc::new(store))
    }
}
