//! Name search CLI command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use drivepath_core::error::AppError;
use drivepath_core::types::{DriveEntry, ObjectId};
use drivepath_service::DriveFilesystem;

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Name to search for
    pub name: String,

    /// Restrict the search to children of this folder id
    #[arg(short, long)]
    pub parent: Option<String>,

    /// Only list entries whose name matches exactly
    #[arg(short, long)]
    pub exact: bool,
}

/// Entry display row
#[derive(Debug, Serialize, Tabled)]
struct EntryRow {
    /// Entry ID
    id: String,
    /// Name
    name: String,
    /// MIME type
    mime_type: String,
    /// Last modified
    modified: String,
}

impl From<DriveEntry> for EntryRow {
    fn from(entry: DriveEntry) -> Self {
        Self {
            id: entry.id.into_inner(),
            name: entry.name,
            mime_type: entry.mime_type.unwrap_or_else(|| "-".to_string()),
            modified: entry
                .modified_time
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute the search command
pub async fn execute(
    args: &SearchArgs,
    fs: &DriveFilesystem,
    format: OutputFormat,
) -> Result<(), AppError> {
    let parent = args
        .parent
        .as_deref()
        .map(str::parse::<ObjectId>)
        .transpose()?;

    let rows: Vec<EntryRow> = fs
        .search(&args.name, parent.as_ref())
        .await?
        .into_iter()
        .filter(|entry| !args.exact || entry.name == args.name)
        .map(EntryRow::from)
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
