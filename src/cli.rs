use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "subsync")]
#[command(about = "Submission catalog manager for a plagiarism-detection pipeline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record uploaded files in the catalog
    Upload {
        /// Files to record
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List catalog entries
    List,
    /// Delete one submission: its catalog entry and its whole directory
    Delete {
        /// Catalog entry name (file base name)
        file_name: String,
        /// On-disk path of the submitted file
        file_path: PathBuf,
    },
    /// Delete every catalog entry and erase the submissions tree
    PurgeAll,
    /// Bring the catalog into agreement with the submissions directory
    Reconcile,
    /// Download a cloud-drive folder into the submissions root
    PullDrive {
        /// Drive folder link (falls back to drive_folder_url in Config)
        folder_url: Option<String>,
    },
    /// Print configuration values
    PrintConfig,
}
