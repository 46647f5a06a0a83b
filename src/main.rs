mod cli;
mod logging;

use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use colored::*;
use dotenv::dotenv;
use subsync::catalog::Database;
use subsync::{deletion, upload, AppConfig, CatalogStore, Reconciler};
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match subsync::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    let command = match args.command {
        Some(command) => command,
        None => {
            let _ = Cli::command().print_long_help();
            return Ok(());
        }
    };

    if let Commands::PrintConfig = command {
        println!("Configuration: {:?}", config);
        return Ok(());
    }

    let catalog = match Database::open(&config.catalog_db_path) {
        Ok(db) => db,
        Err(err) => {
            error!("Error opening catalog database: {}", err);
            process::exit(1);
        }
    };

    match command {
        Commands::Upload { files } => match upload::record_uploads(&catalog, &files) {
            Ok(count) => println!("Recorded {} files", count),
            Err(err) => error!("Error recording uploads: {}", err),
        },
        Commands::List => match catalog.list_all() {
            Ok(entries) => {
                for entry in &entries {
                    println!("{}\t{}", entry.file_name, entry.file_path);
                }
                println!("{} entries", entries.len());
            }
            Err(err) => error!("Error listing catalog: {}", err),
        },
        Commands::Delete {
            file_name,
            file_path,
        } => match deletion::delete_submission(&catalog, &file_name, &file_path) {
            Ok(()) => println!("Deleted submission '{}'", file_name),
            Err(err) => error!("Error deleting submission: {}", err),
        },
        Commands::PurgeAll => {
            match prompt_confirm(
                "Are you SURE you want to delete EVERY submission?",
                Some(false),
            ) {
                Ok(true) => {
                    let root = Path::new(&config.submissions_root_path);
                    match deletion::purge_all(&catalog, root) {
                        Ok(summary) => println!(
                            "Erased {} entries ({} failures)",
                            summary.removed, summary.failed
                        ),
                        Err(err) => error!("Error purging submissions: {}", err),
                    }
                }
                _ => {
                    process::exit(0);
                }
            }
        }
        Commands::Reconcile => {
            if let Err(err) = run_reconcile(&catalog, &config) {
                error!("Error reconciling catalog: {}", err);
            }
        }
        Commands::PullDrive { folder_url } => {
            let folder_url = folder_url.or_else(|| config.drive_folder_url.clone());
            match (folder_url, config.drive_api_key.clone()) {
                (Some(folder_url), Some(api_key)) => {
                    if let Err(err) = run_pull_drive(&catalog, &config, &folder_url, &api_key) {
                        error!("Error pulling drive folder: {}", err);
                    }
                }
                (None, _) => {
                    error!("No drive folder link given and drive_folder_url is not configured")
                }
                (_, None) => error!("drive_api_key is not configured"),
            }
        }
        Commands::PrintConfig => unreachable!("handled above"),
    }

    Ok(())
}

fn run_reconcile(catalog: &Database, config: &AppConfig) -> Result<(), subsync::Error> {
    let reconciler = Reconciler::new(catalog, config.submissions_root_path.as_str());
    let report = reconciler.reconcile()?;

    info!(
        "Reconciled {} files on disk in {}",
        report.files_on_disk,
        format!("{:.2}s", report.duration.as_secs_f64()).green(),
    );
    info!(
        "{} added, {} removed",
        format!("{}", report.added.len()).green(),
        format!("{}", report.removed.len()).red(),
    );

    Ok(())
}

fn run_pull_drive(
    catalog: &Database,
    config: &AppConfig,
    folder_url: &str,
    api_key: &str,
) -> Result<(), subsync::Error> {
    let downloader = subsync::drive::DriveDownloader::new(api_key);
    let downloaded =
        downloader.download_folder(folder_url, Path::new(&config.submissions_root_path))?;
    let count = upload::record_uploads(catalog, &downloaded)?;

    info!("Pulled {} files from drive", format!("{}", count).green());

    Ok(())
}

fn prompt_confirm(prompt: &str, default: Option<bool>) -> io::Result<bool> {
    let mut input = String::new();

    loop {
        input.clear();

        match default {
            Some(true) => print!("{} (Y/n): ", prompt),
            Some(false) | None => print!("{} (y/N): ", prompt),
        }
        io::stdout().flush()?;

        io::stdin().read_line(&mut input)?;

        match input.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            "" => match default {
                Some(default) => return Ok(default),
                None => continue,
            },
            _ => continue,
        }
    }
}
