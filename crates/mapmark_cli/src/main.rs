//! Command-line front end for the marker store.
//!
//! # Responsibility
//! - Expose seed/list/show/add over a local SQLite file.
//! - Turn core errors into a stderr message and a non-zero exit code.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use mapmark_core::{
    core_version, default_log_level, AssetCatalog, CoreConfig, Marker, MarkerService,
    SqliteMarkerRepository,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "mapmark", version, about = "Store and browse geo-tagged markers")]
struct Cli {
    /// SQLite database file.
    #[arg(long, env = "MAPMARK_DB", default_value = "mapa.db", global = true)]
    db: PathBuf,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "MAPMARK_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Absolute directory for log files. Logging is off when unset.
    #[arg(long, env = "MAPMARK_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the core version.
    Version,
    #[command(flatten)]
    Store(StoreCommand),
}

/// Commands that open the database.
#[derive(Debug, Subcommand)]
enum StoreCommand {
    /// Insert the built-in city catalog.
    Seed,
    /// Print every stored marker.
    List {
        #[arg(long)]
        json: bool,
    },
    /// Print the detail of the first marker with this exact title.
    Show {
        title: String,
        /// Directory whose file stems name the asset for each title.
        #[arg(long)]
        assets_dir: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Insert one marker.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, default_value = "")]
        description: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Version => {
            println!("mapmark_core version={}", core_version());
            Ok(())
        }
        Command::Store(command) => {
            let config = CoreConfig {
                db_path: cli.db,
                log_level: cli
                    .log_level
                    .unwrap_or_else(|| default_log_level().to_string()),
                log_dir: cli.log_dir,
            };
            run_store_command(&config, command)
        }
    }
}

fn run_store_command(config: &CoreConfig, command: StoreCommand) -> Result<()> {
    config
        .init_logging()
        .map_err(anyhow::Error::msg)
        .context("failed to initialize logging")?;

    let conn = config
        .open_db()
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;
    let repo = SqliteMarkerRepository::try_new(&conn)?;
    let service = MarkerService::new(repo);

    match command {
        StoreCommand::Seed => {
            let ids = service.seed_defaults()?;
            println!("inserted {} markers", ids.len());
        }
        StoreCommand::List { json } => {
            let markers = service.list_all()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&markers)?);
            } else {
                for marker in &markers {
                    println!(
                        "{}\t{}\t{:.6}\t{:.6}\t{}",
                        marker.id,
                        marker.title,
                        marker.latitude,
                        marker.longitude,
                        marker.description
                    );
                }
            }
        }
        StoreCommand::Show {
            title,
            assets_dir,
            json,
        } => {
            let assets = match assets_dir {
                Some(dir) => load_asset_dir(&dir)?,
                None => AssetCatalog::new(),
            };
            match service.marker_detail(&title, &assets)? {
                Some(detail) if json => println!("{}", serde_json::to_string_pretty(&detail)?),
                Some(detail) => {
                    println!("{}", detail.title);
                    println!("{}", detail.description);
                    println!(
                        "{:.6}, {:.6}",
                        detail.position.latitude, detail.position.longitude
                    );
                    if let Some(asset) = detail.asset {
                        println!("asset: {asset}");
                    }
                }
                None => println!("not found: {title}"),
            }
        }
        StoreCommand::Add {
            title,
            lat,
            lon,
            description,
        } => {
            let id = service.insert(&Marker::new(title, lat, lon, description))?;
            info!("event=marker_add module=cli status=ok id={id}");
            println!("inserted marker {id}");
        }
    }

    Ok(())
}

/// Maps each file stem in `dir` to the file's path.
fn load_asset_dir(dir: &Path) -> Result<AssetCatalog> {
    let mut catalog = AssetCatalog::new();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read assets dir `{}`", dir.display()))?;
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            catalog.insert(stem, path.display().to_string());
        }
    }
    Ok(catalog)
}
