//! `folio` presentation shell.
//!
//! # Responsibility
//! - Wire configuration, logging and one store handle together.
//! - Fetch once per invocation and render cards as text or JSON.

mod cli;
mod render;

use anyhow::{bail, Context};
use cli::{CommandLine, Commands, OutputFormat, StoreKind};
use folio_core::db::open_db;
use folio_core::{
    default_log_level, init_logging, FirestoreProjectStore, FolioConfig, GallerySelection,
    LoadState, ProjectService, ProjectStore, SqliteProjectStore,
};
use log::info;
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_CONFIG_FILE: &str = "folio.toml";

fn main() -> anyhow::Result<ExitCode> {
    apply_dotenv(dotenvy::dotenv().map(|_| ()))?;
    let commands = CommandLine::parse_args();

    let level = commands
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, commands.log_dir.as_deref()).context("failed to initialize logging")?;

    let config = load_config(commands.config.as_deref())?;

    match commands.command {
        Commands::Config => {
            for (key, value) in config.summary() {
                println!("{key} = {value}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Projects {
            store,
            format,
            select,
        } => {
            let gallery = select_image(select.as_deref())?;
            let state = match select_store(&config, store)? {
                StoreKind::Firestore => {
                    let firestore = config
                        .firestore
                        .clone()
                        .context("firestore store selected but not configured")?;
                    load_projects(FirestoreProjectStore::new(firestore)?)
                }
                StoreKind::Sqlite => {
                    let sqlite = config
                        .sqlite
                        .as_ref()
                        .context("sqlite store selected but not configured")?;
                    let conn = open_db(&sqlite.path).with_context(|| {
                        format!("failed to open project database `{}`", sqlite.path.display())
                    })?;
                    load_projects(SqliteProjectStore::new(&conn))
                }
            };

            let contact_email = config.contact.email.as_deref();
            match format {
                OutputFormat::Text => {
                    print!("{}", render::render_text(&state, &gallery, contact_email))
                }
                OutputFormat::Json => {
                    println!("{}", render::render_json(&state, &gallery, contact_email)?)
                }
            }

            if let LoadState::Failed(reason) = &state {
                eprintln!("error: {reason}");
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// A missing `.env` is normal outside development; an unreadable or
/// malformed one is an error.
fn apply_dotenv(result: Result<(), dotenvy::Error>) -> anyhow::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err).context("failed to load .env file"),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<FolioConfig> {
    let mut config = match path {
        Some(path) => FolioConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => FolioConfig::load(DEFAULT_CONFIG_FILE)?,
        None => FolioConfig::default(),
    };
    config.apply_process_env();
    config.validate()?;
    Ok(config)
}

fn select_store(config: &FolioConfig, requested: Option<StoreKind>) -> anyhow::Result<StoreKind> {
    if let Some(kind) = requested {
        return Ok(kind);
    }
    if config.firestore.is_some() {
        return Ok(StoreKind::Firestore);
    }
    if config.sqlite.is_some() {
        return Ok(StoreKind::Sqlite);
    }
    bail!("no project store configured; set [firestore] or [sqlite] in {DEFAULT_CONFIG_FILE}")
}

fn select_image(src: Option<&str>) -> anyhow::Result<GallerySelection> {
    let mut gallery = GallerySelection::new();
    if let Some(src) = src {
        if !gallery.select(src) {
            bail!("--select needs a non-empty image path");
        }
    }
    Ok(gallery)
}

fn load_projects<S: ProjectStore>(store: S) -> LoadState {
    info!(
        "event=page_load module=cli status=start backend={}",
        store.backend_name()
    );
    let service = ProjectService::new(store);
    let mut state = LoadState::default();
    state.load_with(|| service.project_cards());
    state
}
