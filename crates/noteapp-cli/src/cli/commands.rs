//! # CLI Layer
//!
//! This module is **one possible UI client** for noteapp. The library never
//! prints; everything that touches stdout, stdin or the environment lives here.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments become typed commands via clap
//! 2. **Context Setup**: resolve paths, load config, apply flag overrides, open the store
//! 3. **API Dispatch**: call the matching `NotesApi` method
//! 4. **Output Formatting**: hand `CmdResult` values to the renderers and print
//!
//! ## Paths
//!
//! `NOTEAPP_HOME` puts config and data under one directory. Without it the
//! platform directories are used.

use super::logging::{init_logging, Verbosity};
use super::render::{render_messages, render_note_list, ViewOptions};
use super::session::Session;
use super::setup::{Cli, Commands, ConfigCommands};
use anyhow::{anyhow, Context};
use clap::Parser;
use noteapp::api::{CmdMessage, NotesApi};
use noteapp::config::{NoteAppConfig, NoteAppPaths, StorageKind};
use noteapp::dao::AnyDao;
use noteapp::index::RowIndex;
use std::io::{self, Write};
use tracing::debug;

pub const HOME_ENV: &str = "NOTEAPP_HOME";

struct AppContext {
    api: NotesApi<AnyDao>,
    view: ViewOptions,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    let paths = resolve_paths()?;
    debug!(config_dir = %paths.config_dir.display(), "resolved paths");

    // Config does not need a store
    if let Some(Commands::Config { action }) = &cli.command {
        return handle_config(&paths, action.as_ref());
    }

    let mut ctx = init_context(&cli, &paths)?;

    match cli.command {
        None | Some(Commands::Session) => handle_session(&mut ctx),
        Some(Commands::List { relative }) => handle_list(&ctx, relative),
        Some(Commands::Add { title, description }) => handle_add(&mut ctx, &title, &description),
        Some(Commands::Tap { index }) => handle_tap(&mut ctx, index),
        Some(Commands::Clear) => handle_clear(&mut ctx),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn resolve_paths() -> anyhow::Result<NoteAppPaths> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(NoteAppPaths::under(home));
    }
    NoteAppPaths::discover().ok_or_else(|| anyhow!("Could not determine a home directory"))
}

/// Flags win over the config file. A data directory on its own means the
/// notes should be kept on disk.
fn effective_config(cli: &Cli, mut config: NoteAppConfig) -> NoteAppConfig {
    match (cli.storage, &cli.data_dir) {
        (Some(storage), _) => config.storage = storage,
        (None, Some(_)) => config.storage = StorageKind::File,
        (None, None) => {}
    }
    if cli.no_seed {
        config.seed_sample_notes = false;
    }
    config
}

fn init_context(cli: &Cli, paths: &NoteAppPaths) -> anyhow::Result<AppContext> {
    let loaded = NoteAppConfig::load(&paths.config_dir)
        .with_context(|| format!("Failed to load config from {}", paths.config_dir.display()))?;
    let config = effective_config(cli, loaded);

    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| paths.data_dir.clone());
    let api = NotesApi::from_config(&config, data_dir)?;

    Ok(AppContext {
        api,
        view: ViewOptions::from_config(&config, console::colors_enabled()),
    })
}

fn handle_session(ctx: &mut AppContext) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    Session::new(&mut ctx.api, ctx.view.clone()).run(stdin.lock(), &mut out)?;
    writeln!(out)?;
    Ok(())
}

fn handle_list(ctx: &AppContext, relative: bool) -> anyhow::Result<()> {
    let result = ctx.api.list_notes();
    let opts = ViewOptions {
        relative_dates: relative,
        ..ctx.view.clone()
    };
    print!("{}", render_note_list(&result.listed_notes, &opts));
    Ok(())
}

fn handle_add(ctx: &mut AppContext, title: &str, description: &str) -> anyhow::Result<()> {
    let result = ctx.api.add_note(title, description);
    if result.is_silent() {
        debug!("add rejected, nothing saved");
    }
    print!("{}", render_messages(&result.messages, &ctx.view));
    Ok(())
}

fn handle_tap(ctx: &mut AppContext, index: RowIndex) -> anyhow::Result<()> {
    let result = ctx.api.tap(index);
    print!("{}", render_messages(&result.messages, &ctx.view));
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> anyhow::Result<()> {
    let result = ctx.api.clear();
    print!("{}", render_messages(&result.messages, &ctx.view));
    Ok(())
}

fn handle_config(paths: &NoteAppPaths, action: Option<&ConfigCommands>) -> anyhow::Result<()> {
    let mut config = NoteAppConfig::load(&paths.config_dir)?;
    let view = ViewOptions::from_config(&config, console::colors_enabled());

    match action {
        None => {
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
        Some(ConfigCommands::Get { key }) => {
            let value = config
                .get(key)
                .ok_or_else(|| anyhow!("Unknown config key: {}", key))?;
            println!("{}", value);
        }
        Some(ConfigCommands::Set { key, value }) => {
            config.set(key, value)?;
            config.save(&paths.config_dir)?;
            let message = CmdMessage::success(format!("{} = {}", key, value));
            print!("{}", render_messages(&[message], &view));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("noteapp").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_flags_keep_loaded_config() {
        let loaded = NoteAppConfig {
            storage: StorageKind::File,
            ..Default::default()
        };
        assert_eq!(effective_config(&cli(&[]), loaded.clone()), loaded);
    }

    #[test]
    fn data_dir_implies_file_storage() {
        let config = effective_config(&cli(&["--data-dir", "/tmp/x"]), NoteAppConfig::default());
        assert_eq!(config.storage, StorageKind::File);
    }

    #[test]
    fn explicit_storage_beats_data_dir() {
        let config = effective_config(
            &cli(&["--data-dir", "/tmp/x", "--storage", "memory"]),
            NoteAppConfig::default(),
        );
        assert_eq!(config.storage, StorageKind::Memory);
    }

    #[test]
    fn no_seed_flag_turns_off_samples() {
        let config = effective_config(&cli(&["--no-seed"]), NoteAppConfig::default());
        assert!(!config.seed_sample_notes);
    }
}
