// Declare modules
pub mod cli;
pub mod command;
pub mod config;
pub mod editor;
pub mod formatter;
pub mod models;
pub mod paths;
pub mod store;

use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

use self::cli::{Cli, Command};
use self::command::{build_run, export_command};
use self::config::resolve_config;
use self::editor::{resolve_selection, NoActiveItem, Selection, Workspace};
use self::formatter::SummaryRenderer;
use self::models::{ListKind, RunRequest, RuntimeConfig};
use self::store::TomlListStore;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(args.executable.clone())?;

    // 3. Identify Workspace Root
    let root = match args.workspace {
        Some(path) => path,
        None => env::current_dir().context("Failed to get current directory")?,
    };

    // 4. Open the workspace's lists
    let store = TomlListStore::default_location()?;
    let workspace = Workspace::open(store, root);

    // 5. Dispatch
    match args.command {
        Command::Include { files } => add_selected(&workspace, ListKind::Include, files),
        Command::Ignore { files } => add_selected(&workspace, ListKind::Ignore, files),
        Command::Clear => {
            workspace.clear()?;
            println!("Cleared include/ignore lists.");
            Ok(())
        }
        Command::Show => {
            println!("{}", SummaryRenderer::render_lists(&workspace.state()?));
            Ok(())
        }
        Command::Export => export(&workspace, &config),
        Command::Run => launch(&workspace, &config),
    }
}

/// Resolves what the invocation selected, then merges it into the list.
fn add_selected(
    workspace: &Workspace<TomlListStore>,
    kind: ListKind,
    files: Vec<PathBuf>,
) -> Result<()> {
    // A plain CLI has no active-editor fallback; explicit arguments are the
    // multi-select reference.
    let paths = match resolve_selection(files, None, &NoActiveItem) {
        Selection::Many(paths) => paths,
        Selection::Single(path) => vec![path],
        Selection::Nothing => {
            log::warn!("No file selected.");
            return Ok(());
        }
    };

    let cwd = env::current_dir().context("Failed to get current directory")?;
    let absolute: Vec<PathBuf> = paths
        .into_iter()
        .map(|p| if p.is_absolute() { p } else { cwd.join(p) })
        .collect();

    let report = workspace.add_paths(kind, &absolute)?;
    println!(
        "{}: +{} (skipped {})",
        kind.as_str(),
        report.added,
        report.skipped
    );
    Ok(())
}

fn export(workspace: &Workspace<TomlListStore>, config: &RuntimeConfig) -> Result<()> {
    let state = workspace.state()?;
    let exported = export_command(&state, config);

    println!("{}", SummaryRenderer::render_export(&exported, &state));

    if exported.vacuous {
        log::warn!("⚠️ Include list is empty; the exported command may not pack anything meaningful.");
    }
    Ok(())
}

fn launch(workspace: &Workspace<TomlListStore>, config: &RuntimeConfig) -> Result<()> {
    let state = workspace.state()?;

    let request = match build_run(&state, config, Some(workspace.root())) {
        Ok(request) => request,
        Err(err) => {
            log::warn!("{}", err);
            return Ok(());
        }
    };

    spawn_detached(&request)?;
    println!("Launched: {} {}", request.executable, request.args.join(" "));
    Ok(())
}

/// Fire-and-forget launch; the packing tool owns its own lifetime, exit
/// code, and output from here on.
fn spawn_detached(request: &RunRequest) -> Result<()> {
    std::process::Command::new(&request.executable)
        .args(&request.args)
        .current_dir(&request.working_dir)
        .spawn()
        .context(format!("Failed to launch {}", request.executable))?;
    Ok(())
}
