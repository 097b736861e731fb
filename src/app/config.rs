use crate::app::models::RuntimeConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

pub const DEFAULT_EXECUTABLE: &str = "repomix";

#[derive(Deserialize, Debug, Clone, Default)]
struct ConfigFile {
    executable: Option<String>,
}

fn load_config_file() -> Result<ConfigFile> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let config_path = home
        .join(".config")
        .join("repomix-helper")
        .join("config.toml");

    if !config_path.exists() {
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    toml::from_str(&content).context("Failed to parse config.toml")
}

/// Precedence: CLI flag > config file > built-in default. Empty strings are
/// treated as absent so a blank setting cannot produce an empty command.
fn resolve_executable(cli: Option<String>, file: Option<String>) -> String {
    cli.filter(|s| !s.trim().is_empty())
        .or_else(|| file.filter(|s| !s.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_EXECUTABLE.to_string())
}

pub fn resolve_config(cli_executable: Option<String>) -> Result<RuntimeConfig> {
    let file = load_config_file()?;

    Ok(RuntimeConfig {
        executable: resolve_executable(cli_executable, file.executable),
    })
}
