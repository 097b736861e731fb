use crate::app::models::{ListState, WorkspaceId};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Durable persistence for one workspace's include/ignore lists.
///
/// The store is the single point enforcing canonical form: `save` always
/// writes both lists deduplicated and sorted, so nothing downstream needs
/// to re-sort what it loads.
pub trait ListStore {
    fn load(&self, workspace: &WorkspaceId) -> Result<ListState>;
    fn save(&self, workspace: &WorkspaceId, state: &ListState) -> Result<()>;
}

/// File-backed store: one TOML document per workspace under a state
/// directory, e.g. `~/.config/repomix-helper/state/<workspace-id>.toml`.
pub struct TomlListStore {
    state_dir: PathBuf,
}

impl TomlListStore {
    pub fn new(state_dir: PathBuf) -> Self {
        Self { state_dir }
    }

    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(Self::new(
            home.join(".config").join("repomix-helper").join("state"),
        ))
    }

    fn file_for(&self, workspace: &WorkspaceId) -> PathBuf {
        self.state_dir.join(format!("{}.toml", workspace.as_str()))
    }
}

impl ListStore for TomlListStore {
    fn load(&self, workspace: &WorkspaceId) -> Result<ListState> {
        let path = self.file_for(workspace);

        // A workspace with no prior state starts out empty.
        if !path.exists() {
            return Ok(ListState::default());
        }

        let content = fs::read_to_string(&path)
            .context(format!("Failed to read list state at {:?}", path))?;
        let state: ListState =
            toml::from_str(&content).context(format!("Failed to parse list state at {:?}", path))?;
        Ok(state)
    }

    fn save(&self, workspace: &WorkspaceId, state: &ListState) -> Result<()> {
        let canonical = state.canonicalized();
        let content =
            toml::to_string_pretty(&canonical).context("Failed to serialize list state")?;

        fs::create_dir_all(&self.state_dir)
            .context(format!("Failed to create state dir {:?}", self.state_dir))?;

        // Write-then-rename so a reader never observes half of a save.
        let target = self.file_for(workspace);
        let staging = target.with_extension("toml.tmp");
        fs::write(&staging, content)
            .context(format!("Failed to write list state at {:?}", staging))?;
        fs::rename(&staging, &target)
            .context(format!("Failed to replace list state at {:?}", target))?;

        Ok(())
    }
}
