use crate::app::models::{AddReport, ListKind, ListState, WorkspaceId};
use crate::app::paths::workspace_relative;
use crate::app::store::ListStore;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Merges normalized paths into one of the lists. `None` entries are the
/// "unmappable" sentinel produced upstream and count as skipped.
///
/// Pure: the input state is untouched, and adding an existing member is a
/// no-op that does not count toward `added`.
pub fn add_many(
    state: &ListState,
    kind: ListKind,
    entries: &[Option<String>],
) -> (ListState, AddReport) {
    let mut next = state.clone();
    let mut report = AddReport::default();

    for entry in entries {
        match entry {
            None => report.skipped += 1,
            Some(rel) => {
                let list = next.list_mut(kind);
                if !list.iter().any(|existing| existing == rel) {
                    list.push(rel.clone());
                    report.added += 1;
                }
            }
        }
    }

    (next, report)
}

/// Resets both lists to empty, unconditionally.
pub fn clear(_state: &ListState) -> ListState {
    ListState::default()
}

/// Last-resort source for "the currently active item" when the caller
/// supplied no explicit references.
pub trait ActiveItem {
    fn active_path(&self) -> Option<PathBuf>;
}

/// A host with no notion of an active item (e.g. a plain CLI invocation).
pub struct NoActiveItem;

impl ActiveItem for NoActiveItem {
    fn active_path(&self) -> Option<PathBuf> {
        None
    }
}

/// What a selection request resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Many(Vec<PathBuf>),
    Single(PathBuf),
    Nothing,
}

/// Ordered-precedence selection: a non-empty multi-select wins outright,
/// then the single reference, then the active item. `Nothing` is a
/// recoverable no-op signal, not an error.
pub fn resolve_selection(
    multi: Vec<PathBuf>,
    single: Option<PathBuf>,
    active: &dyn ActiveItem,
) -> Selection {
    if !multi.is_empty() {
        return Selection::Many(multi);
    }
    if let Some(path) = single {
        return Selection::Single(path);
    }
    match active.active_path() {
        Some(path) => Selection::Single(path),
        None => Selection::Nothing,
    }
}

/// One workspace's lists bound to a store, with every load-modify-save
/// serialized behind a per-workspace lock so rapid repeated adds cannot
/// lose updates to each other.
pub struct Workspace<S: ListStore> {
    id: WorkspaceId,
    root: PathBuf,
    store: S,
    write_lock: Mutex<()>,
}

impl<S: ListStore> Workspace<S> {
    pub fn open(store: S, root: PathBuf) -> Self {
        Self {
            id: WorkspaceId::from_root(&root),
            root,
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Normalizes `paths` against the workspace root and merges the mapped
    /// ones into the `kind` list. Unmappable paths are counted as skipped.
    pub fn add_paths(&self, kind: ListKind, paths: &[PathBuf]) -> Result<AddReport> {
        let entries: Vec<Option<String>> = paths
            .iter()
            .map(|p| workspace_relative(&self.root, p))
            .collect();

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let state = self.store.load(&self.id)?;
        let (next, report) = add_many(&state, kind, &entries);
        self.store.save(&self.id, &next)?;
        Ok(report)
    }

    /// Empties both lists.
    pub fn clear(&self) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let state = self.store.load(&self.id)?;
        self.store.save(&self.id, &clear(&state))
    }

    /// Current settled state, as persisted.
    pub fn state(&self) -> Result<ListState> {
        self.store.load(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::store::TomlListStore;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn rel(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn add_many_counts_new_members_and_skips_unmappable() {
        let state = ListState::default();
        let entries = vec![rel("a.ts"), None, rel("b.ts")];
        let (next, report) = add_many(&state, ListKind::Include, &entries);

        assert_eq!(report, AddReport { added: 2, skipped: 1 });
        assert_eq!(next.include, vec!["a.ts", "b.ts"]);
        assert!(next.ignore.is_empty());
    }

    #[test]
    fn add_many_is_idempotent_across_calls() {
        let state = ListState::default();
        let (first, report) = add_many(&state, ListKind::Ignore, &[rel("dist/out.js")]);
        assert_eq!(report.added, 1);

        let (second, report) = add_many(&first, ListKind::Ignore, &[rel("dist/out.js")]);
        assert_eq!(report.added, 0);
        assert_eq!(report.skipped, 0);
        assert_eq!(second.ignore, first.ignore);
    }

    #[test]
    fn add_many_leaves_the_input_state_untouched() {
        let state = ListState::default();
        let (_next, _report) = add_many(&state, ListKind::Include, &[rel("a.ts")]);
        assert_eq!(state, ListState::default());
    }

    #[test]
    fn the_same_path_may_live_in_both_lists() {
        let state = ListState::default();
        let (state, _) = add_many(&state, ListKind::Include, &[rel("shared.ts")]);
        let (state, report) = add_many(&state, ListKind::Ignore, &[rel("shared.ts")]);

        assert_eq!(report.added, 1);
        assert_eq!(state.include, vec!["shared.ts"]);
        assert_eq!(state.ignore, vec!["shared.ts"]);
    }

    #[test]
    fn the_empty_relative_path_is_a_valid_member() {
        let state = ListState::default();
        let (next, report) = add_many(&state, ListKind::Include, &[rel("")]);
        assert_eq!(report.added, 1);
        assert_eq!(next.include, vec![""]);
    }

    #[test]
    fn clear_is_absorbing() {
        let populated = ListState {
            include: vec!["a.ts".into()],
            ignore: vec!["b.ts".into()],
        };
        let once = clear(&populated);
        let twice = clear(&once);

        assert_eq!(once, ListState::default());
        assert_eq!(twice, once);
    }

    #[test]
    fn multi_select_wins_over_a_single_reference() {
        let multi = vec![PathBuf::from("a.ts"), PathBuf::from("b.ts")];
        let single = Some(PathBuf::from("c.ts"));

        let selection = resolve_selection(multi.clone(), single, &NoActiveItem);
        assert_eq!(selection, Selection::Many(multi));
    }

    #[test]
    fn single_reference_is_used_when_multi_is_empty() {
        let selection =
            resolve_selection(Vec::new(), Some(PathBuf::from("c.ts")), &NoActiveItem);
        assert_eq!(selection, Selection::Single(PathBuf::from("c.ts")));
    }

    #[test]
    fn active_item_is_the_last_resort() {
        struct Editor;
        impl ActiveItem for Editor {
            fn active_path(&self) -> Option<PathBuf> {
                Some(PathBuf::from("open.ts"))
            }
        }

        let selection = resolve_selection(Vec::new(), None, &Editor);
        assert_eq!(selection, Selection::Single(PathBuf::from("open.ts")));
    }

    #[test]
    fn nothing_resolvable_is_a_signal_not_an_error() {
        let selection = resolve_selection(Vec::new(), None, &NoActiveItem);
        assert_eq!(selection, Selection::Nothing);
    }

    #[test]
    fn workspace_add_normalizes_and_reports_skips() {
        let dir = TempDir::new().unwrap();
        let store = TomlListStore::new(dir.path().join("state"));
        let root = dir.path().join("project");
        let workspace = Workspace::open(store, root.clone());

        let report = workspace
            .add_paths(
                ListKind::Include,
                &[
                    root.join("src/a.ts"),
                    root.join("src/b.ts"),
                    dir.path().join("outside.ts"),
                ],
            )
            .unwrap();

        assert_eq!(report, AddReport { added: 2, skipped: 1 });
        let state = workspace.state().unwrap();
        assert_eq!(state.include, vec!["src/a.ts", "src/b.ts"]);
    }

    #[test]
    fn concurrent_adds_do_not_lose_updates() {
        let dir = TempDir::new().unwrap();
        let store = TomlListStore::new(dir.path().join("state"));
        let root = dir.path().join("project");
        let workspace = Arc::new(Workspace::open(store, root.clone()));

        let mut handles = Vec::new();
        for i in 0..8 {
            let workspace = Arc::clone(&workspace);
            let file = root.join(format!("src/file-{}.ts", i));
            handles.push(std::thread::spawn(move || {
                workspace.add_paths(ListKind::Include, &[file]).unwrap();
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let state = workspace.state().unwrap();
        assert_eq!(state.include.len(), 8);
    }

    #[test]
    fn clear_empties_a_populated_workspace() {
        let dir = TempDir::new().unwrap();
        let store = TomlListStore::new(dir.path().join("state"));
        let root = dir.path().join("project");
        let workspace = Workspace::open(store, root.clone());

        workspace
            .add_paths(ListKind::Include, &[root.join("a.ts")])
            .unwrap();
        workspace
            .add_paths(ListKind::Ignore, &[root.join("b.ts")])
            .unwrap();
        workspace.clear().unwrap();

        assert_eq!(workspace.state().unwrap(), ListState::default());
    }
}
