use std::collections::HashMap;

use crate::controller::SandboxController;
use crate::path::normalize_path;

/// In-memory virtual file set backing the sandbox panel.
///
/// Paths are stored in normalized form (leading slash, forward separators),
/// so `open_file("src/App.js")` and `open_file("/src/App.js")` address the
/// same entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SandboxFiles {
    files: HashMap<String, String>,
    active: Option<String>,
}

impl SandboxFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file set from raw (path, content) pairs, normalizing keys.
    pub fn from_files<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: Into<String>,
    {
        let mut set = Self::new();
        for (path, content) in files {
            set.files
                .insert(normalize_path(path.as_ref()), content.into());
        }
        set
    }

    /// Replaces the whole file set and clears the active file.
    pub fn reset(&mut self, files: SandboxFiles) {
        tracing::debug!(files = files.files.len(), "sandbox reset");
        *self = files;
    }

    pub fn active_file(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn contents(&self, path: &str) -> Option<&str> {
        self.files.get(&normalize_path(path)).map(String::as_str)
    }

    pub fn active_contents(&self) -> Option<&str> {
        self.active
            .as_ref()
            .and_then(|p| self.files.get(p))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Paths in a stable order for the file strip.
    pub fn sorted_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.files.keys().cloned().collect();
        paths.sort();
        paths
    }
}

impl SandboxController for SandboxFiles {
    /// Activates `path`. An unknown path materializes as an empty file so
    /// the editor always has a buffer to show.
    fn open_file(&mut self, path: &str) {
        let key = normalize_path(path);
        self.files.entry(key.clone()).or_default();
        tracing::debug!(path = %key, "sandbox open");
        self.active = Some(key);
    }

    /// Creates or overwrites the file. Does not change the active file.
    fn update_file(&mut self, path: &str, content: &str) {
        let key = normalize_path(path);
        tracing::debug!(path = %key, bytes = content.len(), "sandbox update");
        self.files.insert(key, content.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::copy_to_sandbox;

    #[test]
    fn open_unknown_path_creates_empty_active_file() {
        let mut sandbox = SandboxFiles::new();
        sandbox.open_file("/src/App.js");
        assert_eq!(sandbox.active_file(), Some("/src/App.js"));
        assert_eq!(sandbox.contents("/src/App.js"), Some(""));
    }

    #[test]
    fn update_does_not_change_active_file() {
        let mut sandbox = SandboxFiles::from_files([("/a.js", "a"), ("/b.js", "b")]);
        sandbox.open_file("/a.js");
        sandbox.update_file("/b.js", "changed");
        assert_eq!(sandbox.active_file(), Some("/a.js"));
        assert_eq!(sandbox.contents("/b.js"), Some("changed"));
    }

    #[test]
    fn copy_leaves_active_view_on_new_content() {
        let mut sandbox = SandboxFiles::from_files([("/src/App.js", "old")]);
        copy_to_sandbox(&mut sandbox, "src/App.js", "new");
        assert_eq!(sandbox.active_file(), Some("/src/App.js"));
        assert_eq!(sandbox.active_contents(), Some("new"));
    }

    #[test]
    fn keys_are_normalized_on_every_entry_point() {
        let mut sandbox = SandboxFiles::from_files([("src/App.js", "x")]);
        sandbox.update_file("./src/App.js", "y");
        assert_eq!(sandbox.len(), 1);
        assert_eq!(sandbox.contents("/src/App.js"), Some("y"));
    }

    #[test]
    fn sorted_paths_are_stable() {
        let sandbox = SandboxFiles::from_files([("/b.js", ""), ("/a.js", ""), ("/c.js", "")]);
        assert_eq!(sandbox.sorted_paths(), vec!["/a.js", "/b.js", "/c.js"]);
    }

    #[test]
    fn reset_replaces_files_and_active() {
        let mut sandbox = SandboxFiles::new();
        sandbox.open_file("/scratch.js");
        sandbox.reset(SandboxFiles::from_files([("/index.js", "")]));
        assert_eq!(sandbox.active_file(), None);
        assert_eq!(sandbox.sorted_paths(), vec!["/index.js"]);
    }
}
