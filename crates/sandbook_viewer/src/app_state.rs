// App state management using Dioxus signals
use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use include_dir::{Dir, include_dir};
use rfd::FileDialog;
use sandbook_sandbox::{SandboxController, SandboxFiles, copy_to_sandbox, open_in_sandbox};
use sandbook_tutorial::{Step, Tutorial, load_tutorial, parse_tutorial};

use crate::config::ViewerConfig;
use crate::theme::EditorTheme;

static BUILTIN_TUTORIALS: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets/tutorials");

/// Names of the tutorials embedded in the binary, in menu order.
pub fn builtin_tutorial_names() -> Vec<String> {
    let mut names: Vec<String> = BUILTIN_TUTORIALS
        .files()
        .filter(|f| f.path().extension().is_some_and(|ext| ext == "json"))
        .filter_map(|f| f.path().file_stem())
        .map(|stem| stem.to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub tutorial: Signal<Option<Tutorial>>,
    pub tutorial_path: Signal<Option<PathBuf>>,
    pub current_step: Signal<usize>,
    pub sandbox: Signal<SandboxFiles>,
    pub theme: Signal<EditorTheme>,
    pub show_sandbox: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tutorial: Signal::new(None),
            tutorial_path: Signal::new(None),
            current_step: Signal::new(0),
            sandbox: Signal::new(SandboxFiles::new()),
            theme: Signal::new(EditorTheme::default()),
            show_sandbox: Signal::new(true),
        }
    }

    fn install_tutorial(&self, tutorial: Tutorial, path: Option<PathBuf>) {
        tracing::info!(name = %tutorial.name, steps = tutorial.step_count(), "tutorial installed");

        if let Some(name) = tutorial.theme.as_deref() {
            let mut theme = self.theme;
            theme.set(EditorTheme::from_name(name));
        }

        let mut sandbox = self.sandbox;
        sandbox.write().reset(tutorial.sandbox_files());

        let mut step = self.current_step;
        step.set(0);
        let mut tutorial_path = self.tutorial_path;
        tutorial_path.set(path);
        let mut tutorial_signal = self.tutorial;
        tutorial_signal.set(Some(tutorial));
    }

    pub fn load_tutorial_from(&self, path: &Path) {
        match load_tutorial(path) {
            Ok(tutorial) => self.install_tutorial(tutorial, Some(path.to_path_buf())),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to load tutorial");
            }
        }
    }

    pub fn open_tutorial_dialog(&self) {
        if let Some(path) = FileDialog::new()
            .add_filter("Sandbook Tutorial", &["json"])
            .pick_file()
        {
            self.load_tutorial_from(&path);
            let mut config = ViewerConfig::load();
            config.last_tutorial = Some(path);
            config.save();
        }
    }

    pub fn reload_tutorial(&self) {
        let path = self.tutorial_path.read().clone();
        if let Some(path) = path {
            self.load_tutorial_from(&path);
        }
    }

    pub fn load_builtin(&self, name: &str) {
        let Some(content) = BUILTIN_TUTORIALS
            .get_file(format!("{name}.json"))
            .and_then(|f| f.contents_utf8())
        else {
            tracing::error!(name, "unknown built-in tutorial");
            return;
        };
        match parse_tutorial(content) {
            Ok(tutorial) => self.install_tutorial(tutorial, None),
            Err(e) => tracing::error!(name, error = %e, "failed to parse built-in tutorial"),
        }
    }

    pub fn get_current_step(&self) -> Option<Step> {
        let tutorial = self.tutorial.read();
        let index = *self.current_step.read();
        tutorial.as_ref().and_then(|t| t.step(index)).cloned()
    }

    pub fn select_step(&self, index: usize) {
        let count = self
            .tutorial
            .read()
            .as_ref()
            .map(|t| t.step_count())
            .unwrap_or(0);
        if index < count {
            let mut step = self.current_step;
            step.set(index);
        }
    }

    /// "Copy to Sandbox": open the file, then overwrite it with the
    /// snippet's code, and reveal the sandbox panel.
    pub fn copy_snippet_to_sandbox(&self, path: &str, code: &str) {
        {
            let mut sandbox = self.sandbox;
            let mut files = sandbox.write();
            copy_to_sandbox(&mut *files, path, code);
        }
        let mut show = self.show_sandbox;
        show.set(true);
    }

    /// "Open File": open without touching content, and reveal the panel.
    pub fn open_snippet_file(&self, path: &str) {
        {
            let mut sandbox = self.sandbox;
            let mut files = sandbox.write();
            open_in_sandbox(&mut *files, path);
        }
        let mut show = self.show_sandbox;
        show.set(true);
    }

    pub fn set_active_file(&self, path: &str) {
        let mut sandbox = self.sandbox;
        sandbox.write().open_file(path);
    }

    pub fn edit_active_file(&self, content: &str) {
        let mut sandbox = self.sandbox;
        let mut files = sandbox.write();
        if let Some(path) = files.active_file().map(str::to_string) {
            files.update_file(&path, content);
        }
    }

    /// Puts the sandbox back to the tutorial's template.
    pub fn reset_sandbox(&self) {
        let template = self
            .tutorial
            .read()
            .as_ref()
            .map(|t| t.sandbox_files())
            .unwrap_or_default();
        let mut sandbox = self.sandbox;
        sandbox.write().reset(template);
    }

    pub fn toggle_sandbox(&self) {
        let visible = *self.show_sandbox.read();
        let mut show = self.show_sandbox;
        show.set(!visible);
    }

    pub fn set_theme(&self, theme: EditorTheme) {
        let mut theme_signal = self.theme;
        theme_signal.set(theme);
        let mut config = ViewerConfig::load();
        config.theme = Some(theme.name().to_string());
        config.save();
    }
}
