use std::collections::HashMap;

use sandbook_sandbox::{Language, SandboxFiles};
use serde::{Deserialize, Serialize};

/// One code snippet shown inside a step. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snippet {
    /// Sandbox path the snippet belongs to. Snippets without a path render
    /// as plain read-only listings with no sandbox actions.
    #[serde(default)]
    pub path: Option<String>,
    pub code: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub show_line_numbers: bool,
}

impl Snippet {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            path: None,
            code: code.into(),
            language: Language::default(),
            show_line_numbers: false,
        }
    }

    pub fn with_path(path: impl Into<String>, code: impl Into<String>) -> Self {
        let path = path.into();
        let language = Language::from_path(&path).unwrap_or_default();
        Self {
            path: Some(path),
            code: code.into(),
            language,
            show_line_numbers: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    pub title: String,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Snippet>,
}

/// A whole tutorial document: ordered steps plus the sandbox template the
/// steps write into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tutorial {
    pub name: String,
    /// Named visual theme. Rendering-layer input only.
    #[serde(default)]
    pub theme: Option<String>,
    /// Initial sandbox file set, keyed by path.
    #[serde(default)]
    pub files: HashMap<String, String>,
    pub steps: Vec<Step>,
}

impl Tutorial {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            theme: None,
            files: HashMap::new(),
            steps: Vec::new(),
        }
    }

    pub fn step(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Builds the sandbox seed from the template, with normalized keys.
    pub fn sandbox_files(&self) -> SandboxFiles {
        SandboxFiles::from_files(self.files.iter().map(|(p, c)| (p.as_str(), c.clone())))
    }
}
