use serde::{Deserialize, Serialize};

/// Display languages a snippet can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Html,
    Css,
    Json,
    Markdown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Jsx => "jsx",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Markdown => "markdown",
        }
    }

    /// Infers the language from a path's extension.
    pub fn from_path(path: &str) -> Option<Language> {
        let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            "jsx" => Some(Language::Jsx),
            "ts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            "htm" | "html" => Some(Language::Html),
            "css" => Some(Language::Css),
            "json" => Some(Language::Json),
            "md" | "markdown" => Some(Language::Markdown),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_maps_common_extensions() {
        assert_eq!(Language::from_path("/src/App.jsx"), Some(Language::Jsx));
        assert_eq!(Language::from_path("index.TS"), Some(Language::TypeScript));
        assert_eq!(Language::from_path("/styles.css"), Some(Language::Css));
        assert_eq!(Language::from_path("README.md"), Some(Language::Markdown));
    }

    #[test]
    fn from_path_rejects_unknown_or_missing_extensions() {
        assert_eq!(Language::from_path("Makefile"), None);
        assert_eq!(Language::from_path("main.rs"), None);
    }

    #[test]
    fn default_is_javascript() {
        assert_eq!(Language::default(), Language::JavaScript);
        assert_eq!(Language::default().as_str(), "javascript");
    }
}
