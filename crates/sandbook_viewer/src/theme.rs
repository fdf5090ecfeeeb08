/// Static colors a theme resolves to. Rendering input only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub action: &'static str,
    pub gutter: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTheme {
    #[default]
    NightOwl,
    GithubLight,
    Dracula,
}

impl EditorTheme {
    pub fn all() -> [EditorTheme; 3] {
        [
            EditorTheme::NightOwl,
            EditorTheme::GithubLight,
            EditorTheme::Dracula,
        ]
    }

    /// Lenient lookup: unknown names fall back to the default theme.
    pub fn from_name(name: &str) -> EditorTheme {
        match name.trim().to_ascii_lowercase().as_str() {
            "night-owl" | "night_owl" | "nightowl" => EditorTheme::NightOwl,
            "github-light" | "github_light" | "light" => EditorTheme::GithubLight,
            "dracula" => EditorTheme::Dracula,
            _ => EditorTheme::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EditorTheme::NightOwl => "night-owl",
            EditorTheme::GithubLight => "github-light",
            EditorTheme::Dracula => "dracula",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EditorTheme::NightOwl => "Night Owl",
            EditorTheme::GithubLight => "GitHub Light",
            EditorTheme::Dracula => "Dracula",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            EditorTheme::NightOwl => Palette {
                background: "#011627",
                surface: "#0b2942",
                foreground: "#d6deeb",
                muted: "#5f7e97",
                accent: "#c792ea",
                action: "#7fdbca",
                gutter: "#4b6479",
            },
            EditorTheme::GithubLight => Palette {
                background: "#ffffff",
                surface: "#f6f8fa",
                foreground: "#24292e",
                muted: "#6a737d",
                accent: "#6f42c1",
                action: "#0969da",
                gutter: "#babbbd",
            },
            EditorTheme::Dracula => Palette {
                background: "#282a36",
                surface: "#343746",
                foreground: "#f8f8f2",
                muted: "#6272a4",
                accent: "#bd93f9",
                action: "#8be9fd",
                gutter: "#565869",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_handles_supported_values() {
        assert_eq!(EditorTheme::from_name("night-owl"), EditorTheme::NightOwl);
        assert_eq!(EditorTheme::from_name("Dracula"), EditorTheme::Dracula);
        assert_eq!(
            EditorTheme::from_name(" github-light "),
            EditorTheme::GithubLight
        );
    }

    #[test]
    fn from_name_defaults_for_unknown_values() {
        assert_eq!(EditorTheme::from_name("solarized"), EditorTheme::default());
        assert_eq!(EditorTheme::from_name(""), EditorTheme::default());
    }

    #[test]
    fn names_round_trip_through_from_name() {
        for theme in EditorTheme::all() {
            assert_eq!(EditorTheme::from_name(theme.name()), theme);
        }
    }
}
