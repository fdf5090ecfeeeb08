use dioxus::prelude::*;
use sandbook_sandbox::{Language, format_file_path};

use crate::app_state::AppState;
use crate::components::CodeViewer;

#[derive(Props, PartialEq, Clone)]
pub struct TutorialCodeBlockProps {
    /// Sandbox path the snippet targets. Without one the header row
    /// (path label + both actions) is omitted entirely.
    #[props(default)]
    pub path: Option<String>,
    pub code: String,
    #[props(default)]
    pub language: Language,
    #[props(default)]
    pub show_line_numbers: bool,
}

/// A themed panel around one tutorial snippet: formatted path and the two
/// sandbox actions on top, a read-only viewer below.
#[allow(non_snake_case)]
pub fn TutorialCodeBlock(props: TutorialCodeBlockProps) -> Element {
    let state = use_context::<AppState>();
    let palette = state.theme.read().palette();

    let path = props.path.clone().unwrap_or_default();
    let display_path = format_file_path(&path);
    let copy_path = path.clone();
    let copy_code = props.code.clone();
    let open_path = path.clone();

    let button_style = format!(
        "font-size: 11px; text-transform: uppercase; letter-spacing: 0.03em; \
         padding: 3px 10px; border: none; border-radius: 3px; cursor: pointer; \
         background: {}; color: {};",
        palette.action, palette.background
    );

    rsx! {
        div {
            class: "tutorial-code-block",
            style: "background: {palette.surface}; border-radius: 6px; margin: 16px 0; overflow: hidden;",

            if !path.is_empty() {
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 16px 4px 16px;",

                    span {
                        style: "color: {palette.accent}; font-family: monospace; font-size: 12px;",
                        "{display_path}"
                    }

                    div {
                        style: "display: flex; gap: 8px;",
                        button {
                            style: "{button_style}",
                            onclick: move |_| state.copy_snippet_to_sandbox(&copy_path, &copy_code),
                            "Copy to Sandbox"
                        }
                        button {
                            style: "{button_style}",
                            onclick: move |_| state.open_snippet_file(&open_path),
                            "Open File"
                        }
                    }
                }
            }

            CodeViewer {
                code: props.code.clone(),
                language: props.language,
                show_line_numbers: props.show_line_numbers,
            }
        }
    }
}
