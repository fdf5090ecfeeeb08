use dioxus::prelude::*;
use sandbook_sandbox::Language;

use crate::app_state::AppState;

#[derive(Props, PartialEq, Clone)]
pub struct CodeViewerProps {
    pub code: String,
    #[props(default)]
    pub language: Language,
    #[props(default)]
    pub show_line_numbers: bool,
}

/// Read-only single-file view of a snippet. No tab strip, no editing.
#[allow(non_snake_case)]
pub fn CodeViewer(props: CodeViewerProps) -> Element {
    let state = use_context::<AppState>();
    let palette = state.theme.read().palette();
    let line_count = props.code.lines().count().max(1);
    let language = props.language.as_str();

    rsx! {
        div {
            class: "code-viewer",
            style: "display: flex; background: {palette.background}; color: {palette.foreground}; font-family: monospace; font-size: 13px; line-height: 1.5; padding: 12px 0; overflow-x: auto;",
            title: "{language}",

            if props.show_line_numbers {
                div {
                    style: "text-align: right; padding: 0 0 0 12px; color: {palette.gutter}; user-select: none;",
                    for line in 1..=line_count {
                        div { key: "{line}", "{line}" }
                    }
                }
            }

            pre {
                style: "margin: 0; padding: 0 16px; flex: 1;",
                code { "{props.code}" }
            }
        }
    }
}
