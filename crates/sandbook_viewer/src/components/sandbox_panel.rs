use dioxus::prelude::*;
use sandbook_sandbox::format_file_path;

use crate::app_state::AppState;

/// The live half of the sandbox: a file strip over an editable buffer for
/// the active file. Snippet actions and the strip both write through
/// `AppState` into the shared file set.
#[component]
pub fn SandboxPanel() -> Element {
    let state = use_context::<AppState>();
    let palette = state.theme.read().palette();

    let (paths, active, contents) = {
        let sandbox = state.sandbox.read();
        (
            sandbox.sorted_paths(),
            sandbox.active_file().map(str::to_string),
            sandbox.active_contents().unwrap_or_default().to_string(),
        )
    };

    rsx! {
        div {
            class: "sandbox-panel",
            style: "width: 380px; display: flex; flex-direction: column; border-left: 1px solid {palette.muted}; background: {palette.background}; color: {palette.foreground};",

            div {
                style: "padding: 6px 10px; font-weight: bold; font-size: 12px; border-bottom: 1px solid {palette.muted};",
                "Sandbox"
            }

            // File strip
            div {
                style: "display: flex; flex-wrap: wrap; gap: 2px; padding: 4px; border-bottom: 1px solid {palette.muted};",
                for path in paths {
                    {
                        let is_active = Some(&path) == active.as_ref();
                        let bg = if is_active { palette.surface } else { "transparent" };
                        let label = format_file_path(&path);
                        let open_path = path.clone();

                        rsx! {
                            div {
                                key: "{path}",
                                style: "padding: 3px 8px; cursor: pointer; font-size: 11px; font-family: monospace; background: {bg}; border-radius: 3px;",
                                onclick: move |_| state.set_active_file(&open_path),
                                "{label}"
                            }
                        }
                    }
                }
            }

            if active.is_some() {
                textarea {
                    style: "flex: 1; background: {palette.background}; color: {palette.foreground}; border: none; outline: none; resize: none; padding: 10px; font-family: monospace; font-size: 13px;",
                    spellcheck: "false",
                    value: "{contents}",
                    oninput: move |evt| state.edit_active_file(&evt.value()),
                }
            } else {
                div {
                    style: "flex: 1; display: flex; align-items: center; justify-content: center; color: {palette.muted}; font-style: italic;",
                    "No file open"
                }
            }
        }
    }
}
