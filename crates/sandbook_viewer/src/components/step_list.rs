use dioxus::prelude::*;

use crate::app_state::AppState;

#[component]
pub fn StepList() -> Element {
    let state = use_context::<AppState>();
    let palette = state.theme.read().palette();
    let tutorial = state.tutorial.read();
    let selected = *state.current_step.read();

    rsx! {
        div {
            class: "step-list",
            style: "width: 220px; background: {palette.surface}; color: {palette.foreground}; border-right: 1px solid {palette.muted}; padding: 8px; overflow-y: auto;",

            if let Some(tut) = tutorial.as_ref() {
                h3 { style: "margin: 0 0 8px 0; font-size: 14px;", "{tut.name}" }

                for (idx, step) in tut.steps.iter().enumerate() {
                    {
                        let is_selected = idx == selected;
                        let bg = if is_selected { palette.background } else { "transparent" };
                        let label = format!("{}. {}", idx + 1, step.title);

                        rsx! {
                            div {
                                key: "{idx}",
                                style: "padding: 5px 8px; cursor: pointer; background: {bg}; border-radius: 3px; margin-bottom: 2px; font-size: 13px;",
                                onclick: move |_| state.select_step(idx),
                                "{label}"
                            }
                        }
                    }
                }
            } else {
                div {
                    style: "color: {palette.muted}; font-style: italic;",
                    "No tutorial loaded"
                }
            }
        }
    }
}
