use dioxus::prelude::*;

use crate::app_state::{AppState, builtin_tutorial_names};
use crate::theme::EditorTheme;

#[component]
pub fn MenuBar() -> Element {
    let state = use_context::<AppState>();
    let mut active_menu = use_signal(|| None::<String>);
    let palette = state.theme.read().palette();
    let sandbox_visible = *state.show_sandbox.read();

    let menu_item_style = "padding: 4px 12px; cursor: pointer; position: relative; user-select: none;";
    let dropdown_style = "
        position: absolute;
        top: 100%;
        left: 0;
        background: white;
        color: black;
        border: 1px solid #ccc;
        box-shadow: 2px 2px 5px rgba(0,0,0,0.2);
        min-width: 180px;
        z-index: 1001;
    ";
    let dropdown_item_style = "padding: 6px 12px; cursor: pointer;";

    // Helper to close menu
    let mut close_menu = move || active_menu.set(None);
    let mut toggle_menu = move |name: &str| {
        if *active_menu.read() == Some(name.to_string()) {
            active_menu.set(None);
        } else {
            active_menu.set(Some(name.to_string()));
        }
    };

    rsx! {
        div {
            class: "menu-bar",
            style: "display: flex; background: {palette.surface}; color: {palette.foreground}; border-bottom: 1px solid {palette.muted}; padding: 4px 8px;",

            // File Menu
            div {
                style: "{menu_item_style}",
                onclick: move |_| toggle_menu("File"),
                "File"
                if *active_menu.read() == Some("File".to_string()) {
                    div {
                        style: "{dropdown_style}",
                        onclick: move |evt| evt.stop_propagation(), // Prevent closing when clicking dropdown bg

                        div {
                            style: "{dropdown_item_style}",
                            onclick: move |_| {
                                state.open_tutorial_dialog();
                                close_menu();
                            },
                            "Open Tutorial..."
                        }
                        div {
                            style: "{dropdown_item_style}",
                            onclick: move |_| {
                                state.reload_tutorial();
                                close_menu();
                            },
                            "Reload Tutorial"
                        }
                        div { style: "height: 1px; background: #eee; margin: 2px 0;" }
                        div {
                            style: "{dropdown_item_style}",
                            onclick: move |_| -> () { std::process::exit(0); },
                            "Exit"
                        }
                    }
                }
            }

            // Tutorials Menu (built-ins)
            div {
                style: "{menu_item_style}",
                onclick: move |_| toggle_menu("Tutorials"),
                "Tutorials"
                if *active_menu.read() == Some("Tutorials".to_string()) {
                    div {
                        style: "{dropdown_style}",
                        onclick: move |evt| evt.stop_propagation(),

                        for name in builtin_tutorial_names() {
                            {
                                let load_name = name.clone();
                                rsx! {
                                    div {
                                        key: "{name}",
                                        style: "{dropdown_item_style}",
                                        onclick: move |_| {
                                            state.load_builtin(&load_name);
                                            close_menu();
                                        },
                                        "{name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Sandbox Menu
            div {
                style: "{menu_item_style}",
                onclick: move |_| toggle_menu("Sandbox"),
                "Sandbox"
                if *active_menu.read() == Some("Sandbox".to_string()) {
                    div {
                        style: "{dropdown_style}",
                        onclick: move |evt| evt.stop_propagation(),

                        div {
                            style: "{dropdown_item_style}",
                            onclick: move |_| {
                                state.toggle_sandbox();
                                close_menu();
                            },
                            if sandbox_visible { "Hide Sandbox" } else { "Show Sandbox" }
                        }
                        div {
                            style: "{dropdown_item_style}",
                            onclick: move |_| {
                                state.reset_sandbox();
                                close_menu();
                            },
                            "Reset Sandbox"
                        }
                    }
                }
            }

            // Theme Menu
            div {
                style: "{menu_item_style}",
                onclick: move |_| toggle_menu("Theme"),
                "Theme"
                if *active_menu.read() == Some("Theme".to_string()) {
                    div {
                        style: "{dropdown_style}",
                        onclick: move |evt| evt.stop_propagation(),

                        for theme in EditorTheme::all() {
                            {
                                let name = theme.name();
                                let label = theme.label();
                                rsx! {
                                    div {
                                        key: "{name}",
                                        style: "{dropdown_item_style}",
                                        onclick: move |_| {
                                            state.set_theme(theme);
                                            close_menu();
                                        },
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
