use std::path::PathBuf;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

mod app_state;
mod components;
mod config;
mod theme;

use app_state::{AppState, builtin_tutorial_names};
use components::*;
use config::ViewerConfig;
use theme::EditorTheme;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = ViewerConfig::load();
    let width = settings.window_width.unwrap_or(1100.0);
    let height = settings.window_height.unwrap_or(760.0);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Sandbook")
            .with_resizable(true)
            .with_inner_size(LogicalSize::new(width, height)),
    );

    LaunchBuilder::desktop().with_cfg(config).launch(App);
}

#[component]
fn App() -> Element {
    // Initialize app state
    use_context_provider(|| {
        let state = AppState::new();
        let settings = ViewerConfig::load();

        if let Some(name) = settings.theme.as_deref() {
            let mut theme = state.theme;
            theme.set(EditorTheme::from_name(name));
        }

        // Opening tutorial: CLI argument, then the last one opened, then
        // the first built-in.
        if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
            state.load_tutorial_from(&path);
        } else if let Some(path) = settings.last_tutorial.as_deref().filter(|p| p.exists()) {
            state.load_tutorial_from(path);
        }
        if state.tutorial.read().is_none() {
            if let Some(name) = builtin_tutorial_names().first() {
                state.load_builtin(name);
            }
        }

        state
    });

    let state = use_context::<AppState>();
    let palette = state.theme.read().palette();
    let show_sandbox = *state.show_sandbox.read();
    let step = state.get_current_step();

    rsx! {
        div {
            style: "width: 100vw; height: 100vh; display: flex; flex-direction: column; font-family: 'Segoe UI', Arial, sans-serif; font-size: 13px; background: {palette.background}; color: {palette.foreground};",

            // Menu Bar
            MenuBar {}

            // Main Content Area
            div {
                style: "flex: 1; display: flex; overflow: hidden;",

                // Left Sidebar - Steps
                StepList {}

                // Central Area - current step
                div {
                    style: "flex: 1; overflow-y: auto; padding: 16px 24px;",

                    if let Some(step) = step {
                        h2 { style: "margin: 0 0 8px 0; font-size: 18px;", "{step.title}" }
                        if let Some(intro) = step.intro.as_ref() {
                            p { style: "color: {palette.muted}; max-width: 70ch;", "{intro}" }
                        }
                        for (idx, block) in step.blocks.iter().enumerate() {
                            TutorialCodeBlock {
                                key: "{idx}",
                                path: block.path.clone(),
                                code: block.code.clone(),
                                language: block.language,
                                show_line_numbers: block.show_line_numbers,
                            }
                        }
                    } else {
                        div {
                            style: "color: {palette.muted}; font-style: italic; padding: 24px;",
                            "Open a tutorial to get started"
                        }
                    }
                }

                // Right Sidebar - Sandbox
                if show_sandbox {
                    SandboxPanel {}
                }
            }
        }
    }
}
