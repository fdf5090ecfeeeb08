use std::path::PathBuf;

use sandbook_sandbox::{Language, SandboxController};
use sandbook_tutorial::load_tutorial;

fn sample_path() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    PathBuf::from(manifest_dir).join("tests/sample_tutorial/counter.json")
}

#[test]
fn test_load_counter_tutorial() {
    let tutorial = load_tutorial(sample_path()).expect("Failed to load tutorial");

    assert_eq!(tutorial.name, "Counter");
    assert_eq!(tutorial.theme.as_deref(), Some("night-owl"));
    assert_eq!(tutorial.step_count(), 2);

    let first = tutorial.step(0).unwrap();
    assert_eq!(first.title, "The markup");
    assert_eq!(first.blocks.len(), 1);
    assert_eq!(first.blocks[0].path.as_deref(), Some("/index.html"));
    assert_eq!(first.blocks[0].language, Language::Html);

    // The prose-only block in step two has no path, so it renders with no
    // header and no sandbox actions.
    let second = tutorial.step(1).unwrap();
    assert_eq!(second.blocks.len(), 2);
    assert!(second.blocks[0].show_line_numbers);
    assert_eq!(second.blocks[1].path, None);
}

#[test]
fn test_template_seeds_sandbox() {
    let tutorial = load_tutorial(sample_path()).expect("Failed to load tutorial");

    let mut sandbox = tutorial.sandbox_files();
    assert_eq!(sandbox.len(), 2);
    assert!(sandbox.contents("/index.html").is_some());

    // Copying the step-two snippet overwrites the stub and leaves the
    // sandbox looking at the new content.
    let snippet = &tutorial.step(1).unwrap().blocks[0];
    let path = snippet.path.clone().unwrap();
    sandbox.open_file(&path);
    sandbox.update_file(&path, &snippet.code);
    assert_eq!(sandbox.active_file(), Some("/src/counter.js"));
    assert_eq!(sandbox.active_contents(), Some(snippet.code.as_str()));
}
