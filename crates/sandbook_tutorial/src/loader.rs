use std::fs;
use std::path::Path;

use sandbook_sandbox::normalize_path;

use crate::errors::{TutorialError, TutorialResult};
use crate::tutorial::Tutorial;

pub fn load_tutorial(path: impl AsRef<Path>) -> TutorialResult<Tutorial> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading tutorial");
    let content = fs::read_to_string(path)?;
    parse_tutorial(&content)
}

pub fn parse_tutorial(content: &str) -> TutorialResult<Tutorial> {
    let tutorial: Tutorial = serde_json::from_str(content)?;
    if tutorial.steps.is_empty() {
        return Err(TutorialError::NoSteps);
    }

    // Snippets may point at paths the template doesn't seed. The sandbox
    // materializes those as empty files on open, so this is only worth a
    // warning for tutorial authors.
    for step in &tutorial.steps {
        for block in &step.blocks {
            if let Some(path) = block.path.as_deref() {
                let key = normalize_path(path);
                if !tutorial.files.keys().any(|p| normalize_path(p) == key) {
                    tracing::warn!(
                        step = %step.title,
                        path = %key,
                        "snippet path not in sandbox template"
                    );
                }
            }
        }
    }

    tracing::debug!(
        name = %tutorial.name,
        steps = tutorial.steps.len(),
        files = tutorial.files.len(),
        "tutorial parsed"
    );
    Ok(tutorial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandbook_sandbox::Language;

    #[test]
    fn parse_rejects_stepless_documents() {
        let doc = r#"{ "name": "Empty", "steps": [] }"#;
        assert!(matches!(parse_tutorial(doc), Err(TutorialError::NoSteps)));
    }

    #[test]
    fn parse_fills_snippet_defaults() {
        let doc = r#"{
            "name": "Defaults",
            "steps": [
                { "title": "One", "blocks": [ { "code": "console.log(1)" } ] }
            ]
        }"#;
        let tutorial = parse_tutorial(doc).unwrap();
        let block = &tutorial.steps[0].blocks[0];
        assert_eq!(block.path, None);
        assert_eq!(block.language, Language::JavaScript);
        assert!(!block.show_line_numbers);
    }

    #[test]
    fn parse_surfaces_malformed_json() {
        assert!(matches!(
            parse_tutorial("{ not json"),
            Err(TutorialError::Json(_))
        ));
    }

    #[test]
    fn sandbox_files_normalize_template_keys() {
        let doc = r#"{
            "name": "Keys",
            "files": { "src/App.js": "export default 1;" },
            "steps": [ { "title": "One" } ]
        }"#;
        let tutorial = parse_tutorial(doc).unwrap();
        let files = tutorial.sandbox_files();
        assert_eq!(files.contents("/src/App.js"), Some("export default 1;"));
    }
}
