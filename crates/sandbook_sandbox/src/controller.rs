/// The two outbound operations a snippet panel needs from a sandbox.
///
/// Both are fire-and-forget: no return value, no error to propagate. The
/// UI depends only on this trait, so anything file-set shaped can stand in
/// for the real sandbox.
pub trait SandboxController {
    /// Makes `path` the active file.
    fn open_file(&mut self, path: &str);

    /// Creates or overwrites the file at `path`.
    fn update_file(&mut self, path: &str, content: &str);
}

/// Opens `path`, then overwrites its content with `code`.
///
/// Open must come first so the controller's active view reflects the new
/// content once the update lands.
pub fn copy_to_sandbox(controller: &mut dyn SandboxController, path: &str, code: &str) {
    controller.open_file(path);
    controller.update_file(path, code);
}

/// Opens `path` without touching its content.
pub fn open_in_sandbox(controller: &mut dyn SandboxController, path: &str) {
    controller.open_file(path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Open(String),
        Update(String, String),
    }

    #[derive(Default)]
    struct RecordingSandbox {
        calls: Vec<Call>,
    }

    impl SandboxController for RecordingSandbox {
        fn open_file(&mut self, path: &str) {
            self.calls.push(Call::Open(path.to_string()));
        }

        fn update_file(&mut self, path: &str, content: &str) {
            self.calls
                .push(Call::Update(path.to_string(), content.to_string()));
        }
    }

    #[test]
    fn copy_opens_then_updates_exactly_once() {
        let mut sandbox = RecordingSandbox::default();
        copy_to_sandbox(&mut sandbox, "/src/App.js", "export default 1;");
        assert_eq!(
            sandbox.calls,
            vec![
                Call::Open("/src/App.js".to_string()),
                Call::Update("/src/App.js".to_string(), "export default 1;".to_string()),
            ]
        );
    }

    #[test]
    fn open_never_updates() {
        let mut sandbox = RecordingSandbox::default();
        open_in_sandbox(&mut sandbox, "/src/App.js");
        assert_eq!(sandbox.calls, vec![Call::Open("/src/App.js".to_string())]);
    }

    #[test]
    fn repeated_clicks_dispatch_once_each() {
        let mut sandbox = RecordingSandbox::default();
        copy_to_sandbox(&mut sandbox, "/a.js", "a");
        copy_to_sandbox(&mut sandbox, "/a.js", "a");
        assert_eq!(sandbox.calls.len(), 4);
    }
}
