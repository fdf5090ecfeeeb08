/// Shortens a file path for header display: drops the leading root slash
/// and any `./` prefix, converts backslashes to forward slashes.
///
/// Accepts any string, including empty, and never fails; anything that
/// doesn't match a known prefix passes through unchanged. Idempotent, so
/// re-formatting an already formatted path is a no-op.
pub fn format_file_path(path: &str) -> String {
    let mut p = path.replace('\\', "/");
    loop {
        if let Some(rest) = p.strip_prefix("./") {
            p = rest.to_string();
        } else if let Some(rest) = p.strip_prefix('/') {
            p = rest.to_string();
        } else {
            break;
        }
    }
    p
}

/// Canonical key form used by the sandbox file set: leading slash, forward
/// separators, no empty or `.` segments.
pub fn normalize_path(path: &str) -> String {
    let cleaned = path.replace('\\', "/");
    let mut out = String::from("/");
    for segment in cleaned.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if out.len() > 1 {
            out.push('/');
        }
        out.push_str(segment);
    }
    out
}
