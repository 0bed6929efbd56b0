use std::path::Path;

/// Extension component of a filename: the part after the final `.` of the
/// last path component, empty when there is none.
pub fn file_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Final path component without its extension.
pub fn file_name(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Full path with the extension stripped and the directory portion kept,
/// re-joined with `/`. An input without a directory component yields no
/// leading separator.
pub fn remove_extension(path: &str) -> String {
    let stem = file_name(path);
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            format!("{}/{}", parent.display(), stem)
        }
        _ => stem,
    }
}
