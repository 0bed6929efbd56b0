use std::fs;
use std::path::Path;

/// Size floor below which a file is treated as empty. Catches files holding
/// only a byte-order mark or a stray newline.
const MIN_MEANINGFUL_SIZE: u64 = 16;

/// True iff a fresh stat reports the file at `path` holds at least 16 bytes.
///
/// A heuristic, not a true emptiness check. Missing or unstatable paths
/// count as empty.
pub fn file_not_empty(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.len() >= MIN_MEANINGFUL_SIZE)
        .unwrap_or(false)
}

/// Full contents of `path` as text, `None` on any failure.
pub fn safely_get_contents(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// Like [`safely_get_contents`], returning `default` instead of `None`.
pub fn safely_get_contents_or(path: &Path, default: &str) -> String {
    safely_get_contents(path).unwrap_or_else(|| default.to_string())
}
