use crate::error::{FilekitError, Result};
use std::fs;
use std::path::Path;

/// Reads the template at `path` and applies each `(placeholder, replacement)`
/// pair in order via literal substring replacement.
///
/// Each pass operates on the output of the previous one, so a replacement
/// whose output contains a not-yet-applied placeholder will be rewritten by
/// the later pass. The only failure surfaced to callers in this crate:
/// a missing template is an error, not a fallback.
pub fn fill_template(path: &Path, replacements: &[(&str, &str)]) -> Result<String> {
    if !path.exists() {
        return Err(FilekitError::TemplateNotFound(path.display().to_string()));
    }

    let mut content = fs::read_to_string(path)?;
    for &(placeholder, replacement) in replacements {
        content = content.replace(placeholder, replacement);
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn fill_replaces_every_occurrence() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("greeting.tpl");
        fs::write(&path, "Hello {NAME}, you are {NAME}!").expect("template should write");

        let filled = fill_template(&path, &[("{NAME}", "Bob")]).expect("fill should succeed");
        assert_eq!(filled, "Hello Bob, you are Bob!");
    }

    #[test]
    fn fill_applies_replacements_in_order() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("chain.tpl");
        fs::write(&path, "{A}").expect("template should write");

        // {A} expands to {B}, which the later pair then rewrites.
        let filled = fill_template(&path, &[("{A}", "{B}"), ("{B}", "done")])
            .expect("fill should succeed");
        assert_eq!(filled, "done");

        let reversed = fill_template(&path, &[("{B}", "done"), ("{A}", "{B}")])
            .expect("fill should succeed");
        assert_eq!(reversed, "{B}");
    }

    #[test]
    fn fill_errors_on_missing_template() {
        let dir = TempDir::new().expect("temp dir should be created");
        let result = fill_template(&dir.path().join("absent.tpl"), &[("{A}", "x")]);
        assert!(matches!(result, Err(FilekitError::TemplateNotFound(_))));
    }
}
