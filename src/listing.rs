use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use walkdir::WalkDir;

/// A single entry in a tree-shaped directory listing.
///
/// Non-recursive listings treat directories as opaque names, so every entry
/// comes back as `File` in that mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FileNode {
    File(String),
    Directory {
        name: String,
        children: Vec<FileNode>,
    },
}

impl FileNode {
    pub fn name(&self) -> &str {
        match self {
            Self::File(name) => name,
            Self::Directory { name, .. } => name,
        }
    }
}

/// Default skip pattern: dot-prefixed entry names.
pub fn default_skip() -> &'static Regex {
    static DOT: OnceLock<Regex> = OnceLock::new();
    DOT.get_or_init(|| Regex::new(r"^\.").expect("literal pattern compiles"))
}

/// Lists the entries under `path` as a tree, hiding dot-prefixed names.
///
/// Returns an empty vec when `path` is not a readable directory. With
/// `recursive` set, subdirectories become `Directory` nodes holding their own
/// listing; otherwise every entry is a plain name. Enumeration order is
/// whatever the platform yields.
pub fn list_files(path: &Path, recursive: bool) -> Vec<FileNode> {
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };

    let mut nodes = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let child = entry.path();
        if recursive && child.is_dir() {
            let children = list_files(&child, true);
            nodes.push(FileNode::Directory { name, children });
        } else {
            nodes.push(FileNode::File(name));
        }
    }
    nodes
}

/// Flat-listing counterpart of [`list_files`]: relative `/`-joined paths,
/// dot-prefixed entries skipped.
pub fn list_files_with_path(path: &Path, recursive: bool) -> Vec<String> {
    list_files_with_path_filtered(path, recursive, "", default_skip())
}

/// Lists entries under `path` as flat relative paths joined with `/`.
///
/// An entry whose name matches `skip` is pruned: files are dropped and
/// directories are not descended into. Each emitted path is `prefix` followed
/// by the path relative to `path`. In recursive mode directories themselves
/// are not emitted and their contents appear contiguously where the directory
/// was encountered; in non-recursive mode directories are emitted as opaque
/// leaf names. Returns an empty vec when `path` is not a directory.
pub fn list_files_with_path_filtered(
    path: &Path,
    recursive: bool,
    prefix: &str,
    skip: &Regex,
) -> Vec<String> {
    if !path.is_dir() {
        return Vec::new();
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    WalkDir::new(path)
        .min_depth(1)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || !skip.is_match(&entry.file_name().to_string_lossy())
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| !(recursive && entry.file_type().is_dir()))
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(path).ok()?;
            Some(format!("{prefix}{}", slash_joined(relative)))
        })
        .collect()
}

fn slash_joined(relative: &Path) -> String {
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
