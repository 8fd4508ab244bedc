// src/core/scenarios.rs
use crate::utils::is_hidden;
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Hidden entries below the root and directories named in `exclude_dirs`
/// are skipped.
#[must_use]
pub fn should_exclude(entry: &DirEntry, exclude_dirs: &[&str]) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    if is_hidden(entry) {
        return true;
    }
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.contains(&name))
}

/// Finds plan files under `dir` whose file name matches `pattern`,
/// sorted by path.
///
/// # Errors
///
/// This function may return an error if:
/// * `pattern` is not a valid glob
/// * The directory cannot be read
pub fn find_scenarios(dir: &Path, pattern: &str, exclude_dirs: &[&str]) -> Result<Vec<PathBuf>> {
    let matcher =
        Pattern::new(pattern).with_context(|| format!("Invalid scenario pattern: {pattern}"))?;
    let mut found = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, exclude_dirs))
    {
        let entry =
            entry.with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| matcher.matches(name))
        {
            found.push(entry.into_path());
        }
    }

    found.sort();
    Ok(found)
}
