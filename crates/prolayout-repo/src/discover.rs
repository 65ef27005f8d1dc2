use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use prolayout_domain::UnitInput;
use prolayout_settings::DiscoveryConfig;
use prolayout_types::RepoPath;
use std::collections::BTreeMap;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Discover compilation units below `repo_root`.
///
/// Behavior:
/// - every directory is a unit (the root included)
/// - hidden entries and entries matching an exclude glob are pruned with their subtrees
/// - a unit declares the base names of its own files whose extension is listed
/// - unit paths are `module/<dir>` (`module` alone for the root)
/// - output is sorted by directory path
pub fn discover_units(
    repo_root: &Utf8Path,
    module: &str,
    discovery: &DiscoveryConfig,
) -> anyhow::Result<Vec<UnitInput>> {
    let exclude = build_globset(&discovery.exclude).context("compile exclude globset")?;

    let mut dirs: BTreeMap<RepoPath, Vec<String>> = BTreeMap::new();

    let walker = WalkDir::new(repo_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !(is_hidden(e) || is_excluded(&exclude, repo_root, e)));

    for entry in walker {
        let entry = entry.with_context(|| format!("walk {}", repo_root))?;
        let Some(abs) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 path");
            continue;
        };

        if entry.file_type().is_dir() {
            dirs.entry(relative(repo_root, &abs)).or_default();
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(stem) = source_stem(&abs, &discovery.extensions) else {
            continue;
        };
        let parent = abs
            .parent()
            .map(|p| relative(repo_root, p))
            .unwrap_or_default();
        if let Some(files) = dirs.get_mut(&parent) {
            files.push(stem);
        }
    }

    let units = dirs
        .into_iter()
        .map(|(rel, mut files)| {
            files.sort();
            let path = unit_path(module, &rel);
            tracing::debug!(unit = %path, files = files.len(), "discovered unit");
            UnitInput { path, files }
        })
        .collect();

    Ok(units)
}

/// Fully-qualified unit path for a repo-relative directory.
pub fn unit_path(module: &str, rel: &RepoPath) -> String {
    match (module.is_empty(), rel.is_root()) {
        (_, true) => module.to_string(),
        (true, false) => rel.as_str().to_string(),
        (false, false) => format!("{module}/{}", rel.as_str()),
    }
}

fn source_stem(path: &Utf8Path, extensions: &[String]) -> Option<String> {
    let ext = path.extension()?;
    if !extensions.iter().any(|e| e == ext) {
        return None;
    }
    path.file_stem().map(|s| s.to_string())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}

fn is_excluded(set: &GlobSet, repo_root: &Utf8Path, entry: &DirEntry) -> bool {
    match Utf8Path::from_path(entry.path()) {
        Some(abs) => set.is_match(relative(repo_root, abs).as_str()),
        None => false,
    }
}

fn relative(repo_root: &Utf8Path, abs: &Utf8Path) -> RepoPath {
    RepoPath::new(abs.strip_prefix(repo_root).unwrap_or(abs).as_str())
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p)?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
