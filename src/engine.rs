use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, WalkBuilder};

use crate::error::ResolveError;
use crate::options::MatchConfig;
use crate::traits::GlobMatcher;

/// Characters that make a pattern segment non-literal.
const GLOB_META: &[char] = &['*', '?', '[', ']', '{', '}', '\\'];

// ---------------------------------------------------------------------------
// GlobWalker
// ---------------------------------------------------------------------------

/// The built-in [`GlobMatcher`]: walks the filesystem under the root and
/// keeps files whose root-relative path matches the pattern.
///
/// - `*` and `?` never cross `/`; `**` spans any number of directories.
/// - A leading `/` or `./` on the pattern is dropped, so `/src/*.rs` is
///   matched relative to the root rather than the filesystem root.
/// - Only the pattern's literal directory prefix is walked; if that prefix
///   does not exist the pattern simply has no matches. Case-insensitive
///   matching walks the whole root instead.
/// - Unless `dot` is set, a segment starting with `.` only matches a pattern
///   segment that also starts with `.`.
/// - Results come back in walk order, siblings sorted by file name.
/// - Any traversal error aborts the match.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobWalker;

impl GlobMatcher for GlobWalker {
    fn matches(&self, pattern: &str, config: &MatchConfig) -> Result<Vec<String>, ResolveError> {
        let root = config.root_path();
        check_root(&root)?;

        let pattern = normalize(pattern);
        let glob = compile(&pattern, config)?;
        let ignore = compile_set(config.ignore(), config)?;
        let pattern_segments: Vec<&str> = pattern.split('/').collect();

        // A case-folded prefix may not name the directory as it is on disk.
        let prefix = if config.case_insensitive() {
            Vec::new()
        } else {
            literal_prefix(&pattern)
        };
        let start = prefix.iter().fold(root.clone(), |dir, seg| dir.join(seg));
        if !start.is_dir() {
            tracing::trace!(pattern = %pattern, start = %start.display(), "literal prefix missing");
            return Ok(Vec::new());
        }

        let mut builder = WalkBuilder::new(&start);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(config.follow_links())
            .same_file_system(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        // Depth is measured from the root, the walk starts below the prefix.
        if let Some(depth) = config.max_depth() {
            match depth.checked_sub(prefix.len()) {
                Some(remaining) => {
                    builder.max_depth(Some(remaining));
                }
                None => return Ok(Vec::new()),
            }
        }

        let mut out = Vec::new();
        for res in builder.build() {
            let entry = res.map_err(map_ignore_error)?;

            // The walk start is the prefix directory, never a candidate
            if entry.depth() == 0 || is_directory(&entry) {
                continue;
            }

            let rel = match entry.path().strip_prefix(&start) {
                Ok(rel) => relative_string(&prefix, rel),
                Err(_)  => continue,
            };

            if !config.dot() && !hidden_segments_named(&pattern_segments, &rel) {
                continue;
            }
            if !glob.is_match(&rel) || ignore.is_match(&rel) {
                continue;
            }

            tracing::trace!(path = %rel, "matched");
            out.push(rel);
        }

        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Pattern helpers
// ---------------------------------------------------------------------------

/// Strip leading `/` and `./` so the pattern is root-relative.
fn normalize(pattern: &str) -> String {
    let mut p = pattern;
    loop {
        if let Some(rest) = p.strip_prefix("./") {
            p = rest;
        } else if let Some(rest) = p.strip_prefix('/') {
            p = rest;
        } else {
            break;
        }
    }
    p.to_string()
}

/// Leading directory segments that contain no glob syntax.
///
/// The final segment is never part of the prefix, even when literal.
fn literal_prefix(pattern: &str) -> Vec<String> {
    let segments: Vec<&str> = pattern.split('/').collect();
    let dirs = &segments[..segments.len().saturating_sub(1)];
    dirs.iter()
        .take_while(|seg| !seg.is_empty() && !seg.contains(GLOB_META))
        .map(|seg| seg.to_string())
        .collect()
}

fn is_hidden(seg: &str) -> bool {
    seg.starts_with('.') && seg != "." && seg != ".."
}

/// Every hidden segment of `rel` must line up with a pattern segment that
/// itself starts with `.`; wildcards and `**` never match a leading dot.
///
/// Segments before the first `**` align from the front, segments after it
/// from the back. Anything swallowed by `**` has no pattern segment.
fn hidden_segments_named(pattern: &[&str], rel: &str) -> bool {
    let rel: Vec<&str> = rel.split('/').collect();
    let globstar = pattern.iter().position(|seg| *seg == "**");

    rel.iter().enumerate().filter(|(_, seg)| is_hidden(seg)).all(|(i, _)| {
        let counterpart = match globstar {
            Some(star) if i >= star => {
                let from_end = rel.len() - i;
                let tail = pattern.len() - star - 1;
                if from_end <= tail {
                    pattern.get(pattern.len() - from_end)
                } else {
                    None
                }
            }
            _ => pattern.get(i),
        };
        counterpart.is_some_and(|seg| seg.starts_with('.'))
    })
}

fn compile(pattern: &str, config: &MatchConfig) -> Result<globset::GlobMatcher, ResolveError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .case_insensitive(config.case_insensitive())
        .build()
        .map(|g| g.compile_matcher())
        .map_err(|source| ResolveError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn compile_set(patterns: &[String], config: &MatchConfig) -> Result<GlobSet, ResolveError> {
    let mut builder = GlobSetBuilder::new();
    for raw in patterns {
        let pattern = normalize(raw);
        let glob = GlobBuilder::new(&pattern)
            .literal_separator(true)
            .case_insensitive(config.case_insensitive())
            .build()
            .map_err(|source| ResolveError::InvalidPattern {
                pattern: raw.clone(),
                source,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ResolveError::InvalidPattern {
        pattern: patterns.join(", "),
        source,
    })
}

// ---------------------------------------------------------------------------
// Walk helpers
// ---------------------------------------------------------------------------

fn check_root(root: &Path) -> Result<(), ResolveError> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ResolveError::InvalidRoot(root.to_path_buf())),
        Err(e) => Err(map_io_error(root.to_path_buf(), e)),
    }
}

/// Directories (and unfollowed symlinks pointing at them) are never results.
fn is_directory(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_dir() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_dir(),
        Some(_) => false,
        None => true,
    }
}

/// Join the literal prefix and the walked remainder with `/`.
fn relative_string(prefix: &[String], rel: &Path) -> String {
    let tail = rel.to_string_lossy().replace('\\', "/");
    if prefix.is_empty() {
        tail
    } else {
        format!("{}/{}", prefix.join("/"), tail)
    }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to ResolveError
// ---------------------------------------------------------------------------

fn map_io_error(path: PathBuf, e: std::io::Error) -> ResolveError {
    match e.kind() {
        std::io::ErrorKind::NotFound         => ResolveError::RootNotFound(path),
        std::io::ErrorKind::PermissionDenied => ResolveError::PermissionDenied(path),
        _ => ResolveError::Io { path, source: e },
    }
}

fn map_ignore_error(e: ignore::Error) -> ResolveError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => {
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    ResolveError::PermissionDenied(path)
                } else {
                    ResolveError::Io { path, source: io_err }
                }
            }
            other => ResolveError::Matcher(other.to_string()),
        },
        ignore::Error::WithDepth { err, .. } => map_ignore_error(*err),
        ignore::Error::Loop { child, .. } => ResolveError::SymlinkLoop(child),
        ignore::Error::Io(io_err) => ResolveError::Io {
            path: PathBuf::new(),
            source: io_err,
        },
        other => ResolveError::Matcher(other.to_string()),
    }
}
