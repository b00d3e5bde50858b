/// Enriched metadata for a single file matched during resolution.
///
/// Carries both the path-parsing view of the matched path (`parent_dir`,
/// `base`, `name`, `ext`) and the path-resolution view (`relative_path`
/// as the matcher returned it, and `full_path` anchored at the root).
///
/// Descriptors are plain values: they hold no handle to the filesystem and
/// nothing about them is cached between calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PathDescriptor {
    parent_dir:    String,
    base:          String,
    name:          String,
    ext:           String,
    relative_path: String,
    full_path:     String,
}

impl PathDescriptor {
    /// Build a descriptor for `relative_path` resolved under `root`.
    ///
    /// `full_path` is `root` with exactly one trailing `/` appended (only if
    /// it does not already end with one) followed by `relative_path`.
    pub fn new(root: &str, relative_path: impl Into<String>) -> Self {
        let relative_path = relative_path.into();
        let parts = parse(&relative_path);

        let mut full_path = String::with_capacity(root.len() + 1 + relative_path.len());
        full_path.push_str(root);
        if !full_path.ends_with('/') {
            full_path.push('/');
        }
        full_path.push_str(&relative_path);

        Self {
            parent_dir: parts.dir,
            base: parts.base,
            name: parts.name,
            ext: parts.ext,
            relative_path,
            full_path,
        }
    }

    /// Directory portion of the relative path, `.` if there is none.
    pub fn parent_dir(&self) -> &str {
        &self.parent_dir
    }

    /// Final path segment, including its extension.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Final path segment without its extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extension including the leading `.`, or empty.
    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// The path exactly as the matcher returned it, relative to the root.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Root (with one trailing separator) joined with the relative path.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }
}

// ---------------------------------------------------------------------------
// Path parsing
// ---------------------------------------------------------------------------

struct ParsedPath {
    dir:  String,
    base: String,
    name: String,
    ext:  String,
}

/// Split a `/`-separated path into directory, base, name and extension.
fn parse(path: &str) -> ParsedPath {
    let trimmed = path.trim_end_matches('/');
    // A path made only of separators is the filesystem root.
    if trimmed.is_empty() && !path.is_empty() {
        return ParsedPath {
            dir:  "/".into(),
            base: String::new(),
            name: String::new(),
            ext:  String::new(),
        };
    }

    let (dir, base) = match trimmed.rfind('/') {
        Some(0)   => ("/", &trimmed[1..]),
        Some(idx) => (&trimmed[..idx], &trimmed[idx + 1..]),
        None      => (".", trimmed),
    };

    let (name, ext) = split_extension(base);

    ParsedPath {
        dir:  dir.to_string(),
        base: base.to_string(),
        name: name.to_string(),
        ext:  ext.to_string(),
    }
}

/// A leading dot marks a hidden file, not an extension; `..` has none either.
fn split_extension(base: &str) -> (&str, &str) {
    if base == ".." {
        return (base, "");
    }
    match base.rfind('.') {
        Some(idx) if idx > 0 => base.split_at(idx),
        _                    => (base, ""),
    }
}
