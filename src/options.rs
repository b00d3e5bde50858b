use std::path::PathBuf;

use crate::error::ResolveError;

// ---------------------------------------------------------------------------
// ResolveOptions
// ---------------------------------------------------------------------------

/// Caller-supplied options for a resolution.
///
/// Configure with chained builder methods. The same value can be reused
/// across calls: resolution reads it and never writes back into it.
///
/// # Example
///
/// ```rust
/// use glob_resolver::ResolveOptions;
///
/// let opts = ResolveOptions::new()
///     .root("./fixtures")
///     .ignore("vendor/**")
///     .case_insensitive(true);
///
/// assert_eq!(opts.root_dir(), Some("./fixtures"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    root:             Option<String>,
    ignore:           Vec<String>,
    case_insensitive: bool,
    dot:              bool,
    follow_links:     bool,
    max_depth:        Option<usize>,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Root ──────────────────────────────────────────────────────────────

    /// Directory patterns are matched against and `full_path` is built from.
    ///
    /// Defaults to the process working directory, read once per call. An
    /// empty string counts as unset.
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    // ── Ignore ────────────────────────────────────────────────────────────

    /// Exclude files whose root-relative path matches `pattern`.
    ///
    /// May be called repeatedly; every pattern applies.
    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore.push(pattern.into());
        self
    }

    /// Add several ignore patterns at once.
    pub fn ignores<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(patterns.into_iter().map(Into::into));
        self
    }

    // ── Passthrough ───────────────────────────────────────────────────────

    /// Match patterns case-insensitively. Off by default.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Let wildcards match segments starting with `.`. Off by default.
    pub fn dot(mut self, yes: bool) -> Self {
        self.dot = yes;
        self
    }

    /// Follow symbolic links while walking. Off by default.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// Maximum walk depth below the root. Unlimited by default.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn root_dir(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore
    }
}

// ---------------------------------------------------------------------------
// MatchConfig
// ---------------------------------------------------------------------------

/// The merged configuration handed to a [`GlobMatcher`](crate::GlobMatcher).
///
/// Produced fresh for every call from the caller's [`ResolveOptions`].
/// Directories are always excluded and malformed patterns always raise;
/// neither can be switched off.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    root:             String,
    ignore:           Vec<String>,
    case_insensitive: bool,
    dot:              bool,
    follow_links:     bool,
    max_depth:        Option<usize>,
}

impl MatchConfig {
    /// Merge `options` over the defaults, resolving the root.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::CurrentDir`] when no root was given and the
    /// working directory cannot be read.
    pub fn merge(options: &ResolveOptions) -> Result<Self, ResolveError> {
        let root = match &options.root {
            Some(root) if !root.is_empty() => root.clone(),
            _ => std::env::current_dir()
                .map_err(ResolveError::CurrentDir)?
                .to_string_lossy()
                .into_owned(),
        };

        let config = Self {
            root,
            ignore:           options.ignore.clone(),
            case_insensitive: options.case_insensitive,
            dot:              options.dot,
            follow_links:     options.follow_links,
            max_depth:        options.max_depth,
        };

        tracing::debug!(
            root = %config.root,
            ignore = ?config.ignore,
            case_insensitive = config.case_insensitive,
            dot = config.dot,
            "merged resolve options"
        );

        Ok(config)
    }

    /// The resolved root, exactly as given (or the working directory).
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }

    pub fn ignore(&self) -> &[String] {
        &self.ignore
    }

    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn dot(&self) -> bool {
        self.dot
    }

    pub fn follow_links(&self) -> bool {
        self.follow_links
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Always `true`: matchers must never return directories.
    pub fn exclude_directories(&self) -> bool {
        true
    }

    /// Always `true`: matchers must raise on malformed patterns.
    pub fn strict(&self) -> bool {
        true
    }
}
