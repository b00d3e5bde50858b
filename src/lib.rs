//! # glob-resolver
//!
//! Resolve one or more glob patterns under a root directory into a flat list
//! of [`PathDescriptor`]s.
//!
//! Each descriptor carries the parsed shape of the matched path (parent
//! directory, base name, name, extension) alongside the path relative to the
//! root and the path joined onto the root. Matching and traversal are
//! delegated to a [`GlobMatcher`]; the built-in one is
//! [`engine::GlobWalker`], which walks the real filesystem.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use glob_resolver::ResolveOptions;
//!
//! let files = glob_resolver::resolve(
//!     ["src/**/*.rs", "tests/*.rs"],
//!     &ResolveOptions::new().root(".").ignore("src/generated/**"),
//! )?;
//!
//! for file in &files {
//!     println!("{} ({}) -> {}", file.name(), file.ext(), file.full_path());
//! }
//! # Ok::<(), glob_resolver::ResolveError>(())
//! ```
//!
//! # Custom Matchers
//!
//! Implement [`GlobMatcher`] to resolve against something other than the
//! local filesystem:
//!
//! ```rust
//! use glob_resolver::{GlobMatcher, MatchConfig, ResolveError, ResolveOptions, Resolver};
//!
//! struct Listing(Vec<&'static str>);
//!
//! impl GlobMatcher for Listing {
//!     fn matches(&self, pattern: &str, _config: &MatchConfig) -> Result<Vec<String>, ResolveError> {
//!         let ext = pattern.trim_start_matches("*");
//!         Ok(self.0.iter().filter(|p| p.ends_with(ext)).map(|p| p.to_string()).collect())
//!     }
//! }
//!
//! let resolver = Resolver::with_matcher(Listing(vec!["lib/a.js", "lib/b.js", "README.md"]));
//! let files = resolver.resolve("*.js", &ResolveOptions::new().root("/srv/app")).unwrap();
//!
//! assert_eq!(files.len(), 2);
//! assert_eq!(files[0].parent_dir(), "lib");
//! assert_eq!(files[0].full_path(), "/srv/app/lib/a.js");
//! ```

#![forbid(unsafe_code)]

pub mod engine;

mod descriptor;
mod error;
mod options;
mod patterns;
mod resolver;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use descriptor::PathDescriptor;
pub use error::ResolveError;
pub use options::{MatchConfig, ResolveOptions};
pub use patterns::Patterns;
pub use resolver::Resolver;
pub use traits::GlobMatcher;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Resolve `patterns` against the filesystem using [`engine::GlobWalker`].
///
/// `patterns` may be a single pattern or a sequence of them. Results follow
/// pattern order and are not sorted or deduplicated. When `options` has no
/// root, the current working directory is used.
///
/// # Errors
///
/// Fails on the first malformed pattern, a missing or non-directory root, or
/// a directory that cannot be read.
///
/// # Example
///
/// ```rust,no_run
/// use glob_resolver::ResolveOptions;
///
/// let files = glob_resolver::resolve("/some-dir/*.js", &ResolveOptions::new().root("./test"))?;
/// assert!(files.iter().all(|f| f.full_path().starts_with("./test/")));
/// # Ok::<(), glob_resolver::ResolveError>(())
/// ```
pub fn resolve(
    patterns: impl Into<Patterns>,
    options: &ResolveOptions,
) -> Result<Vec<PathDescriptor>, ResolveError> {
    Resolver::default().resolve(patterns, options)
}
