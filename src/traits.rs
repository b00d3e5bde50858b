use crate::error::ResolveError;
use crate::options::MatchConfig;

/// Expands a single glob pattern into root-relative file paths.
///
/// This is the seam the resolver delegates all matching and traversal to.
/// The built-in implementation is [`GlobWalker`](crate::engine::GlobWalker);
/// implement this to resolve against anything else (an in-memory tree, a
/// remote listing, a prebuilt index).
///
/// # Contract
///
/// - Return paths relative to [`MatchConfig::root`], in whatever order is
///   natural for the implementation. The resolver neither sorts nor dedups.
/// - Never return directories ([`MatchConfig::exclude_directories`]).
/// - Drop paths matching any of [`MatchConfig::ignore`].
/// - Return `Err` rather than an empty result for a malformed pattern
///   ([`MatchConfig::strict`]).
///
/// # Thread Safety
///
/// `Send + Sync` are required so one resolver can serve concurrent callers.
///
/// # Example
///
/// ```rust
/// use glob_resolver::{GlobMatcher, MatchConfig, ResolveError};
///
/// struct Fixed(Vec<&'static str>);
///
/// impl GlobMatcher for Fixed {
///     fn matches(&self, _pattern: &str, _config: &MatchConfig) -> Result<Vec<String>, ResolveError> {
///         Ok(self.0.iter().map(|p| p.to_string()).collect())
///     }
/// }
/// ```
pub trait GlobMatcher: Send + Sync {
    /// Expand `pattern` under `config.root()`.
    fn matches(&self, pattern: &str, config: &MatchConfig) -> Result<Vec<String>, ResolveError>;
}
