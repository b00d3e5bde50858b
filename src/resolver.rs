use crate::descriptor::PathDescriptor;
use crate::engine::GlobWalker;
use crate::error::ResolveError;
use crate::options::{MatchConfig, ResolveOptions};
use crate::patterns::Patterns;
use crate::traits::GlobMatcher;

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Turns glob patterns into [`PathDescriptor`]s using a [`GlobMatcher`].
///
/// `Resolver::default()` uses the filesystem [`GlobWalker`]. Supply your own
/// matcher with [`Resolver::with_matcher`].
///
/// A resolver holds no per-call state; one instance can be shared and called
/// from several threads at once.
///
/// # Example
///
/// ```rust,ignore
/// let resolver = Resolver::default();
/// let files = resolver.resolve(["src/**/*.rs", "tests/*.rs"], &ResolveOptions::new().root("."))?;
/// ```
pub struct Resolver {
    matcher: Box<dyn GlobMatcher>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            matcher: Box::new(GlobWalker),
        }
    }
}

impl Resolver {
    /// Create a resolver backed by the filesystem [`GlobWalker`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver that delegates matching to `m`.
    pub fn with_matcher(m: impl GlobMatcher + 'static) -> Self {
        Self {
            matcher: Box::new(m),
        }
    }

    /// Resolve `patterns` into descriptors.
    ///
    /// Patterns are expanded in order; each pattern's results keep the
    /// matcher's order and are appended as-is. Files matched by more than
    /// one pattern appear once per pattern.
    ///
    /// # Errors
    ///
    /// The first error from the matcher (malformed pattern, missing root,
    /// unreadable directory) aborts the whole call. No partial results are
    /// returned.
    pub fn resolve(
        &self,
        patterns: impl Into<Patterns>,
        options: &ResolveOptions,
    ) -> Result<Vec<PathDescriptor>, ResolveError> {
        let patterns = patterns.into();
        let config = MatchConfig::merge(options)?;

        let mut relative = Vec::new();
        for pattern in patterns.iter() {
            let found = self.matcher.matches(pattern, &config)?;
            tracing::debug!(pattern, matches = found.len(), "resolved pattern");
            relative.extend(found);
        }

        Ok(relative
            .into_iter()
            .map(|rel| PathDescriptor::new(config.root(), rel))
            .collect())
    }
}
