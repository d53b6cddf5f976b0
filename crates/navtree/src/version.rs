//! Version substitution for versioned documentation URLs.
//!
//! Versioned relative URLs are authored with a placeholder first segment
//! that gets overwritten with the active version token. The provider of
//! the active version is an external collaborator behind
//! [`VersionProvider`]; it is queried once per resolve pass.

/// Supplies the currently active documentation version.
///
/// Implementations must be synchronous and side-effect-free; the
/// resolver queries it exactly once per resolve pass.
pub trait VersionProvider {
    /// The active version token (e.g. `"2.31"`), or `None` when the site
    /// is being browsed unversioned.
    fn current_version(&self) -> Option<String>;
}

/// A fixed version, for tests and embedders without a version switcher.
#[derive(Clone, Debug, Default)]
pub struct PinnedVersion(Option<String>);

impl PinnedVersion {
    /// Pin to a specific version token.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self(Some(version.into()))
    }

    /// No active version: rewriting becomes a no-op.
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }
}

impl VersionProvider for PinnedVersion {
    fn current_version(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Replace the first path segment of a relative URL with `version`.
///
/// `/placeholder/guide` with version `1.5` becomes `/1.5/guide`. The
/// caller guarantees the URL is in relative form (classification strips
/// the origin from cross-links first); URLs without a replaceable first
/// segment (`""`, `"/"`) are passed through unchanged.
#[must_use]
pub fn rewrite(url: &str, version: &str) -> String {
    let trimmed = url.strip_prefix('/').unwrap_or(url);
    if trimmed.is_empty() {
        tracing::warn!(url, "versioned node has no placeholder segment to rewrite");
        return url.to_owned();
    }

    let mut segments: Vec<&str> = trimmed.split('/').collect();
    segments[0] = version;
    format!("/{}", segments.join("/"))
}
