//! URL classification.
//!
//! Classifies a raw menu URL into exactly one [`LinkKind`] via a single
//! ordered match, so mutual exclusivity is an enforced invariant rather
//! than a property of evaluation order. Same-site absolute URLs are
//! normalized to relative form here; everything downstream (path
//! matching, version rewriting) sees only the normalized URL.

use serde::Serialize;

/// The kind of link a menu URL represents.
///
/// Exactly one kind holds for any raw URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkKind {
    /// Empty URL: a non-navigable visual grouping entry.
    Divider,
    /// Starts with `/`: an in-site path used as-is.
    Relative,
    /// Starts with the site's canonical origin: authored as a fully
    /// qualified link back into the same site to disambiguate duplicate
    /// menu entries. Normalized to relative form.
    CrossLink,
    /// Anything else. Navigated in a new browsing context.
    External,
}

/// A classified URL: the kind plus the normalized URL string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedUrl {
    /// Which of the four mutually exclusive kinds holds.
    pub kind: LinkKind,
    /// The URL with the site origin stripped for cross-links; unchanged
    /// otherwise. Empty for dividers.
    pub url: String,
}

/// Classify a raw URL against the site's canonical origin.
///
/// Priority: divider, then same-site absolute, then relative, else
/// external. An empty `site_origin` disables cross-link detection (no
/// URL starting with `/` can ever match an `https://` origin, so the
/// arms stay disjoint either way).
///
/// Re-classifying an already normalized relative URL yields the same
/// relative URL (idempotence).
#[must_use]
pub fn classify(raw: &str, site_origin: &str) -> ClassifiedUrl {
    let (kind, url) = if raw.is_empty() {
        (LinkKind::Divider, String::new())
    } else if !site_origin.is_empty()
        && let Some(rest) = raw.strip_prefix(site_origin)
    {
        (LinkKind::CrossLink, rest.to_owned())
    } else if raw.starts_with('/') {
        (LinkKind::Relative, raw.to_owned())
    } else {
        (LinkKind::External, raw.to_owned())
    };

    ClassifiedUrl { kind, url }
}
