//! Location slug derivation and active / auto-open detection.
//!
//! The embedder splits the current browser path into slug segments once
//! per render pass. The first segment may be a version token (`2.31`) or
//! a product-variant token (`SiS`, `SiS1.2`) that must not appear in the
//! canonical path; it is stripped once per invocation. Every node then
//! compares its own normalized URL against the same canonical slug.

use std::sync::LazyLock;

use regex::Regex;

/// One or more digits/dots, e.g. `2.31`.
static VERSION_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\d.]+$").unwrap());

/// Result of matching a node URL against the current location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathMatch {
    /// Canonical slug of the current location: `/` + segments joined by
    /// `/`, after version/variant stripping. `/` when no segments remain.
    pub slug: String,
    /// The node links exactly to the viewed page.
    pub active: bool,
    /// The viewed page lives at or underneath the node's URL, so the
    /// node's subtree expands by default.
    pub auto_open: bool,
}

/// Derives canonical slugs and decides active / auto-open state.
///
/// Compiled once from the variant prefix; reused across render passes.
#[derive(Clone, Debug)]
pub struct PathMatcher {
    variant_re: Regex,
}

impl PathMatcher {
    /// Build a matcher for the given product-variant prefix (e.g.
    /// `SiS`, matching `SiS`, `SiS1`, `SiS1.2`).
    #[must_use]
    pub fn new(variant_prefix: &str) -> Self {
        let pattern = format!(r"^{}[\d.]*$", regex::escape(variant_prefix));
        // The escaped prefix cannot produce an invalid pattern.
        let variant_re = Regex::new(&pattern).expect("escaped variant prefix pattern");
        Self { variant_re }
    }

    /// Canonical slug for the given location segments.
    ///
    /// Strips one leading version/variant token if present. A segment
    /// that merely looks version-ish but matches neither pattern is kept
    /// as a literal path segment.
    #[must_use]
    pub fn canonical_slug(&self, segments: &[String]) -> String {
        let rest = match segments.first() {
            Some(first) if VERSION_TOKEN_RE.is_match(first) || self.variant_re.is_match(first) => {
                &segments[1..]
            }
            _ => segments,
        };
        format!("/{}", rest.join("/"))
    }

    /// Match a node's normalized URL against the current location.
    ///
    /// `active` is exact string equality, case-sensitive, without
    /// trailing-slash normalization. `auto_open` is a plain string
    /// prefix check (`/ap` would auto-open `/api/text`; `/apix` would
    /// not), and an empty node URL is a prefix of everything, so a
    /// divider with children defaults to open.
    #[must_use]
    pub fn match_node(&self, segments: &[String], node_url: &str) -> PathMatch {
        let slug = self.canonical_slug(segments);
        let active = slug == node_url;
        let auto_open = slug.starts_with(node_url);
        PathMatch {
            slug,
            active,
            auto_open,
        }
    }
}

impl Default for PathMatcher {
    fn default() -> Self {
        Self::new("SiS")
    }
}
