//! Recursive navigation tree resolution.
//!
//! [`Resolver`] walks a [`PageNode`] tree depth-first and produces a
//! [`ResolvedNode`] render tree: per node the resolved URL, active and
//! open flags, icon hint, depth bucket, and the resolved children when
//! the node is effectively open. The walk is a pure transform; the only
//! mutable state is the [`ExpansionArena`], owned by the embedder and
//! only read here.
//!
//! Resolution order per node: classify the raw URL (stripping the site
//! origin from cross-links), match the normalized URL against the
//! current location, then apply version rewriting. Matching sees the
//! origin-stripped but pre-rewrite URL, so cross-links participate in
//! active detection and versioned URLs match by their authored path.

use serde::Serialize;

use crate::expansion::ExpansionArena;
use crate::link::{self, LinkKind};
use crate::matcher::PathMatcher;
use crate::page::PageNode;
use crate::theme::{DepthBucket, ThemeColor};
use crate::version::{self, VersionProvider};

/// Visual role of a resolved node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// Navigable entry.
    Link,
    /// Bare rule, no text (name is the `"---"` sentinel).
    Divider,
    /// Divider with a text label and a rule.
    LabeledDivider,
}

/// Icon hint for a resolved link.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum IconKind {
    #[default]
    None,
    /// Leaves the site; navigated in a new browsing context.
    External,
    /// Same-site absolute link back into the tree.
    CrossLink,
    /// Deprecated entry; takes precedence over the other icons.
    Deprecated,
}

impl IconKind {
    /// Material icon glyph name for the renderer, if any.
    #[must_use]
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::External => Some("open_in_new"),
            Self::CrossLink => Some("link"),
            Self::Deprecated => Some("delete"),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        *self == Self::None
    }
}

/// Performs browser navigation for a resolved link.
///
/// This crate only decides the URL and the new-context flag; the
/// embedder's navigation primitive does the rest.
pub trait Navigator {
    /// Navigate to `url`, in a new browsing context when `new_context`.
    fn navigate(&self, url: &str, new_context: bool);
}

/// One node of the resolved render tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedNode {
    /// Display label.
    pub name: String,
    /// Visual role.
    pub kind: NodeKind,
    /// Final link target after origin stripping and version rewriting.
    /// Empty for dividers.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// The node links exactly to the viewed page.
    pub active: bool,
    /// Effective open state (manual override or auto-open).
    pub open: bool,
    /// Whether an expand/collapse affordance is rendered.
    pub has_toggle: bool,
    /// Icon hint; deprecated wins over external/cross-link.
    #[serde(skip_serializing_if = "IconKind::is_none")]
    pub icon: IconKind,
    /// Navigate in a new browsing context (external links).
    pub open_in_new_context: bool,
    /// Style bucket for the node's depth.
    pub depth_bucket: DepthBucket,
    /// Theme color token, inherited unchanged from the root.
    pub color: ThemeColor,
    /// Stable render/expansion key.
    pub menu_key: String,
    /// Resolved children; empty unless the node is open and has visible
    /// children.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResolvedNode>,
}

impl ResolvedNode {
    /// Accordion glyph for the expand/collapse affordance, if one is
    /// rendered: `"remove"` (collapse) when open, `"add"` (expand) when
    /// closed.
    #[must_use]
    pub fn toggle_glyph(&self) -> Option<&'static str> {
        if self.has_toggle {
            Some(if self.open { "remove" } else { "add" })
        } else {
            None
        }
    }

    /// Follow this node's link through the embedder's navigation
    /// primitive. Dividers are inert.
    pub fn follow(&self, navigator: &dyn Navigator) {
        if self.kind == NodeKind::Link {
            navigator.navigate(&self.url, self.open_in_new_context);
        }
    }
}

/// Static resolution options, fixed per application.
#[derive(Clone, Debug)]
pub struct ResolveOptions {
    /// Canonical documentation origin used for cross-link detection
    /// (e.g. `https://docs.example.com`). Empty disables cross-links.
    pub site_origin: String,
    /// Product-variant token prefix stripped from location slugs.
    pub variant_prefix: String,
    /// Theme color inherited by every resolved node.
    pub color: ThemeColor,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            site_origin: String::new(),
            variant_prefix: "SiS".to_owned(),
            color: ThemeColor::Unset,
        }
    }
}

/// Resolves page trees into render trees.
///
/// Cheap to keep around: the variant pattern is compiled once at
/// construction and reused across render passes.
#[derive(Clone, Debug)]
pub struct Resolver {
    site_origin: String,
    color: ThemeColor,
    matcher: PathMatcher,
}

impl Resolver {
    /// Build a resolver from static options.
    #[must_use]
    pub fn new(options: ResolveOptions) -> Self {
        let matcher = PathMatcher::new(&options.variant_prefix);
        Self {
            site_origin: options.site_origin,
            color: options.color,
            matcher,
        }
    }

    /// Resolve a whole tree for one render pass.
    ///
    /// `slug` is the current browser path pre-split into segments;
    /// `depth` is the starting recursion depth supplied by the embedder.
    /// The version provider is queried exactly once per pass.
    #[must_use]
    pub fn resolve_tree(
        &self,
        root: &PageNode,
        slug: &[String],
        versions: &dyn VersionProvider,
        arena: &ExpansionArena,
        depth: usize,
    ) -> ResolvedNode {
        let version = versions.current_version();
        self.resolve_node(root, slug, version.as_deref(), arena, depth)
    }

    /// Resolve a single node and, when open, its visible children.
    ///
    /// Every level receives the identical `slug`; each invocation
    /// re-derives its own canonical slug from it (version stripping is
    /// once per invocation, never cumulative).
    fn resolve_node(
        &self,
        node: &PageNode,
        slug: &[String],
        version: Option<&str>,
        arena: &ExpansionArena,
        depth: usize,
    ) -> ResolvedNode {
        let classified = link::classify(&node.url, &self.site_origin);
        let link_kind = classified.kind;

        // Match against the origin-stripped, pre-rewrite URL.
        let m = self.matcher.match_node(slug, &classified.url);
        let has_toggle = node.has_expandable_children();
        let open = arena.effective(&node.menu_key, m.auto_open);

        let url = match (link_kind, version) {
            (LinkKind::Relative | LinkKind::CrossLink, Some(v)) if node.is_versioned => {
                version::rewrite(&classified.url, v)
            }
            _ => classified.url,
        };

        let kind = match link_kind {
            LinkKind::Divider if node.name == "---" => NodeKind::Divider,
            LinkKind::Divider => NodeKind::LabeledDivider,
            _ => NodeKind::Link,
        };

        let icon = if kind == NodeKind::Link {
            if node.is_deprecated {
                IconKind::Deprecated
            } else {
                match link_kind {
                    LinkKind::External => IconKind::External,
                    LinkKind::CrossLink => IconKind::CrossLink,
                    _ => IconKind::None,
                }
            }
        } else {
            IconKind::None
        };

        let children = if has_toggle && open {
            node.visible_children()
                .map(|child| self.resolve_node(child, slug, version, arena, depth + 1))
                .collect()
        } else {
            Vec::new()
        };

        ResolvedNode {
            name: node.name.clone(),
            kind,
            url,
            active: m.active,
            open,
            has_toggle,
            icon,
            open_in_new_context: link_kind == LinkKind::External,
            depth_bucket: DepthBucket::from_depth(depth),
            color: self.color,
            menu_key: node.menu_key.clone(),
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::version::PinnedVersion;

    use super::*;

    static_assertions::assert_impl_all!(Resolver: Send, Sync);

    const ORIGIN: &str = "https://docs.example.com";

    fn options() -> ResolveOptions {
        ResolveOptions {
            site_origin: ORIGIN.to_owned(),
            color: ThemeColor::Red,
            ..ResolveOptions::default()
        }
    }

    fn leaf(name: &str, url: &str, key: &str) -> PageNode {
        PageNode {
            name: name.to_owned(),
            url: url.to_owned(),
            menu_key: key.to_owned(),
            ..PageNode::default()
        }
    }

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| (*s).to_owned()).collect()
    }

    fn sample_tree() -> PageNode {
        PageNode {
            name: "API".to_owned(),
            url: "/api".to_owned(),
            menu_key: "api".to_owned(),
            children: vec![
                leaf("Text", "/api/text", "api-text"),
                leaf("Data", "/api/data", "api-data"),
            ],
            ..PageNode::default()
        }
    }

    fn resolve(tree: &PageNode, slug: &[String]) -> ResolvedNode {
        let resolver = Resolver::new(options());
        resolver.resolve_tree(tree, slug, &PinnedVersion::none(), &ExpansionArena::new(), 0)
    }

    #[test]
    fn test_active_path_marks_leaf_and_opens_ancestor() {
        let resolved = resolve(&sample_tree(), &segments(&["api", "text"]));

        assert!(!resolved.active);
        assert!(resolved.open);
        assert_eq!(resolved.children.len(), 2);
        assert!(resolved.children[0].active);
        assert!(!resolved.children[1].active);
    }

    #[test]
    fn test_version_prefixed_slug_still_matches() {
        let resolved = resolve(&sample_tree(), &segments(&["2.31", "api", "text"]));

        assert!(resolved.open);
        assert!(resolved.children[0].active);
    }

    #[test]
    fn test_unrelated_location_stays_closed() {
        let resolved = resolve(&sample_tree(), &segments(&["tutorials"]));

        assert!(!resolved.open);
        assert!(!resolved.active);
        assert!(resolved.children.is_empty());
    }

    #[test]
    fn test_closed_node_does_not_resolve_children() {
        // Children of a closed node are not present in the render tree;
        // the recursion is gated on the effective open state.
        let mut tree = sample_tree();
        tree.children[0].children = vec![leaf("Deep", "/api/text/deep", "deep")];

        let resolved = resolve(&tree, &segments(&["api", "data"]));

        assert!(resolved.open);
        let text = &resolved.children[0];
        assert!(text.has_toggle);
        assert!(!text.open);
        assert!(text.children.is_empty());
    }

    #[test]
    fn test_hidden_children_never_toggle() {
        let mut tree = leaf("Parent", "/parent", "parent");
        tree.children = vec![PageNode {
            visible: false,
            ..leaf("Hidden", "/parent/hidden", "hidden")
        }];

        let resolved = resolve(&tree, &segments(&["parent"]));

        assert!(!resolved.has_toggle);
        assert!(resolved.children.is_empty());
        assert_eq!(resolved.toggle_glyph(), None);
    }

    #[test]
    fn test_hidden_sibling_is_skipped_in_recursion() {
        let mut tree = sample_tree();
        tree.children[1].visible = false;

        let resolved = resolve(&tree, &segments(&["api"]));

        assert!(resolved.has_toggle);
        assert_eq!(resolved.children.len(), 1);
        assert_eq!(resolved.children[0].name, "Text");
    }

    #[test]
    fn test_toggle_closes_auto_opened_subtree() {
        let resolver = Resolver::new(options());
        let tree = sample_tree();
        let slug = segments(&["api", "text"]);
        let mut arena = ExpansionArena::new();

        let first = resolver.resolve_tree(&tree, &slug, &PinnedVersion::none(), &arena, 0);
        assert!(first.open);

        arena.toggle(&first.menu_key, first.open);
        let second = resolver.resolve_tree(&tree, &slug, &PinnedVersion::none(), &arena, 0);

        assert!(!second.open);
        assert!(second.children.is_empty());
        assert_eq!(second.toggle_glyph(), Some("add"));
    }

    #[test]
    fn test_version_rewrite_applies_to_versioned_relative() {
        let resolver = Resolver::new(options());
        let node = PageNode {
            is_versioned: true,
            ..leaf("Guide", "/placeholder/guide", "guide")
        };

        let resolved = resolver.resolve_tree(
            &node,
            &[],
            &PinnedVersion::new("1.5"),
            &ExpansionArena::new(),
            0,
        );

        assert_eq!(resolved.url, "/1.5/guide");
    }

    #[test]
    fn test_version_rewrite_skipped_without_version() {
        let resolver = Resolver::new(options());
        let node = PageNode {
            is_versioned: true,
            ..leaf("Guide", "/placeholder/guide", "guide")
        };

        let resolved =
            resolver.resolve_tree(&node, &[], &PinnedVersion::none(), &ExpansionArena::new(), 0);

        assert_eq!(resolved.url, "/placeholder/guide");
    }

    #[test]
    fn test_version_rewrite_skipped_for_unversioned_node() {
        let resolver = Resolver::new(options());
        let node = leaf("Guide", "/placeholder/guide", "guide");

        let resolved = resolver.resolve_tree(
            &node,
            &[],
            &PinnedVersion::new("1.5"),
            &ExpansionArena::new(),
            0,
        );

        assert_eq!(resolved.url, "/placeholder/guide");
    }

    #[test]
    fn test_version_rewrite_never_touches_external() {
        let resolver = Resolver::new(options());
        let node = PageNode {
            is_versioned: true,
            ..leaf("Forum", "https://forum.example.com/t/1", "forum")
        };

        let resolved = resolver.resolve_tree(
            &node,
            &[],
            &PinnedVersion::new("1.5"),
            &ExpansionArena::new(),
            0,
        );

        assert_eq!(resolved.url, "https://forum.example.com/t/1");
    }

    #[test]
    fn test_cross_link_is_stripped_versioned_and_matchable() {
        let resolver = Resolver::new(options());
        let node = PageNode {
            is_versioned: true,
            ..leaf("Charts", "https://docs.example.com/stable/charts", "charts")
        };

        let resolved = resolver.resolve_tree(
            &node,
            &segments(&["stable", "charts"]),
            &PinnedVersion::new("2.0"),
            &ExpansionArena::new(),
            0,
        );

        assert_eq!(resolved.url, "/2.0/charts");
        assert_eq!(resolved.icon, IconKind::CrossLink);
        // Active detection ran against the stripped, pre-rewrite URL.
        assert!(resolved.active);
    }

    #[test]
    fn test_deprecated_wins_over_external_icon() {
        let node = PageNode {
            is_deprecated: true,
            ..leaf("Legacy", "https://legacy.example.net/docs", "legacy")
        };

        let resolved = resolve(&node, &[]);

        assert_eq!(resolved.icon, IconKind::Deprecated);
        assert_eq!(resolved.icon.glyph(), Some("delete"));
        // Navigability is unaffected by deprecation.
        assert!(resolved.open_in_new_context);
        assert_eq!(resolved.url, "https://legacy.example.net/docs");
    }

    #[test]
    fn test_deprecated_wins_over_cross_link_icon() {
        let node = PageNode {
            is_deprecated: true,
            ..leaf("Old", "https://docs.example.com/old", "old")
        };

        let resolved = resolve(&node, &[]);

        assert_eq!(resolved.icon, IconKind::Deprecated);
        assert!(!resolved.open_in_new_context);
    }

    #[test]
    fn test_bare_divider_kind() {
        let divider = leaf("---", "", "div-1");

        let resolved = resolve(&divider, &segments(&["api"]));

        assert_eq!(resolved.kind, NodeKind::Divider);
        assert_eq!(resolved.icon, IconKind::None);
        assert!(!resolved.active);
    }

    #[test]
    fn test_labeled_divider_kind() {
        let divider = leaf("Deploy", "", "div-2");

        let resolved = resolve(&divider, &segments(&["api"]));

        assert_eq!(resolved.kind, NodeKind::LabeledDivider);
        assert_eq!(resolved.name, "Deploy");
    }

    #[test]
    fn test_divider_with_children_defaults_open() {
        let mut divider = leaf("Deploy", "", "div-3");
        divider.children = vec![leaf("Cloud", "/deploy/cloud", "cloud")];

        let resolved = resolve(&divider, &segments(&["api"]));

        assert!(resolved.open);
        assert_eq!(resolved.children.len(), 1);
    }

    #[test]
    fn test_depth_buckets_follow_recursion() {
        let mut tree = sample_tree();
        tree.children[0].children = vec![leaf("Deep", "/api/text/deep", "deep")];

        let resolved = resolve(&tree, &segments(&["api", "text", "deep"]));

        assert_eq!(resolved.depth_bucket, DepthBucket::Zero);
        assert_eq!(resolved.children[0].depth_bucket, DepthBucket::One);
        assert_eq!(resolved.children[0].children[0].depth_bucket, DepthBucket::Deep);
    }

    #[test]
    fn test_color_inherited_by_all_descendants() {
        let resolved = resolve(&sample_tree(), &segments(&["api"]));

        assert_eq!(resolved.color, ThemeColor::Red);
        assert!(resolved.children.iter().all(|c| c.color == ThemeColor::Red));
    }

    #[test]
    fn test_open_toggle_glyph_is_collapse() {
        let resolved = resolve(&sample_tree(), &segments(&["api"]));

        assert_eq!(resolved.toggle_glyph(), Some("remove"));
    }

    struct RecordingNavigator {
        calls: RefCell<Vec<(String, bool)>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, url: &str, new_context: bool) {
            self.calls.borrow_mut().push((url.to_owned(), new_context));
        }
    }

    #[test]
    fn test_follow_link_invokes_navigator() {
        let navigator = RecordingNavigator {
            calls: RefCell::new(Vec::new()),
        };
        let resolved = resolve(&leaf("Forum", "https://forum.example.com", "forum"), &[]);

        resolved.follow(&navigator);

        assert_eq!(
            navigator.calls.into_inner(),
            vec![("https://forum.example.com".to_owned(), true)]
        );
    }

    #[test]
    fn test_follow_divider_is_inert() {
        let navigator = RecordingNavigator {
            calls: RefCell::new(Vec::new()),
        };
        let resolved = resolve(&leaf("---", "", "div"), &[]);

        resolved.follow(&navigator);

        assert!(navigator.calls.into_inner().is_empty());
    }

    #[test]
    fn test_serialization_contract() {
        let resolved = resolve(&sample_tree(), &segments(&["api", "text"]));

        let json = serde_json::to_value(&resolved).unwrap();

        assert_eq!(json["kind"], "link");
        assert_eq!(json["url"], "/api");
        assert_eq!(json["hasToggle"], true);
        assert_eq!(json["depthBucket"], "zero");
        assert_eq!(json["menuKey"], "api");
        assert_eq!(json["openInNewContext"], false);
        assert!(json.get("icon").is_none()); // Skipped when none
        assert_eq!(json["children"][0]["active"], true);
        assert!(json["children"][0].get("children").is_none()); // Skipped when empty
    }

    #[test]
    fn test_serialization_divider_skips_url() {
        let resolved = resolve(&leaf("---", "", "div"), &[]);

        let json = serde_json::to_value(&resolved).unwrap();

        assert_eq!(json["kind"], "divider");
        assert!(json.get("url").is_none()); // Skipped when empty
    }

    #[test]
    fn test_degenerate_node_resolves_to_inert_divider() {
        // A node with every field missing degrades to a leaf divider.
        let node: PageNode = serde_json::from_str("{}").unwrap();

        let resolved = resolve(&node, &segments(&["api"]));

        assert_eq!(resolved.kind, NodeKind::LabeledDivider);
        assert!(!resolved.has_toggle);
        assert!(!resolved.active);
    }
}
