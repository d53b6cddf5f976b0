//! Menu tree input model.
//!
//! [`PageNode`] is the externally authored navigation entry. Trees arrive
//! as JSON menus; every field that can be absent has a serde default, so
//! degenerate input deserializes into the most conservative shape (leaf,
//! divider, visible) instead of failing.

use serde::{Deserialize, Serialize};

/// One entry in the documentation navigation tree.
///
/// Read-only to this crate. An empty `url` designates a divider; the
/// literal name `"---"` designates an unlabeled divider (bare rule).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNode {
    /// Display label. `"---"` is the unlabeled-divider sentinel.
    #[serde(default)]
    pub name: String,
    /// Link target. Empty for dividers; may be relative (`/a/b`),
    /// same-site absolute, or external.
    #[serde(default)]
    pub url: String,
    /// Ordered child entries.
    #[serde(default)]
    pub children: Vec<PageNode>,
    /// Hidden entries are excluded from rendering and from the
    /// expandable-children check.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Stable unique identifier, used as the expansion-state and render
    /// key only.
    #[serde(default)]
    pub menu_key: String,
    /// Whether the URL is subject to version substitution.
    #[serde(default, rename = "isVersioned")]
    pub is_versioned: bool,
    /// Deprecated entries get a deprecation marker instead of their
    /// external/cross-link icon. Navigability is unaffected.
    #[serde(default, rename = "isDeprecated")]
    pub is_deprecated: bool,
}

fn default_visible() -> bool {
    true
}

impl Default for PageNode {
    fn default() -> Self {
        Self {
            name: String::new(),
            url: String::new(),
            children: Vec::new(),
            visible: true,
            menu_key: String::new(),
            is_versioned: false,
            is_deprecated: false,
        }
    }
}

impl PageNode {
    /// Children that should be rendered.
    pub fn visible_children(&self) -> impl Iterator<Item = &PageNode> {
        self.children.iter().filter(|child| child.visible)
    }

    /// True if this node renders an expand/collapse affordance.
    ///
    /// A node whose children are all hidden is treated as a leaf even
    /// though `children` is non-empty.
    #[must_use]
    pub fn has_expandable_children(&self) -> bool {
        !self.children.is_empty() && self.visible_children().next().is_some()
    }
}
