//! Sidebar navigation tree resolution for documentation sites.
//!
//! Takes a tree of [`PageNode`] menu entries plus the current browsing
//! location and resolves, for every node, its link target, whether it is
//! the active page, whether its subtree is expanded, and what visual role
//! it plays (link, divider, external link, cross-link, deprecated marker).
//!
//! # Architecture
//!
//! The core is a pure recursive transform from `(node, context, depth)` to
//! a [`ResolvedNode`] render tree, composed from four leaf pieces:
//!
//! - [`link`]: classifies a raw URL into exactly one [`LinkKind`] and
//!   normalizes same-site absolute URLs to relative form
//! - [`version`]: substitutes the version segment of versioned URLs
//! - [`matcher`]: derives the canonical location slug and decides
//!   active / auto-open state per node
//! - [`expansion`]: per-node manual open/closed overrides, keyed by the
//!   node's stable menu key
//!
//! [`Resolver`] composes all four and recurses over visible children when
//! a node is effectively open. Rendering markup, styling, and actual
//! browser navigation are external: the resolver only produces the
//! [`ResolvedNode`] value tree (serializable for a frontend) and the
//! [`Navigator`] collaborator receives the resolved URL plus a
//! new-context flag when the embedder follows a link.
//!
//! # Example
//!
//! ```
//! use navtree::{ExpansionArena, PageNode, PinnedVersion, ResolveOptions, Resolver};
//!
//! let tree: PageNode = serde_json::from_str(
//!     r#"{
//!         "name": "Guides",
//!         "url": "/guides",
//!         "menu_key": "guides",
//!         "children": [
//!             { "name": "Install", "url": "/guides/install", "menu_key": "install" }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let resolver = Resolver::new(ResolveOptions::default());
//! let arena = ExpansionArena::new();
//! let slug = vec!["guides".to_owned(), "install".to_owned()];
//!
//! let resolved = resolver.resolve_tree(&tree, &slug, &PinnedVersion::none(), &arena, 0);
//! assert!(resolved.open);
//! assert!(resolved.children[0].active);
//! ```

pub mod expansion;
pub mod link;
pub mod matcher;
pub mod page;
pub mod resolver;
pub mod theme;
pub mod version;

pub use expansion::ExpansionArena;
pub use link::{ClassifiedUrl, LinkKind, classify};
pub use matcher::{PathMatch, PathMatcher};
pub use page::PageNode;
pub use resolver::{IconKind, Navigator, NodeKind, ResolveOptions, ResolvedNode, Resolver};
pub use theme::{DepthBucket, ThemeColor};
pub use version::{PinnedVersion, VersionProvider};
