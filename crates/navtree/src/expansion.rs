//! Per-node manual expansion overrides.
//!
//! Open/closed state combines an auto-computed default (does the viewed
//! page live under this node?) with an optional user override. Overrides
//! live in an arena keyed by the node's stable `menu_key`, owned by the
//! embedding render loop; the resolver only reads it.

use std::collections::HashMap;

/// Manual open/closed overrides, keyed by `menu_key`.
///
/// A key with no entry is "unset": the node follows its auto-open
/// default. Toggling stores the negation of whatever is currently
/// displayed, so a single toggle always flips the rendered state
/// regardless of whether it came from auto-detection or a prior manual
/// choice. Once an override exists, auto-open is never consulted again
/// until the override is cleared.
#[derive(Clone, Debug, Default)]
pub struct ExpansionArena {
    overrides: HashMap<String, bool>,
}

impl ExpansionArena {
    /// Empty arena: every node follows its auto-open default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective open state: the override if set, else `auto_open`.
    #[must_use]
    pub fn effective(&self, menu_key: &str, auto_open: bool) -> bool {
        self.overrides.get(menu_key).copied().unwrap_or(auto_open)
    }

    /// Flip the node's effective open state.
    ///
    /// `auto_open` supplies the default for a node that has no override
    /// yet; the stored override is the negation of the state currently
    /// displayed.
    pub fn toggle(&mut self, menu_key: &str, auto_open: bool) {
        let displayed = self.effective(menu_key, auto_open);
        self.overrides.insert(menu_key.to_owned(), !displayed);
    }

    /// Drop a single node's override, restoring its auto-open default.
    pub fn clear(&mut self, menu_key: &str) {
        self.overrides.remove(menu_key);
    }

    /// Drop all overrides (tree swap / navigation reset).
    pub fn reset(&mut self) {
        self.overrides.clear();
    }

    /// Whether the node has a manual override.
    #[must_use]
    pub fn has_override(&self, menu_key: &str) -> bool {
        self.overrides.contains_key(menu_key)
    }
}
