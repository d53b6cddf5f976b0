//! Theme tokens and depth buckets for the rendering layer.
//!
//! The tree root carries a color token that descendants inherit
//! unchanged; the renderer maps it (and the node's depth bucket) to CSS
//! classes. Unknown tokens degrade to [`ThemeColor::Unset`], never fail.

use serde::Serialize;

/// Theme color token inherited from the tree root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeColor {
    Red,
    Orange,
    Yellow,
    Green,
    Acqua,
    LightBlue,
    DarkBlue,
    Indigo,
    Gray,
    #[default]
    Unset,
}

impl ThemeColor {
    /// Parse a theme token (e.g. `"red-70"`). Unknown tokens degrade to
    /// [`ThemeColor::Unset`].
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token {
            "red-70" => Self::Red,
            "orange-70" => Self::Orange,
            "yellow-70" => Self::Yellow,
            "green-70" => Self::Green,
            "acqua-70" => Self::Acqua,
            "lightBlue-70" => Self::LightBlue,
            "darkBlue-70" => Self::DarkBlue,
            "indigo-70" => Self::Indigo,
            "gray-70" => Self::Gray,
            _ => Self::Unset,
        }
    }

    /// CSS class for the active-page circle marker.
    #[must_use]
    pub fn circle_class(self) -> &'static str {
        match self {
            Self::Red => "RedCircle",
            Self::Orange => "OrangeCircle",
            Self::Yellow => "YellowCircle",
            Self::Green => "GreenCircle",
            Self::Acqua => "AcquaCircle",
            Self::LightBlue => "LightBlueCircle",
            Self::DarkBlue => "DarkBlueCircle",
            Self::Indigo => "IndigoCircle",
            Self::Gray => "GrayCircle",
            Self::Unset => "TransparentCircle",
        }
    }

    /// CSS class for divider rules and labels.
    #[must_use]
    pub fn divider_class(self) -> &'static str {
        match self {
            Self::Red => "RedDivider",
            Self::Orange => "OrangeDivider",
            Self::Yellow => "YellowDivider",
            Self::Green => "GreenDivider",
            Self::Acqua => "AcquaDivider",
            Self::LightBlue => "LightBlueDivider",
            Self::DarkBlue => "DarkBlueDivider",
            Self::Indigo => "IndigoDivider",
            Self::Gray => "GrayDivider",
            Self::Unset => "TransparentDivider",
        }
    }
}

/// Style bucket for a node's recursion depth.
///
/// Depths do not grow unboundedly distinct: everything at depth two or
/// below the root maps to the same deepest bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DepthBucket {
    Zero,
    One,
    Deep,
}

impl DepthBucket {
    /// Bucket a raw recursion depth.
    #[must_use]
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            0 => Self::Zero,
            1 => Self::One,
            _ => Self::Deep,
        }
    }

    /// CSS class for the node's list-item container.
    #[must_use]
    pub fn container_class(self) -> &'static str {
        match self {
            Self::Zero => "ContainerZero",
            Self::One => "ContainerOne",
            Self::Deep => "ContainerTwo",
        }
    }

    /// CSS class for the node's child list.
    #[must_use]
    pub fn list_class(self) -> &'static str {
        match self {
            Self::Zero => "ListZero",
            Self::One | Self::Deep => "ListOne",
        }
    }
}
