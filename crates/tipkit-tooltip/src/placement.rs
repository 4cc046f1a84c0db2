#![forbid(unsafe_code)]

//! Placement presets and the align descriptors derived from them.
//!
//! A positioning engine does not know what "topLeft" means. It aligns one
//! anchor point of the overlay with one anchor point of the trigger, then
//! shifts the result by a pixel offset and optionally flips it when it
//! would overflow the viewport. [`resolve_placements`] translates the 12
//! named presets into those [`AlignDescriptor`]s.
//!
//! # Anchor points
//!
//! An anchor point is a two-letter code: the vertical edge (`t`, `c`, `b`)
//! followed by the horizontal edge (`l`, `c`, `r`). `"bc"` is the
//! bottom-center of a box. Descriptor points are `[overlay, trigger]`, so
//! `top` is `["bc", "tc"]`: the overlay's bottom-center sits on the
//! trigger's top-center.
//!
//! # Center-biased tables
//!
//! With `arrow_point_at_center` the trigger-side point is moved to the
//! middle of the trigger edge and the overlay is shifted by the arrow shift
//! plus arrow width, so the arrow lands on the trigger's center instead of
//! its corner.

use std::fmt;
use std::str::FromStr;

use tipkit_core::geometry::Offset;

/// Distance between overlay and trigger along the placement axis, in px.
const GAP: f32 = 4.0;

// ---------------------------------------------------------------------------
// Names
// ---------------------------------------------------------------------------

/// Which side of the trigger the overlay sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    /// Left/right sides place the overlay along the horizontal axis.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// One of the 12 named placement presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PlacementName {
    #[default]
    Top,
    Left,
    Right,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    LeftTop,
    LeftBottom,
    RightTop,
    RightBottom,
}

impl PlacementName {
    /// All presets, in table order.
    pub const ALL: [Self; 12] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::TopLeft,
        Self::LeftTop,
        Self::TopRight,
        Self::RightTop,
        Self::BottomRight,
        Self::RightBottom,
        Self::BottomLeft,
        Self::LeftBottom,
    ];

    /// The camelCase name used by configuration and host bindings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::BottomLeft => "bottomLeft",
            Self::BottomRight => "bottomRight",
            Self::LeftTop => "leftTop",
            Self::LeftBottom => "leftBottom",
            Self::RightTop => "rightTop",
            Self::RightBottom => "rightBottom",
        }
    }

    /// The side named by the prefix (`bottomLeft` -> `Bottom`).
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Side::Top,
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Side::Bottom,
            Self::Left | Self::LeftTop | Self::LeftBottom => Side::Left,
            Self::Right | Self::RightTop | Self::RightBottom => Side::Right,
        }
    }

    /// The edge named by the suffix (`bottomLeft` -> `Some(Left)`).
    pub const fn suffix(self) -> Option<Side> {
        match self {
            Self::Top | Self::Bottom | Self::Left | Self::Right => None,
            Self::LeftTop | Self::RightTop => Some(Side::Top),
            Self::LeftBottom | Self::RightBottom => Some(Side::Bottom),
            Self::TopLeft | Self::BottomLeft => Some(Side::Left),
            Self::TopRight | Self::BottomRight => Some(Side::Right),
        }
    }
}

impl fmt::Display for PlacementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a placement preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePlacementError {
    pub input: String,
}

impl fmt::Display for ParsePlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown placement {:?}", self.input)
    }
}

impl std::error::Error for ParsePlacementError {}

impl FromStr for PlacementName {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ParsePlacementError {
                input: s.to_owned(),
            })
    }
}

// ---------------------------------------------------------------------------
// Anchor points
// ---------------------------------------------------------------------------

/// Vertical component of an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VAnchor {
    Top,
    Center,
    Bottom,
}

/// Horizontal component of an anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HAnchor {
    Left,
    Center,
    Right,
}

/// A point on a box edge, written as a two-letter edge code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorPoint {
    pub vertical: VAnchor,
    pub horizontal: HAnchor,
}

impl AnchorPoint {
    pub const TOP_LEFT: Self = Self::new(VAnchor::Top, HAnchor::Left);
    pub const TOP_CENTER: Self = Self::new(VAnchor::Top, HAnchor::Center);
    pub const TOP_RIGHT: Self = Self::new(VAnchor::Top, HAnchor::Right);
    pub const CENTER_LEFT: Self = Self::new(VAnchor::Center, HAnchor::Left);
    pub const CENTER_RIGHT: Self = Self::new(VAnchor::Center, HAnchor::Right);
    pub const BOTTOM_LEFT: Self = Self::new(VAnchor::Bottom, HAnchor::Left);
    pub const BOTTOM_CENTER: Self = Self::new(VAnchor::Bottom, HAnchor::Center);
    pub const BOTTOM_RIGHT: Self = Self::new(VAnchor::Bottom, HAnchor::Right);

    pub const fn new(vertical: VAnchor, horizontal: HAnchor) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// The two edge-code characters.
    pub const fn code(self) -> [char; 2] {
        let v = match self.vertical {
            VAnchor::Top => 't',
            VAnchor::Center => 'c',
            VAnchor::Bottom => 'b',
        };
        let h = match self.horizontal {
            HAnchor::Left => 'l',
            HAnchor::Center => 'c',
            HAnchor::Right => 'r',
        };
        [v, h]
    }
}

impl fmt::Display for AnchorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [v, h] = self.code();
        write!(f, "{v}{h}")
    }
}

/// Error returned for malformed edge codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAnchorError {
    pub input: String,
}

impl fmt::Display for ParseAnchorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid anchor code {:?} (expected [tcb][lcr])",
            self.input
        )
    }
}

impl std::error::Error for ParseAnchorError {}

impl FromStr for AnchorPoint {
    type Err = ParseAnchorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseAnchorError {
            input: s.to_owned(),
        };
        let mut chars = s.chars();
        let (Some(v), Some(h), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(err());
        };
        let vertical = match v {
            't' => VAnchor::Top,
            'c' => VAnchor::Center,
            'b' => VAnchor::Bottom,
            _ => return Err(err()),
        };
        let horizontal = match h {
            'l' => HAnchor::Left,
            'c' => HAnchor::Center,
            'r' => HAnchor::Right,
            _ => return Err(err()),
        };
        Ok(Self::new(vertical, horizontal))
    }
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// Per-axis viewport overflow adjustment (flip/shift) flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overflow {
    pub adjust_x: bool,
    pub adjust_y: bool,
}

impl Overflow {
    pub const NONE: Self = Self::new(false, false);

    pub const fn new(adjust_x: bool, adjust_y: bool) -> Self {
        Self { adjust_x, adjust_y }
    }
}

/// How overflow adjustment is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustOverflow {
    /// `true`: adjust along the axis each placement is sensitive to.
    /// `false`: never adjust.
    Auto(bool),
    /// Explicit per-axis override; unset axes stay disabled.
    Axes {
        adjust_x: Option<bool>,
        adjust_y: Option<bool>,
    },
}

impl Default for AdjustOverflow {
    fn default() -> Self {
        Self::Auto(true)
    }
}

impl From<bool> for AdjustOverflow {
    fn from(enabled: bool) -> Self {
        Self::Auto(enabled)
    }
}

impl AdjustOverflow {
    /// Overflow flags for one placement.
    pub fn for_placement(self, name: PlacementName) -> Overflow {
        match self {
            Self::Auto(false) => Overflow::NONE,
            Self::Auto(true) if name.side().is_horizontal() => Overflow::new(true, false),
            Self::Auto(true) => Overflow::new(false, true),
            Self::Axes { adjust_x, adjust_y } => {
                Overflow::new(adjust_x.unwrap_or(false), adjust_y.unwrap_or(false))
            }
        }
    }
}

/// Alignment instructions for a positioning engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignDescriptor {
    /// `[overlay point, trigger point]`.
    pub points: [AnchorPoint; 2],
    /// Shift applied to the overlay after alignment.
    pub offset: Offset,
    /// Shift applied to the trigger point before alignment.
    pub target_offset: Offset,
    pub overflow: Overflow,
    pub use_css_right: bool,
    pub use_css_bottom: bool,
    pub use_css_transform: bool,
    /// Skip the engine's shake-avoidance realignment.
    pub ignore_shake: bool,
}

impl AlignDescriptor {
    /// Descriptor aligning `overlay` with `target`, everything else zeroed.
    pub const fn new(overlay: AnchorPoint, target: AnchorPoint) -> Self {
        Self {
            points: [overlay, target],
            offset: Offset::ZERO,
            target_offset: Offset::ZERO,
            overflow: Overflow::NONE,
            use_css_right: false,
            use_css_bottom: false,
            use_css_transform: false,
            ignore_shake: false,
        }
    }

    #[must_use]
    pub const fn offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Offset::new(x, y);
        self
    }

    #[must_use]
    pub const fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    #[must_use]
    pub const fn ignore_shake(mut self, ignore: bool) -> Self {
        self.ignore_shake = ignore;
        self
    }

    /// The overlay-side anchor point.
    pub const fn overlay_point(&self) -> AnchorPoint {
        self.points[0]
    }

    /// The trigger-side anchor point.
    pub const fn target_point(&self) -> AnchorPoint {
        self.points[1]
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

/// Inputs to [`resolve_placements`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementConfig {
    pub arrow_point_at_center: bool,
    pub auto_adjust_overflow: AdjustOverflow,
    /// Arrow width in px. Default: 4
    pub arrow_width: f32,
    /// Arrow distance from a vertical overlay edge in px. Default: 16
    pub horizontal_arrow_shift: f32,
    /// Arrow distance from a horizontal overlay edge in px. Default: 8
    pub vertical_arrow_shift: f32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            arrow_point_at_center: false,
            auto_adjust_overflow: AdjustOverflow::default(),
            arrow_width: 4.0,
            horizontal_arrow_shift: 16.0,
            vertical_arrow_shift: 8.0,
        }
    }
}

/// Placement name to align descriptor mapping.
///
/// Entries keep insertion order; point lookups return the first match.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementTable {
    entries: Vec<(PlacementName, AlignDescriptor)>,
}

impl PlacementTable {
    /// Build a table from caller-supplied entries, e.g. for
    /// `builtin_placements`. A later duplicate name replaces the earlier one.
    pub fn custom(entries: impl IntoIterator<Item = (PlacementName, AlignDescriptor)>) -> Self {
        let mut table = Self {
            entries: Vec::new(),
        };
        for (name, align) in entries {
            match table.entries.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = align,
                None => table.entries.push((name, align)),
            }
        }
        table
    }

    /// Descriptor for a placement, if present.
    pub fn get(&self, name: PlacementName) -> Option<&AlignDescriptor> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, align)| align)
    }

    /// Find the placement whose anchor points equal `points`.
    pub fn find_by_points(&self, points: &[AnchorPoint; 2]) -> Option<PlacementName> {
        self.entries
            .iter()
            .find(|(_, align)| align.points == *points)
            .map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlacementName, &AlignDescriptor)> {
        self.entries.iter().map(|(n, a)| (*n, a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the placement table for a configuration. Pure.
pub fn resolve_placements(config: &PlacementConfig) -> PlacementTable {
    let table = PlacementTable::custom(PlacementName::ALL.into_iter().map(|name| {
        let base = if config.arrow_point_at_center {
            centered_descriptor(name, config)
        } else {
            corner_descriptor(name)
        };
        let align = base
            .overflow(config.auto_adjust_overflow.for_placement(name))
            .ignore_shake(true);
        (name, align)
    }));
    tracing::trace!(
        arrow_point_at_center = config.arrow_point_at_center,
        entries = table.len(),
        "resolved placement table"
    );
    table
}

fn corner_descriptor(name: PlacementName) -> AlignDescriptor {
    use AnchorPoint as P;
    use PlacementName as N;
    let (overlay, target, dx, dy) = match name {
        N::Left => (P::CENTER_RIGHT, P::CENTER_LEFT, -GAP, 0.0),
        N::Right => (P::CENTER_LEFT, P::CENTER_RIGHT, GAP, 0.0),
        N::Top => (P::BOTTOM_CENTER, P::TOP_CENTER, 0.0, -GAP),
        N::Bottom => (P::TOP_CENTER, P::BOTTOM_CENTER, 0.0, GAP),
        N::TopLeft => (P::BOTTOM_LEFT, P::TOP_LEFT, 0.0, -GAP),
        N::LeftTop => (P::TOP_RIGHT, P::TOP_LEFT, -GAP, 0.0),
        N::TopRight => (P::BOTTOM_RIGHT, P::TOP_RIGHT, 0.0, -GAP),
        N::RightTop => (P::TOP_LEFT, P::TOP_RIGHT, GAP, 0.0),
        N::BottomRight => (P::TOP_RIGHT, P::BOTTOM_RIGHT, 0.0, GAP),
        N::RightBottom => (P::BOTTOM_LEFT, P::BOTTOM_RIGHT, GAP, 0.0),
        N::BottomLeft => (P::TOP_LEFT, P::BOTTOM_LEFT, 0.0, GAP),
        N::LeftBottom => (P::BOTTOM_RIGHT, P::BOTTOM_LEFT, -GAP, 0.0),
    };
    AlignDescriptor::new(overlay, target).offset(dx, dy)
}

fn centered_descriptor(name: PlacementName, config: &PlacementConfig) -> AlignDescriptor {
    use AnchorPoint as P;
    use PlacementName as N;
    let h = config.horizontal_arrow_shift + config.arrow_width;
    let v = config.vertical_arrow_shift + config.arrow_width;
    let (overlay, target, dx, dy) = match name {
        N::Left => (P::CENTER_RIGHT, P::CENTER_LEFT, -GAP, 0.0),
        N::Right => (P::CENTER_LEFT, P::CENTER_RIGHT, GAP, 0.0),
        N::Top => (P::BOTTOM_CENTER, P::TOP_CENTER, 0.0, -GAP),
        N::Bottom => (P::TOP_CENTER, P::BOTTOM_CENTER, 0.0, GAP),
        N::TopLeft => (P::BOTTOM_LEFT, P::TOP_CENTER, -h, -GAP),
        N::LeftTop => (P::TOP_RIGHT, P::CENTER_LEFT, -GAP, -v),
        N::TopRight => (P::BOTTOM_RIGHT, P::TOP_CENTER, h, -GAP),
        N::RightTop => (P::TOP_LEFT, P::CENTER_RIGHT, GAP, -v),
        N::BottomRight => (P::TOP_RIGHT, P::BOTTOM_CENTER, h, GAP),
        N::RightBottom => (P::BOTTOM_LEFT, P::CENTER_RIGHT, GAP, v),
        N::BottomLeft => (P::TOP_LEFT, P::BOTTOM_CENTER, -h, GAP),
        N::LeftBottom => (P::BOTTOM_RIGHT, P::CENTER_LEFT, -GAP, v),
    };
    AlignDescriptor::new(overlay, target).offset(dx, dy)
}

/// Memoizes the resolved table across renders.
///
/// The table is rebuilt only when the configuration changes.
#[derive(Debug, Default)]
pub struct PlacementCache {
    cached: Option<(PlacementConfig, PlacementTable)>,
}

impl PlacementCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved table for `config`, rebuilding if the config changed.
    pub fn get(&mut self, config: &PlacementConfig) -> &PlacementTable {
        if !matches!(&self.cached, Some((cfg, _)) if cfg == config) {
            self.cached = None;
        }
        let (_, table) = self
            .cached
            .get_or_insert_with(|| (*config, resolve_placements(config)));
        table
    }
}
