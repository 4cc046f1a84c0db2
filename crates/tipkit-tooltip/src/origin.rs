#![forbid(unsafe_code)]

//! Transform origin for the overlay's zoom transition.
//!
//! The overlay scales in from the point where it touches the trigger. That
//! point depends on the placement the positioning engine actually used
//! (which may differ from the requested one after an overflow flip) and on
//! the overlay's measured size, so it can only be computed after layout.
//!
//! # Lookup heuristic
//!
//! The engine reports the alignment it applied, not a placement name. The
//! name is recovered by matching the alignment's anchor points against the
//! placement table. Custom alignments that are not in the table have no
//! name, and the origin is left at its default. This is best effort: the
//! origin is derived from the placement's name, not from the geometry of
//! the anchor points.
//!
//! # Rules
//!
//! Per axis, starting from `50% 50%`:
//!
//! | axis | placements | value |
//! |------|------------|-------|
//! | top  | `top*`, `*Bottom` | `height - offset.y` px |
//! | top  | `bottom*`, `*Top` | `-offset.y` px |
//! | left | `left*`, `*Right` | `width - offset.x` px |
//! | left | `right*`, `*Left` | `-offset.x` px |
//!
//! An axis picked by the suffix (`rightTop` -> top) only moves when the
//! offset along it is non-zero; a flush corner keeps the centered default.

use std::fmt;

use tipkit_core::effect::EffectToken;
use tipkit_core::geometry::{Offset, Size};
use tipkit_core::style::CssLength;

use crate::placement::{AlignDescriptor, PlacementName, PlacementTable, Side};

/// A `transform-origin` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOrigin {
    pub left: CssLength,
    pub top: CssLength,
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self {
            left: CssLength::CENTER,
            top: CssLength::CENTER,
        }
    }
}

impl fmt::Display for TransformOrigin {
    /// CSS order: horizontal then vertical.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.left, self.top)
    }
}

/// Compute the origin for a known placement.
pub fn compute_transform_origin(
    placement: PlacementName,
    size: Size,
    offset: Offset,
) -> TransformOrigin {
    let side = placement.side();
    let suffix = placement.suffix();

    let top = match (side, suffix) {
        (Side::Top, _) => CssLength::Px(size.height - offset.y),
        (Side::Bottom, _) => CssLength::Px(-offset.y),
        (_, Some(Side::Bottom)) if offset.y != 0.0 => CssLength::Px(size.height - offset.y),
        (_, Some(Side::Top)) if offset.y != 0.0 => CssLength::Px(-offset.y),
        _ => CssLength::CENTER,
    };

    let left = match (side, suffix) {
        (Side::Left, _) => CssLength::Px(size.width - offset.x),
        (Side::Right, _) => CssLength::Px(-offset.x),
        (_, Some(Side::Right)) if offset.x != 0.0 => CssLength::Px(size.width - offset.x),
        (_, Some(Side::Left)) if offset.x != 0.0 => CssLength::Px(-offset.x),
        _ => CssLength::CENTER,
    };

    TransformOrigin { left, top }
}

/// Compute the origin for an alignment reported by the engine.
///
/// `None` when the alignment is not in `table`.
pub fn origin_for_alignment(
    table: &PlacementTable,
    align: &AlignDescriptor,
    size: Size,
) -> Option<TransformOrigin> {
    let Some(placement) = table.find_by_points(&align.points) else {
        tracing::debug!(
            overlay = %align.overlay_point(),
            target = %align.target_point(),
            "alignment not in placement table; keeping default origin"
        );
        return None;
    };
    Some(compute_transform_origin(placement, size, align.offset))
}

/// The overlay node as seen by the origin effect.
pub trait OverlayNode {
    /// Measured border-box size.
    fn bounding_size(&self) -> Size;
    /// Current inline `transform-origin`, if set.
    fn transform_origin(&self) -> Option<String>;
    /// Write the inline `transform-origin`.
    fn set_transform_origin(&mut self, value: &str);
}

/// The post-measurement callback handed to the positioning engine.
///
/// Runs once per alignment pass, after the engine measured the overlay and
/// before the transition starts. Writing the same origin twice is a no-op,
/// and once the owning tooltip unmounts every call is ignored.
#[derive(Debug, Clone)]
pub struct AlignHandle {
    token: EffectToken,
    table: PlacementTable,
}

impl AlignHandle {
    pub fn new(token: EffectToken, table: PlacementTable) -> Self {
        Self { token, table }
    }

    /// The table used for lookups.
    pub fn table(&self) -> &PlacementTable {
        &self.table
    }

    /// Apply the origin for `align` to `node`.
    ///
    /// Returns the origin written (or already present), `None` when the
    /// tooltip is gone, the node is missing, or the alignment is unknown.
    pub fn on_align(
        &self,
        node: Option<&mut dyn OverlayNode>,
        align: &AlignDescriptor,
    ) -> Option<TransformOrigin> {
        let node = node?;
        self.token
            .run(|| {
                let origin = origin_for_alignment(&self.table, align, node.bounding_size())?;
                let value = origin.to_string();
                if node.transform_origin().as_deref() != Some(value.as_str()) {
                    tracing::trace!(origin = %value, "set overlay transform origin");
                    node.set_transform_origin(&value);
                }
                Some(origin)
            })
            .flatten()
    }
}
