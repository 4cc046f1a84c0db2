#![forbid(unsafe_code)]

//! Geometric primitives for overlay placement.
//!
//! Overlay geometry is measured in CSS pixels, so unlike cell-based layout
//! every value here is an `f32` and may be negative (offsets push an overlay
//! away from its trigger in either direction).

/// A pixel displacement along both axes.
///
/// Used for align offsets (`[x, y]` pairs in positioning engines) and
/// target offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    /// Horizontal displacement (positive = right).
    pub x: f32,
    /// Vertical displacement (positive = down).
    pub y: f32,
}

impl Offset {
    /// The zero offset.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new offset.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Offset {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Offset {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Width and height of a measured node.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
