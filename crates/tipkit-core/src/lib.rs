#![forbid(unsafe_code)]

//! Core: overlay geometry, inline style maps, and post-measurement effects.

pub mod effect;
pub mod geometry;
pub mod style;
