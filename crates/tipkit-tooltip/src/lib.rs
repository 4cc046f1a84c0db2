#![forbid(unsafe_code)]

//! Tooltip behavior for tipkit.
//!
//! The rendering host and the positioning engine live elsewhere; this crate
//! decides where the overlay goes ([`placement`]), whether it is shown
//! ([`open_state`], [`trigger`]), where its zoom animation starts from
//! ([`origin`]), and how disabled triggers keep receiving hover
//! ([`disabled`]). [`tooltip::Tooltip`] ties them together.

pub mod color;
pub mod content;
pub mod disabled;
pub mod element;
pub mod motion;
pub mod open_state;
pub mod origin;
pub mod placement;
pub mod props;
pub mod tooltip;
pub mod trigger;
pub mod warning;

pub use content::Content;
pub use element::{Element, InteractiveKind};
pub use open_state::{OpenMode, OpenState};
pub use origin::{AlignHandle, OverlayNode, TransformOrigin};
pub use placement::{AlignDescriptor, AnchorPoint, PlacementName, PlacementTable};
pub use props::TooltipProps;
pub use tooltip::{PopupRequest, Tooltip, TooltipView};
pub use trigger::{TriggerActions, TriggerEvent};
