#![forbid(unsafe_code)]

//! Tooltip configuration.
//!
//! Props are built with chained setters:
//!
//! ```
//! # use tipkit_tooltip::props::TooltipProps;
//! # use tipkit_tooltip::placement::PlacementName;
//! let props = TooltipProps::new()
//!     .title("Copy to clipboard")
//!     .placement(PlacementName::BottomLeft)
//!     .arrow_point_at_center(true);
//! ```
//!
//! `visible`, `default_visible`, `on_visible_change` and
//! `after_visible_change` are deprecated aliases. They behave exactly like
//! their `open` counterparts and warn once per instance in debug builds.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tipkit_core::style::InlineStyle;

use crate::content::{Content, has_renderable_content};
use crate::element::{Element, NodeId};
use crate::open_state::OpenInputs;
use crate::placement::{AdjustOverflow, AlignDescriptor, PlacementConfig, PlacementName, PlacementTable};
use crate::trigger::{TriggerActions, TriggerDelays};
use crate::warning::DeprecatedProps;

/// Visibility listener.
pub type OpenCallback = Box<dyn FnMut(bool)>;

/// Picks the node the overlay is attached to, given the trigger node.
pub type ContainerResolver = Rc<dyn Fn(NodeId) -> NodeId>;

/// Default root class prefix.
pub const ROOT_PREFIX: &str = "tip";

/// Tooltip props.
pub struct TooltipProps {
    pub placement: PlacementName,
    pub open: Option<bool>,
    pub visible: Option<bool>,
    pub default_open: Option<bool>,
    pub default_visible: Option<bool>,
    pub on_open_change: Option<OpenCallback>,
    pub on_visible_change: Option<OpenCallback>,
    pub after_open_change: Option<OpenCallback>,
    pub after_visible_change: Option<OpenCallback>,
    pub title: Option<Content>,
    pub overlay: Option<Content>,
    /// Preset name or literal CSS color.
    pub color: Option<String>,
    /// Replaces the resolved placement table entirely.
    pub builtin_placements: Option<PlacementTable>,
    /// Alignment override for the current placement.
    pub align: Option<AlignDescriptor>,
    pub arrow_point_at_center: bool,
    pub auto_adjust_overflow: AdjustOverflow,
    pub trigger: TriggerActions,
    pub mouse_enter_delay: Duration,
    pub mouse_leave_delay: Duration,
    pub get_popup_container: Option<ContainerResolver>,
    /// Component class prefix. Default: `<root_prefix>-tooltip`
    pub prefix_cls: Option<String>,
    pub root_prefix_cls: String,
    /// Class added to the trigger while open. Default: `<prefix>-open`
    pub open_class_name: Option<String>,
    pub transition_name: Option<String>,
    pub overlay_class_name: Option<String>,
    pub overlay_style: InlineStyle,
    pub z_index: Option<i32>,
    pub children: Option<Element>,
}

impl Default for TooltipProps {
    fn default() -> Self {
        let delays = TriggerDelays::default();
        Self {
            placement: PlacementName::Top,
            open: None,
            visible: None,
            default_open: None,
            default_visible: None,
            on_open_change: None,
            on_visible_change: None,
            after_open_change: None,
            after_visible_change: None,
            title: None,
            overlay: None,
            color: None,
            builtin_placements: None,
            align: None,
            arrow_point_at_center: false,
            auto_adjust_overflow: AdjustOverflow::default(),
            trigger: TriggerActions::default(),
            mouse_enter_delay: delays.enter,
            mouse_leave_delay: delays.leave,
            get_popup_container: None,
            prefix_cls: None,
            root_prefix_cls: ROOT_PREFIX.to_owned(),
            open_class_name: None,
            transition_name: None,
            overlay_class_name: None,
            overlay_style: InlineStyle::new(),
            z_index: None,
            children: None,
        }
    }
}

impl TooltipProps {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn placement(mut self, placement: PlacementName) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Deprecated: use [`open`](Self::open).
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    #[must_use]
    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = Some(open);
        self
    }

    /// Deprecated: use [`default_open`](Self::default_open).
    #[must_use]
    pub fn default_visible(mut self, visible: bool) -> Self {
        self.default_visible = Some(visible);
        self
    }

    #[must_use]
    pub fn on_open_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_open_change = Some(Box::new(f));
        self
    }

    /// Deprecated: use [`on_open_change`](Self::on_open_change).
    #[must_use]
    pub fn on_visible_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_visible_change = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn after_open_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.after_open_change = Some(Box::new(f));
        self
    }

    /// Deprecated: use [`after_open_change`](Self::after_open_change).
    #[must_use]
    pub fn after_visible_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.after_visible_change = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<Content>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn overlay(mut self, overlay: impl Into<Content>) -> Self {
        self.overlay = Some(overlay.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn builtin_placements(mut self, table: PlacementTable) -> Self {
        self.builtin_placements = Some(table);
        self
    }

    #[must_use]
    pub fn align(mut self, align: AlignDescriptor) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn arrow_point_at_center(mut self, center: bool) -> Self {
        self.arrow_point_at_center = center;
        self
    }

    #[must_use]
    pub fn auto_adjust_overflow(mut self, adjust: impl Into<AdjustOverflow>) -> Self {
        self.auto_adjust_overflow = adjust.into();
        self
    }

    #[must_use]
    pub fn trigger(mut self, actions: TriggerActions) -> Self {
        self.trigger = actions;
        self
    }

    #[must_use]
    pub fn mouse_enter_delay(mut self, delay: Duration) -> Self {
        self.mouse_enter_delay = delay;
        self
    }

    #[must_use]
    pub fn mouse_leave_delay(mut self, delay: Duration) -> Self {
        self.mouse_leave_delay = delay;
        self
    }

    #[must_use]
    pub fn get_popup_container(mut self, f: impl Fn(NodeId) -> NodeId + 'static) -> Self {
        self.get_popup_container = Some(Rc::new(f));
        self
    }

    #[must_use]
    pub fn prefix_cls(mut self, prefix: impl Into<String>) -> Self {
        self.prefix_cls = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn root_prefix_cls(mut self, prefix: impl Into<String>) -> Self {
        self.root_prefix_cls = prefix.into();
        self
    }

    #[must_use]
    pub fn open_class_name(mut self, class: impl Into<String>) -> Self {
        self.open_class_name = Some(class.into());
        self
    }

    #[must_use]
    pub fn transition_name(mut self, name: impl Into<String>) -> Self {
        self.transition_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn overlay_class_name(mut self, class: impl Into<String>) -> Self {
        self.overlay_class_name = Some(class.into());
        self
    }

    #[must_use]
    pub fn overlay_style(mut self, style: InlineStyle) -> Self {
        self.overlay_style = style;
        self
    }

    #[must_use]
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    #[must_use]
    pub fn children(mut self, child: Element) -> Self {
        self.children = Some(child);
        self
    }

    // -- derived values --

    /// Component class prefix.
    pub fn prefix(&self) -> String {
        match &self.prefix_cls {
            Some(prefix) => prefix.clone(),
            None => format!("{}-tooltip", self.root_prefix_cls),
        }
    }

    /// Whether title or overlay has something to show.
    pub fn has_content(&self) -> bool {
        has_renderable_content(self.title.as_ref(), self.overlay.as_ref())
    }

    pub fn open_inputs(&self) -> OpenInputs {
        OpenInputs {
            open: self.open,
            visible: self.visible,
            default_open: self.default_open,
            default_visible: self.default_visible,
        }
    }

    pub fn placement_config(&self) -> PlacementConfig {
        PlacementConfig {
            arrow_point_at_center: self.arrow_point_at_center,
            auto_adjust_overflow: self.auto_adjust_overflow,
            ..PlacementConfig::default()
        }
    }

    pub fn trigger_delays(&self) -> TriggerDelays {
        TriggerDelays {
            enter: self.mouse_enter_delay,
            leave: self.mouse_leave_delay,
        }
    }

    /// Deprecated props set on this instance.
    pub fn deprecated(&self) -> DeprecatedProps {
        let mut used = DeprecatedProps::empty();
        used.set(DeprecatedProps::VISIBLE, self.visible.is_some());
        used.set(DeprecatedProps::DEFAULT_VISIBLE, self.default_visible.is_some());
        used.set(DeprecatedProps::ON_VISIBLE_CHANGE, self.on_visible_change.is_some());
        used.set(DeprecatedProps::AFTER_VISIBLE_CHANGE, self.after_visible_change.is_some());
        used
    }

    /// The overlay content, `overlay` taking precedence over `title`.
    pub fn overlay_content(&self) -> Option<Element> {
        [self.overlay.as_ref(), self.title.as_ref()]
            .into_iter()
            .flatten()
            .find(|content| !content.is_empty())
            .map(Content::to_element)
    }
}

impl fmt::Debug for TooltipProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipProps")
            .field("placement", &self.placement)
            .field("open", &self.open)
            .field("visible", &self.visible)
            .field("default_open", &self.default_open)
            .field("default_visible", &self.default_visible)
            .field("title", &self.title)
            .field("overlay", &self.overlay)
            .field("color", &self.color)
            .field("arrow_point_at_center", &self.arrow_point_at_center)
            .field("auto_adjust_overflow", &self.auto_adjust_overflow)
            .field("trigger", &self.trigger)
            .field("prefix", &self.prefix())
            .finish_non_exhaustive()
    }
}
