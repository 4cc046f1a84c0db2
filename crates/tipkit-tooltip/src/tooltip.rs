#![forbid(unsafe_code)]

//! The tooltip component.
//!
//! A [`Tooltip`] is one mounted instance: props plus the state that
//! survives renders (visibility, pending hover requests, the running
//! transition, the placement table cache). Each [`render`](Tooltip::render)
//! produces a [`TooltipView`]: a [`PopupRequest`] for the positioning
//! engine and the trigger child to mount in place.
//!
//! # Lifecycle
//!
//! ```text
//! Tooltip::new(props) ──► render() ──► engine aligns ──► AlignHandle::on_align
//!        │                   ▲                                  │
//!   set_props(props) ────────┘          tick()/motion_end() ◄───┘ transition
//!        │
//!   unmount()  (kills the AlignHandle; later callbacks are no-ops)
//! ```
//!
//! Interaction enters through [`handle_event`](Tooltip::handle_event) and
//! [`poll`](Tooltip::poll), which feed open requests to the open-state
//! machine. Listeners are notified synchronously from those calls.

use std::fmt;
use std::time::{Duration, Instant};

use tipkit_core::effect::EffectScope;
use tipkit_core::style::InlineStyle;

use crate::color::parse_color;
use crate::disabled::{adapt_disabled_child, with_open_class};
use crate::element::{Element, ElementKind, join_classes};
use crate::motion::{DEFAULT_MOTION, MotionConfig, Transition, transition_name};
use crate::open_state::{OpenMode, OpenState};
use crate::origin::AlignHandle;
use crate::placement::{AlignDescriptor, PlacementCache, PlacementName, PlacementTable};
use crate::props::{ContainerResolver, TooltipProps};
use crate::trigger::{TriggerActions, TriggerController, TriggerDelays, TriggerEvent};
use crate::warning::DeprecationWarner;

/// Everything the positioning engine needs to show the overlay.
#[derive(Clone)]
pub struct PopupRequest {
    pub prefix_cls: String,
    pub placement: PlacementName,
    pub builtin_placements: PlacementTable,
    /// Alignment override for `placement`.
    pub align: Option<AlignDescriptor>,
    pub visible: bool,
    pub actions: TriggerActions,
    pub delays: TriggerDelays,
    pub motion: MotionConfig,
    pub overlay: Option<Element>,
    pub overlay_class_name: String,
    pub overlay_style: InlineStyle,
    /// Styles for the overlay's inner box (color background).
    pub overlay_inner_style: InlineStyle,
    pub arrow_style: InlineStyle,
    pub container: Option<ContainerResolver>,
    /// Callback to invoke after each alignment pass.
    pub on_align: AlignHandle,
}

impl fmt::Debug for PopupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PopupRequest")
            .field("prefix_cls", &self.prefix_cls)
            .field("placement", &self.placement)
            .field("align", &self.align)
            .field("visible", &self.visible)
            .field("actions", &self.actions)
            .field("delays", &self.delays)
            .field("motion", &self.motion)
            .field("overlay", &self.overlay)
            .field("overlay_class_name", &self.overlay_class_name)
            .field("overlay_style", &self.overlay_style)
            .field("overlay_inner_style", &self.overlay_inner_style)
            .field("arrow_style", &self.arrow_style)
            .field("container", &self.container.is_some())
            .finish_non_exhaustive()
    }
}

/// Output of one render pass.
#[derive(Debug, Clone)]
pub struct TooltipView {
    pub popup: PopupRequest,
    /// The trigger child, adapted for disabled controls and marked open.
    pub child: Option<Element>,
}

/// A mounted tooltip instance.
pub struct Tooltip {
    props: TooltipProps,
    open: OpenState,
    rendered_open: bool,
    placements: PlacementCache,
    trigger: TriggerController,
    transition: Transition,
    warner: DeprecationWarner,
    scope: EffectScope,
}

impl Tooltip {
    /// Component name used in diagnostics.
    pub const NAME: &'static str = "Tooltip";

    /// Mount a tooltip.
    pub fn new(props: TooltipProps) -> Self {
        let mut warner = DeprecationWarner::new();
        warner.check(Self::NAME, props.deprecated());

        let open = OpenState::new(&props.open_inputs());
        let rendered_open = open.is_open(props.has_content());
        let mut transition = Transition::new(false, &motion_config(&props));
        transition.start(rendered_open);
        let trigger = TriggerController::new(props.trigger, props.trigger_delays());

        tracing::debug!(
            placement = %props.placement,
            mode = ?open.mode(),
            open = rendered_open,
            "tooltip mounted"
        );

        Self {
            props,
            open,
            rendered_open,
            placements: PlacementCache::new(),
            trigger,
            transition,
            warner,
            scope: EffectScope::new(),
        }
    }

    /// Re-render with new props.
    pub fn set_props(&mut self, props: TooltipProps) {
        self.warner.check(Self::NAME, props.deprecated());
        self.open.sync(&props.open_inputs());
        self.trigger.configure(props.trigger, props.trigger_delays());
        self.props = props;
        self.refresh_visibility();
    }

    pub fn props(&self) -> &TooltipProps {
        &self.props
    }

    /// Whether the overlay renders as open.
    pub fn is_open(&self) -> bool {
        self.rendered_open
    }

    pub fn open_mode(&self) -> OpenMode {
        self.open.mode()
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn is_mounted(&self) -> bool {
        self.scope.is_mounted()
    }

    /// Ask for the overlay to open or close.
    ///
    /// Listeners (`on_open_change`, then `on_visible_change`) hear about
    /// the change only when there is content and the value actually changes.
    pub fn request_open(&mut self, open: bool) {
        if !self.is_mounted() {
            return;
        }
        let has_content = self.props.has_content();
        if let Some(value) = self.open.request_open(open, has_content) {
            if let Some(cb) = self.props.on_open_change.as_mut() {
                cb(value);
            }
            if let Some(cb) = self.props.on_visible_change.as_mut() {
                cb(value);
            }
        }
        self.refresh_visibility();
    }

    /// Feed a trigger interaction.
    pub fn handle_event(&mut self, event: TriggerEvent, now: Instant) {
        if let Some(open) = self.trigger.handle(event, self.rendered_open, now) {
            self.request_open(open);
        }
    }

    /// Fire a delayed hover request whose time has come.
    pub fn poll(&mut self, now: Instant) {
        if let Some(open) = self.trigger.poll(now) {
            self.request_open(open);
        }
    }

    /// When [`poll`](Self::poll) should next be called.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.trigger.next_deadline()
    }

    /// Advance the show/hide transition.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(open) = self.transition.tick(dt) {
            self.after_open_change(open);
        }
    }

    /// The host reports the transition animation ended.
    pub fn motion_end(&mut self) {
        if let Some(open) = self.transition.motion_end() {
            self.after_open_change(open);
        }
    }

    /// The placement table in effect: the caller's override or the
    /// resolved presets.
    pub fn placement_table(&mut self) -> PlacementTable {
        match &self.props.builtin_placements {
            Some(table) => table.clone(),
            None => self.placements.get(&self.props.placement_config()).clone(),
        }
    }

    /// Post-measurement callback for the positioning engine.
    pub fn align_handle(&mut self) -> AlignHandle {
        let table = self.placement_table();
        AlignHandle::new(self.scope.token(), table)
    }

    /// Produce the popup request and the trigger child.
    pub fn render(&mut self) -> TooltipView {
        let prefix = self.props.prefix();
        let table = self.placement_table();
        let color = parse_color(&prefix, self.props.color.as_deref());

        let overlay_class_name = join_classes([
            self.props.overlay_class_name.as_deref().unwrap_or_default(),
            color.class_name.as_str(),
        ]);
        let mut overlay_style = self.props.overlay_style.clone();
        if let Some(z) = self.props.z_index {
            overlay_style.set("zIndex", z.to_string());
        }

        let open = self.rendered_open;
        let child = self.props.children.clone().map(|child| {
            let child = adapt_disabled_child(wrap_text_child(child), &prefix);
            if open {
                let open_class = self
                    .props
                    .open_class_name
                    .clone()
                    .unwrap_or_else(|| format!("{prefix}-open"));
                with_open_class(child, &open_class)
            } else {
                child
            }
        });

        let popup = PopupRequest {
            placement: self.props.placement,
            align: self.props.align,
            visible: open,
            actions: self.props.trigger,
            delays: self.props.trigger_delays(),
            motion: motion_config(&self.props),
            overlay: self.props.overlay_content(),
            overlay_class_name,
            overlay_style,
            overlay_inner_style: color.overlay_style,
            arrow_style: color.arrow_style,
            container: self.props.get_popup_container.clone(),
            on_align: AlignHandle::new(self.scope.token(), table.clone()),
            builtin_placements: table,
            prefix_cls: prefix,
        };

        TooltipView { popup, child }
    }

    /// Unmount: pending hover requests are dropped and alignment callbacks
    /// handed out earlier become no-ops.
    pub fn unmount(&mut self) {
        self.trigger.cancel();
        self.scope.unmount();
        tracing::debug!("tooltip unmounted");
    }

    fn refresh_visibility(&mut self) {
        let open = self.open.is_open(self.props.has_content());
        if open == self.rendered_open {
            return;
        }
        self.rendered_open = open;
        self.transition.start(open);
        tracing::debug!(open, placement = %self.props.placement, "tooltip visibility changed");
    }

    fn after_open_change(&mut self, open: bool) {
        let cb = match self.props.after_open_change.as_mut() {
            Some(cb) => cb,
            None => match self.props.after_visible_change.as_mut() {
                Some(cb) => cb,
                None => return,
            },
        };
        cb(open);
    }
}

impl fmt::Debug for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tooltip")
            .field("props", &self.props)
            .field("open", &self.open)
            .field("rendered_open", &self.rendered_open)
            .field("transition", &self.transition)
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}

/// A bare text trigger cannot carry classes or listeners; give it a span.
fn wrap_text_child(child: Element) -> Element {
    match child.kind {
        ElementKind::Text(_) => Element::tag("span").child(child),
        _ => child,
    }
}

fn motion_config(props: &TooltipProps) -> MotionConfig {
    MotionConfig::new(transition_name(
        &props.root_prefix_cls,
        DEFAULT_MOTION,
        props.transition_name.as_deref(),
    ))
}
