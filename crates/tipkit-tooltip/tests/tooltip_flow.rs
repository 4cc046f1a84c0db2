#![forbid(unsafe_code)]

//! End-to-end tooltip behavior through the public API.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tipkit_core::geometry::{Offset, Size};
use tipkit_core::style::{CssLength, InlineStyle};
use tipkit_tooltip::element::{ClassName, ElementKind, NodeId};
use tipkit_tooltip::placement::Side;
use tipkit_tooltip::{
    AlignDescriptor, Element, InteractiveKind, OverlayNode, PlacementName, Tooltip, TooltipProps,
    TriggerActions, TriggerEvent,
};

// ============================================================================
// Helpers
// ============================================================================

type Log = Rc<RefCell<Vec<bool>>>;

fn recorder() -> (Log, impl FnMut(bool) + 'static) {
    let log: Log = Rc::default();
    let sink = Rc::clone(&log);
    (log, move |v| sink.borrow_mut().push(v))
}

#[derive(Default)]
struct Overlay {
    size: Size,
    origin: Option<String>,
    writes: usize,
}

impl Overlay {
    fn sized(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            ..Self::default()
        }
    }
}

impl OverlayNode for Overlay {
    fn bounding_size(&self) -> Size {
        self.size
    }
    fn transform_origin(&self) -> Option<String> {
        self.origin.clone()
    }
    fn set_transform_origin(&mut self, value: &str) {
        self.origin = Some(value.to_owned());
        self.writes += 1;
    }
}

fn engine_align(tip: &mut Tooltip, placement: PlacementName, offset: Offset) -> AlignDescriptor {
    let table = tip.placement_table();
    let mut align = *table.get(placement).expect("preset placement");
    align.offset = offset;
    align
}

// ============================================================================
// Open state
// ============================================================================

#[test]
fn deprecated_visible_behaves_like_open() {
    let mut with_open = Tooltip::new(TooltipProps::new().title("x").open(true));
    let mut with_visible = Tooltip::new(TooltipProps::new().title("x").visible(true));
    assert!(with_open.is_open());
    assert!(with_visible.is_open());
    assert_eq!(with_open.render().popup.visible, with_visible.render().popup.visible);
}

#[test]
fn open_wins_over_visible() {
    let tip = Tooltip::new(TooltipProps::new().title("x").open(false).visible(true));
    assert!(!tip.is_open());
}

#[test]
fn default_visible_seeds_uncontrolled_state() {
    let tip = Tooltip::new(TooltipProps::new().title("x").default_visible(true));
    assert!(tip.is_open());
}

#[test]
fn controlled_requests_announce_without_changing_visibility() {
    let (log, cb) = recorder();
    let mut tip = Tooltip::new(TooltipProps::new().title("x").open(false).on_open_change(cb));

    tip.request_open(true);
    tip.request_open(true);
    assert!(!tip.is_open());
    assert_eq!(*log.borrow(), vec![true]);

    // The owner reflects the request back.
    tip.set_props(TooltipProps::new().title("x").open(true));
    assert!(tip.is_open());
}

#[test]
fn emptied_content_hides_open_tooltip() {
    let mut tip = Tooltip::new(TooltipProps::new().title("x").default_open(true));
    assert!(tip.is_open());
    tip.set_props(TooltipProps::new().title(""));
    assert!(!tip.is_open());
    assert!(tip.render().popup.overlay.is_none());
}

#[test]
fn overlay_takes_precedence_over_title() {
    let mut tip = Tooltip::new(TooltipProps::new().title("title").overlay("overlay"));
    let overlay = tip.render().popup.overlay.expect("content");
    assert_eq!(overlay.kind, ElementKind::Text("overlay".into()));
}

// ============================================================================
// Trigger timing
// ============================================================================

#[test]
fn hover_opens_after_delay_and_closes_after_leave() {
    let (log, cb) = recorder();
    let t0 = Instant::now();
    let mut tip = Tooltip::new(
        TooltipProps::new()
            .title("x")
            .mouse_enter_delay(Duration::from_millis(200))
            .on_open_change(cb),
    );

    tip.handle_event(TriggerEvent::PointerEnter, t0);
    assert_eq!(tip.next_deadline(), Some(t0 + Duration::from_millis(200)));
    tip.poll(t0 + Duration::from_millis(150));
    assert!(!tip.is_open());
    tip.poll(t0 + Duration::from_millis(200));
    assert!(tip.is_open());

    tip.handle_event(TriggerEvent::PointerLeave, t0 + Duration::from_millis(300));
    tip.poll(t0 + Duration::from_millis(400));
    assert!(!tip.is_open());
    assert_eq!(*log.borrow(), vec![true, false]);
}

#[test]
fn click_trigger_toggles() {
    let now = Instant::now();
    let mut tip = Tooltip::new(TooltipProps::new().title("x").trigger(TriggerActions::CLICK));
    tip.handle_event(TriggerEvent::PointerEnter, now);
    assert_eq!(tip.next_deadline(), None);
    tip.handle_event(TriggerEvent::Click, now);
    assert!(tip.is_open());
    tip.handle_event(TriggerEvent::Click, now);
    assert!(!tip.is_open());
}

#[test]
fn unbounded_hover_delay_keeps_tooltip_closed() {
    let t0 = Instant::now();
    let mut tip = Tooltip::new(TooltipProps::new().title("x").mouse_enter_delay(Duration::MAX));
    tip.handle_event(TriggerEvent::PointerEnter, t0);
    assert_eq!(tip.next_deadline(), None);
    tip.poll(t0 + Duration::from_secs(60));
    assert!(!tip.is_open());
}

#[test]
fn unmount_drops_pending_hover() {
    let t0 = Instant::now();
    let mut tip = Tooltip::new(TooltipProps::new().title("x"));
    tip.handle_event(TriggerEvent::PointerEnter, t0);
    tip.unmount();
    tip.poll(t0 + Duration::from_secs(1));
    assert!(!tip.is_open());
    assert!(!tip.is_mounted());
}

// ============================================================================
// Transition callbacks
// ============================================================================

#[test]
fn after_open_change_fires_once_per_settled_transition() {
    let (log, cb) = recorder();
    let mut tip = Tooltip::new(TooltipProps::new().title("x").after_open_change(cb));

    tip.request_open(true);
    tip.tick(Duration::from_millis(40));
    tip.tick(Duration::from_millis(80));
    tip.motion_end();
    tip.request_open(false);
    tip.motion_end();
    tip.tick(Duration::from_secs(2));

    assert_eq!(*log.borrow(), vec![true, false]);
}

#[test]
fn reversed_transition_settles_on_final_state() {
    let (log, cb) = recorder();
    let mut tip = Tooltip::new(TooltipProps::new().title("x").after_open_change(cb));
    tip.request_open(true);
    tip.tick(Duration::from_millis(50));
    tip.request_open(false);
    tip.tick(Duration::from_millis(100));
    assert_eq!(*log.borrow(), vec![false]);
}

// ============================================================================
// Animation origin
// ============================================================================

#[test]
fn align_writes_origin_for_reported_placement() {
    let mut tip = Tooltip::new(TooltipProps::new().title("x").open(true));
    let handle = tip.render().popup.on_align;

    let mut overlay = Overlay::sized(100.0, 40.0);
    let align = engine_align(&mut tip, PlacementName::Top, Offset::new(0.0, 8.0));
    let origin = handle.on_align(Some(&mut overlay), &align).expect("origin");
    assert_eq!(origin.to_string(), "50% 32px");
    assert_eq!(overlay.origin.as_deref(), Some("50% 32px"));

    // Same alignment again: nothing to write.
    handle.on_align(Some(&mut overlay), &align);
    assert_eq!(overlay.writes, 1);
}

#[test]
fn flipped_alignment_uses_flipped_placement() {
    let mut tip = Tooltip::new(TooltipProps::new().title("x").placement(PlacementName::Top));
    let handle = tip.align_handle();

    let mut overlay = Overlay::sized(80.0, 30.0);
    let align = engine_align(&mut tip, PlacementName::Bottom, Offset::new(0.0, 4.0));
    let origin = handle.on_align(Some(&mut overlay), &align).expect("origin");
    assert_eq!(origin.to_string(), "50% -4px");
}

#[test]
fn right_top_keeps_vertical_center() {
    let mut tip = Tooltip::new(TooltipProps::new().title("x"));
    let handle = tip.align_handle();
    let mut overlay = Overlay::sized(60.0, 20.0);
    let align = engine_align(&mut tip, PlacementName::RightTop, Offset::new(8.0, 0.0));
    let origin = handle.on_align(Some(&mut overlay), &align).expect("origin");
    assert_eq!(origin.to_string(), "-8px 50%");
}

#[test]
fn unknown_alignment_leaves_node_untouched() {
    let mut tip = Tooltip::new(TooltipProps::new().title("x"));
    let handle = tip.align_handle();
    let mut overlay = Overlay::sized(60.0, 20.0);
    let odd = AlignDescriptor::new(
        tipkit_tooltip::AnchorPoint::TOP_LEFT,
        tipkit_tooltip::AnchorPoint::TOP_LEFT,
    );
    assert_eq!(handle.on_align(Some(&mut overlay), &odd), None);
    assert_eq!(overlay.origin, None);
}

#[test]
fn align_after_unmount_is_ignored() {
    let mut tip = Tooltip::new(TooltipProps::new().title("x"));
    let handle = tip.align_handle();
    let align = engine_align(&mut tip, PlacementName::Left, Offset::new(-4.0, 0.0));
    tip.unmount();

    let mut overlay = Overlay::sized(60.0, 20.0);
    assert_eq!(handle.on_align(Some(&mut overlay), &align), None);
    assert_eq!(overlay.writes, 0);
}

#[test]
fn dropping_tooltip_kills_handles() {
    let mut tip = Tooltip::new(TooltipProps::new().title("x"));
    let handle = tip.align_handle();
    let align = engine_align(&mut tip, PlacementName::Top, Offset::ZERO);
    drop(tip);

    let mut overlay = Overlay::sized(60.0, 20.0);
    assert_eq!(handle.on_align(Some(&mut overlay), &align), None);
}

// ============================================================================
// Render output
// ============================================================================

#[test]
fn disabled_button_is_wrapped_and_keeps_layout_on_wrapper() {
    let style = InlineStyle::new()
        .with("position", "absolute")
        .with("color", "red");
    let mut tip = Tooltip::new(
        TooltipProps::new().title("x").children(
            Element::control(InteractiveKind::Button)
                .disabled(true)
                .block(true)
                .style(style)
                .class_name("btn"),
        ),
    );
    let child = tip.render().child.expect("child");

    assert_eq!(child.kind, ElementKind::Tag("span".into()));
    assert_eq!(child.plain_class(), Some("btn tip-tooltip-disabled-compatible-wrapper"));
    assert_eq!(child.props.style.get("position"), Some("absolute"));
    assert_eq!(child.props.style.get("cursor"), Some("not-allowed"));
    assert_eq!(child.props.style.get("width"), Some("100%"));

    let inner = &child.children[0];
    assert_eq!(inner.props.style.get("color"), Some("red"));
    assert_eq!(inner.props.style.get("pointerEvents"), Some("none"));
    assert!(!inner.props.style.contains("position"));
}

#[test]
fn enabled_child_is_passed_through() {
    let button = Element::control(InteractiveKind::Button).class_name("btn");
    let mut tip = Tooltip::new(TooltipProps::new().title("x").children(button.clone()));
    assert_eq!(tip.render().child, Some(button));
}

#[test]
fn open_class_is_appended_only_while_open() {
    let mut tip = Tooltip::new(
        TooltipProps::new()
            .title("x")
            .open_class_name("is-open")
            .children(Element::tag("a").class_name("link")),
    );
    assert_eq!(tip.render().child.unwrap().plain_class(), Some("link"));
    tip.request_open(true);
    assert_eq!(tip.render().child.unwrap().plain_class(), Some("link is-open"));
}

#[test]
fn custom_prefix_and_container_reach_popup() {
    let mut tip = Tooltip::new(
        TooltipProps::new()
            .title("x")
            .prefix_cls("hint")
            .color("#abcdef")
            .get_popup_container(|_| NodeId(7)),
    );
    let popup = tip.render().popup;
    assert_eq!(popup.prefix_cls, "hint");
    assert_eq!(
        popup.arrow_style.get("--tip-arrow-background-color"),
        Some("#abcdef")
    );
    let container = popup.container.expect("container");
    assert_eq!(container(NodeId(1)), NodeId(7));
}

#[test]
fn bound_class_on_disabled_child_stays_inside() {
    let binding = ClassName::Bound(tipkit_tooltip::element::BindingId(3));
    let mut tip = Tooltip::new(
        TooltipProps::new().title("x").children(
            Element::control(InteractiveKind::Switch)
                .loading(true)
                .class_name(binding.clone()),
        ),
    );
    let child = tip.render().child.expect("child");
    assert_eq!(child.plain_class(), Some("tip-tooltip-disabled-compatible-wrapper"));
    assert_eq!(child.children[0].props.class_name, Some(binding));
}

// ============================================================================
// Properties
// ============================================================================

fn placement() -> impl Strategy<Value = PlacementName> {
    proptest::sample::select(PlacementName::ALL.to_vec())
}

proptest! {
    #[test]
    fn listeners_hear_each_change_once(requests in proptest::collection::vec(any::<bool>(), 0..32)) {
        let (log, cb) = recorder();
        let mut tip = Tooltip::new(TooltipProps::new().title("x").on_open_change(cb));
        let mut expected = Vec::new();
        let mut current = false;
        for open in requests {
            if open != current {
                expected.push(open);
                current = open;
            }
            tip.request_open(open);
        }
        prop_assert_eq!(log.borrow().clone(), expected);
        prop_assert_eq!(tip.is_open(), current);
    }

    #[test]
    fn primary_side_always_sets_origin(
        name in placement(),
        w in 1.0f32..400.0,
        h in 1.0f32..400.0,
    ) {
        let mut tip = Tooltip::new(TooltipProps::new().title("x"));
        let handle = tip.align_handle();
        let align = engine_align(&mut tip, name, Offset::new(3.0, 5.0));
        let mut overlay = Overlay::sized(w, h);
        let origin = handle.on_align(Some(&mut overlay), &align).expect("preset");
        let (axis, other) = match name.side() {
            Side::Top | Side::Bottom => (origin.top, origin.left),
            Side::Left | Side::Right => (origin.left, origin.top),
        };
        prop_assert!(matches!(axis, CssLength::Px(_)));
        // Non-zero offsets move the suffix axis too; plain sides stay centered.
        prop_assert_eq!(matches!(other, CssLength::Px(_)), name.suffix().is_some());
    }
}
