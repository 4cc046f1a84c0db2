#![forbid(unsafe_code)]

//! Hover support for disabled triggers.
//!
//! Disabled controls swallow pointer events in some hosts, so a tooltip on
//! a disabled button would never open. The adapter wraps such a child in an
//! inert `span` that receives the events instead:
//!
//! - layout properties (position, insets, float, display, z-index) move to
//!   the wrapper so the child keeps its place in the layout;
//! - the child keeps every other property and gets `pointerEvents: none`;
//! - the child's class name moves to the wrapper.

use tipkit_core::style::InlineStyle;

use crate::element::{ClassName, Element, Interactive, join_classes};

/// Style keys that affect where the element sits in the layout.
pub const LAYOUT_KEYS: [&str; 8] = [
    "position", "left", "right", "top", "bottom", "float", "display", "zIndex",
];

/// Check whether a trigger is a disabled interactive control.
pub fn is_disabled_control<T: Interactive + ?Sized>(node: &T) -> bool {
    node.capability().is_some_and(|cap| cap.disabled)
}

/// Wrap a disabled control so hover and focus still reach the tooltip.
///
/// Anything else is returned unchanged.
pub fn adapt_disabled_child(child: Element, prefix: &str) -> Element {
    if !is_disabled_control(&child) {
        return child;
    }

    let (picked, omitted) = child.props.style.split(&LAYOUT_KEYS);

    let mut wrapper_style = InlineStyle::new().with("display", "inline-block");
    wrapper_style.extend(&picked);
    wrapper_style.set("cursor", "not-allowed");
    if child.props.block {
        wrapper_style.set("width", "100%");
    }

    let marker = format!("{prefix}-disabled-compatible-wrapper");
    let mut inner = child;
    let wrapper_class = match inner.props.class_name.take() {
        Some(ClassName::Plain(cls)) => join_classes([cls.as_str(), marker.as_str()]),
        // A bound class cannot be merged; it stays with the child.
        bound @ Some(ClassName::Bound(_)) => {
            inner.props.class_name = bound;
            marker
        }
        None => marker,
    };

    inner.props.style = omitted.with("pointerEvents", "none");
    tracing::debug!(
        moved = picked.len(),
        kept = inner.props.style.len(),
        "wrapped disabled tooltip trigger"
    );

    Element::tag("span")
        .style(wrapper_style)
        .class_name(wrapper_class)
        .child(inner)
}

/// Mark a trigger as open by appending `open_class`.
///
/// Only absent or plain class names are merged; a bound class is left as is.
pub fn with_open_class(mut child: Element, open_class: &str) -> Element {
    if matches!(child.props.class_name, Some(ClassName::Bound(_))) {
        return child;
    }
    let merged = join_classes([child.plain_class().unwrap_or_default(), open_class]);
    child.props.class_name = Some(ClassName::Plain(merged));
    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{BindingId, ElementKind, InteractiveKind};
    use pretty_assertions::assert_eq;

    fn styled_button() -> Element {
        Element::control(InteractiveKind::Button)
            .disabled(true)
            .class_name("btn primary")
            .style(
                InlineStyle::new()
                    .with("position", "absolute")
                    .with("color", "red"),
            )
    }

    #[test]
    fn disabled_button_style_is_split() {
        let out = adapt_disabled_child(styled_button(), "tip-tooltip");
        assert_eq!(out.kind, ElementKind::Tag("span".into()));
        let wrapper = &out.props.style;
        assert_eq!(wrapper.get("position"), Some("absolute"));
        assert_eq!(wrapper.get("display"), Some("inline-block"));
        assert_eq!(wrapper.get("cursor"), Some("not-allowed"));
        assert!(!wrapper.contains("color"));
        assert!(!wrapper.contains("width"));

        let inner = &out.children[0];
        assert_eq!(inner.props.style.get("color"), Some("red"));
        assert_eq!(inner.props.style.get("pointerEvents"), Some("none"));
        assert!(!inner.props.style.contains("position"));
    }

    #[test]
    fn class_moves_to_wrapper() {
        let out = adapt_disabled_child(styled_button(), "tip-tooltip");
        assert_eq!(
            out.plain_class(),
            Some("btn primary tip-tooltip-disabled-compatible-wrapper")
        );
        assert_eq!(out.children[0].props.class_name, None);
    }

    #[test]
    fn child_display_overrides_inline_block() {
        let child = Element::tag("button")
            .disabled(true)
            .style(InlineStyle::new().with("display", "flex"));
        let out = adapt_disabled_child(child, "p");
        assert_eq!(out.props.style.get("display"), Some("flex"));
        assert!(!out.children[0].props.style.contains("display"));
    }

    #[test]
    fn block_child_gets_full_width_wrapper() {
        let child = Element::control(InteractiveKind::Button)
            .disabled(true)
            .block(true);
        let out = adapt_disabled_child(child, "p");
        assert_eq!(out.props.style.get("width"), Some("100%"));
    }

    #[test]
    fn loading_switch_and_disabled_radio_are_wrapped() {
        let sw = Element::control(InteractiveKind::Switch).loading(true);
        assert!(matches!(adapt_disabled_child(sw, "p").kind, ElementKind::Tag(ref t) if t == "span"));
        let radio = Element::control(InteractiveKind::Radio).disabled(true);
        assert_eq!(adapt_disabled_child(radio, "p").children.len(), 1);
    }

    #[test]
    fn enabled_or_plain_children_pass_through() {
        let enabled = Element::control(InteractiveKind::Button).style(
            InlineStyle::new().with("position", "absolute"),
        );
        assert_eq!(adapt_disabled_child(enabled.clone(), "p"), enabled);
        let span = Element::tag("span").disabled(true);
        assert_eq!(adapt_disabled_child(span.clone(), "p"), span);
    }

    #[test]
    fn bound_class_stays_on_child() {
        let child = Element::control(InteractiveKind::Checkbox)
            .disabled(true)
            .class_name(ClassName::Bound(BindingId(9)));
        let out = adapt_disabled_child(child, "p");
        assert_eq!(out.plain_class(), Some("p-disabled-compatible-wrapper"));
        assert_eq!(
            out.children[0].props.class_name,
            Some(ClassName::Bound(BindingId(9)))
        );
    }

    #[test]
    fn open_class_merges_plain_only() {
        let el = with_open_class(Element::tag("a").class_name("link"), "tip-tooltip-open");
        assert_eq!(el.plain_class(), Some("link tip-tooltip-open"));
        let el = with_open_class(Element::tag("a"), "x-open");
        assert_eq!(el.plain_class(), Some("x-open"));
        let bound = Element::tag("a").class_name(ClassName::Bound(BindingId(1)));
        assert_eq!(with_open_class(bound.clone(), "x-open"), bound);
    }
}
