#![forbid(unsafe_code)]

//! Minimal element tree for tooltip triggers and overlay content.
//!
//! Elements are plain data: a kind, a handful of props the tooltip cares
//! about, and children. Host bindings convert them into real nodes.
//!
//! Interactive controls declare what they are through [`Interactive`]
//! instead of the tooltip guessing from the element type.

use tipkit_core::style::InlineStyle;

/// Identifier of a mounted host node (trigger, container, overlay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Identifier of a reactive class binding owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(pub u64);

/// Class attribute of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassName {
    /// Space-separated class list.
    Plain(String),
    /// Computed by the host through a binding; opaque to the tooltip.
    Bound(BindingId),
}

impl ClassName {
    /// The class text, if it is a plain list.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Self::Plain(s) => Some(s),
            Self::Bound(_) => None,
        }
    }
}

impl From<&str> for ClassName {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_owned())
    }
}

impl From<String> for ClassName {
    fn from(s: String) -> Self {
        Self::Plain(s)
    }
}

/// Join class names, skipping empty parts.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts.into_iter().map(str::trim).filter(|p| !p.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// The kind of interactive control an element represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractiveKind {
    Button,
    Switch,
    Checkbox,
    Radio,
    /// A plain host `<button>`.
    NativeButton,
}

/// What an interactive control reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCapability {
    pub kind: InteractiveKind,
    /// The control does not accept pointer or focus input right now.
    pub disabled: bool,
}

/// Implemented by anything that can sit under a tooltip as its trigger.
pub trait Interactive {
    /// `None` for non-interactive content.
    fn capability(&self) -> Option<ControlCapability>;
}

/// Element type.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// A library control (button, switch, ...).
    Control(InteractiveKind),
    /// A host tag such as `span` or `button`.
    Tag(String),
    /// A text node.
    Text(String),
}

/// Props read or written by the tooltip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementProps {
    pub disabled: bool,
    /// Busy state; switches treat it like `disabled`.
    pub loading: bool,
    /// Stretches to the container width.
    pub block: bool,
    pub style: InlineStyle,
    pub class_name: Option<ClassName>,
}

/// A renderable element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: ElementKind,
    pub props: ElementProps,
    pub children: Vec<Element>,
}

impl Element {
    fn with_kind(kind: ElementKind) -> Self {
        Self {
            kind,
            props: ElementProps::default(),
            children: Vec::new(),
        }
    }

    /// A library control.
    pub fn control(kind: InteractiveKind) -> Self {
        Self::with_kind(ElementKind::Control(kind))
    }

    /// A host tag.
    pub fn tag(name: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Tag(name.into()))
    }

    /// A text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_kind(ElementKind::Text(text.into()))
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.disabled = disabled;
        self
    }

    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.props.loading = loading;
        self
    }

    #[must_use]
    pub fn block(mut self, block: bool) -> Self {
        self.props.block = block;
        self
    }

    #[must_use]
    pub fn style(mut self, style: InlineStyle) -> Self {
        self.props.style = style;
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<ClassName>) -> Self {
        self.props.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Plain class text, if any.
    pub fn plain_class(&self) -> Option<&str> {
        self.props.class_name.as_ref().and_then(ClassName::as_plain)
    }
}

impl Interactive for Element {
    fn capability(&self) -> Option<ControlCapability> {
        let p = &self.props;
        let (kind, disabled) = match &self.kind {
            ElementKind::Control(kind @ InteractiveKind::Switch) => (*kind, p.disabled || p.loading),
            ElementKind::Control(kind) => (*kind, p.disabled),
            ElementKind::Tag(tag) if tag.eq_ignore_ascii_case("button") => {
                (InteractiveKind::NativeButton, p.disabled)
            }
            ElementKind::Tag(_) | ElementKind::Text(_) => return None,
        };
        Some(ControlCapability { kind, disabled })
    }
}
