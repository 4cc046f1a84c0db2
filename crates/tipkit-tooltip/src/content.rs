#![forbid(unsafe_code)]

//! Tooltip title and overlay content.

use std::fmt;
use std::rc::Rc;

use crate::element::Element;

/// Produces overlay content lazily, when the overlay renders.
pub type ContentFn = Rc<dyn Fn() -> Element>;

/// Something a tooltip can show.
#[derive(Clone)]
pub enum Content {
    Text(String),
    /// A numeric title. Zero is real content; only NaN is empty.
    Number(f64),
    Element(Element),
    Render(ContentFn),
}

impl Content {
    /// Lazily rendered content.
    pub fn render(f: impl Fn() -> Element + 'static) -> Self {
        Self::Render(Rc::new(f))
    }

    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => n.is_nan(),
            Self::Element(_) | Self::Render(_) => false,
        }
    }

    /// Materialize into an element.
    pub fn to_element(&self) -> Element {
        match self {
            Self::Text(s) => Element::text(s.clone()),
            Self::Number(n) => Element::text(n.to_string()),
            Self::Element(el) => el.clone(),
            Self::Render(f) => f(),
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Element(el) => f.debug_tuple("Element").field(el).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Content {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Content {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<Element> for Content {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// Whether a title/overlay pair has anything to show.
pub fn has_renderable_content(title: Option<&Content>, overlay: Option<&Content>) -> bool {
    [title, overlay]
        .into_iter()
        .flatten()
        .any(|content| !content.is_empty())
}
