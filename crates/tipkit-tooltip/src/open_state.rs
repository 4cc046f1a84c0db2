#![forbid(unsafe_code)]

//! Open/closed state for a tooltip.
//!
//! Visibility comes from four optional inputs with a fixed precedence:
//!
//! ```text
//! open > visible > default_open > default_visible
//! ```
//!
//! If `open` or `visible` is present the state is *controlled*: the caller
//! owns the value and a change request only notifies it. Otherwise the
//! state is *uncontrolled*: the default seeds an internal value that change
//! requests update directly.
//!
//! # Invariants
//!
//! 1. Without renderable content the tooltip renders closed, whatever the
//!    tracked value says.
//! 2. Change requests made without content never notify listeners.
//! 3. A request notifies at most once per distinct value; repeating it is
//!    silent.
//! 4. Uncontrolled requests made without content are still tracked, so
//!    content arriving later shows the tooltip in the requested state.

/// Who owns the visibility value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Controlled,
    Uncontrolled,
}

/// Raw visibility inputs from props.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenInputs {
    pub open: Option<bool>,
    /// Deprecated alias of `open`.
    pub visible: Option<bool>,
    pub default_open: Option<bool>,
    /// Deprecated alias of `default_open`.
    pub default_visible: Option<bool>,
}

impl OpenInputs {
    /// The caller-owned value, if any.
    pub fn controlled(&self) -> Option<bool> {
        self.open.or(self.visible)
    }

    /// The initial uncontrolled value.
    pub fn default_value(&self) -> bool {
        self.default_open.or(self.default_visible).unwrap_or(false)
    }
}

/// Merged visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenState {
    mode: OpenMode,
    value: bool,
    /// Controlled mode: last value announced to the caller but not yet
    /// reflected back through props.
    pending: Option<bool>,
}

impl OpenState {
    /// Resolve the initial state.
    pub fn new(inputs: &OpenInputs) -> Self {
        match inputs.controlled() {
            Some(value) => Self {
                mode: OpenMode::Controlled,
                value,
                pending: None,
            },
            None => Self {
                mode: OpenMode::Uncontrolled,
                value: inputs.default_value(),
                pending: None,
            },
        }
    }

    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// The tracked value, ignoring content.
    pub fn value(&self) -> bool {
        self.value
    }

    /// Re-read props on a new render.
    ///
    /// A controlled value always wins. Dropping the controlled value
    /// switches to uncontrolled mode and keeps the last value. Defaults are
    /// never re-read after initialization.
    pub fn sync(&mut self, inputs: &OpenInputs) {
        self.pending = None;
        match inputs.controlled() {
            Some(value) => {
                self.mode = OpenMode::Controlled;
                self.value = value;
            }
            None => self.mode = OpenMode::Uncontrolled,
        }
    }

    /// Handle a change request from user interaction.
    ///
    /// Returns the value to announce to listeners, or `None` when the
    /// request must stay silent.
    pub fn request_open(&mut self, open: bool, has_content: bool) -> Option<bool> {
        match self.mode {
            OpenMode::Uncontrolled => {
                let changed = self.value != open;
                self.value = open;
                if !has_content {
                    tracing::trace!(open, "open request without content tracked silently");
                    return None;
                }
                changed.then_some(open)
            }
            OpenMode::Controlled => {
                if !has_content {
                    return None;
                }
                let current = self.pending.unwrap_or(self.value);
                if current == open {
                    return None;
                }
                self.pending = Some(open);
                Some(open)
            }
        }
    }

    /// Whether the overlay should render as open.
    pub fn is_open(&self, has_content: bool) -> bool {
        has_content && self.value
    }
}
