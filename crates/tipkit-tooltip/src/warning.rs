#![forbid(unsafe_code)]

//! Development warnings for deprecated tooltip props.
//!
//! Deprecated props keep working; the warning only points at the
//! replacement. Each prop warns once per tooltip instance, and only in
//! debug builds.

use bitflags::bitflags;

bitflags! {
    /// Deprecated props in use.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DeprecatedProps: u8 {
        const VISIBLE              = 0b0001;
        const DEFAULT_VISIBLE      = 0b0010;
        const ON_VISIBLE_CHANGE    = 0b0100;
        const AFTER_VISIBLE_CHANGE = 0b1000;
    }
}

impl DeprecatedProps {
    /// `(deprecated, replacement)` prop names of a single flag.
    pub fn names(self) -> Option<(&'static str, &'static str)> {
        let names = if self == Self::VISIBLE {
            ("visible", "open")
        } else if self == Self::DEFAULT_VISIBLE {
            ("default_visible", "default_open")
        } else if self == Self::ON_VISIBLE_CHANGE {
            ("on_visible_change", "on_open_change")
        } else if self == Self::AFTER_VISIBLE_CHANGE {
            ("after_visible_change", "after_open_change")
        } else {
            return None;
        };
        Some(names)
    }
}

/// Per-instance deprecation reporter.
#[derive(Debug, Clone, Default)]
pub struct DeprecationWarner {
    warned: DeprecatedProps,
}

impl DeprecationWarner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warn about every prop in `used` not yet reported.
    ///
    /// Returns the props reported by this call (always empty in release
    /// builds).
    pub fn check(&mut self, component: &'static str, used: DeprecatedProps) -> DeprecatedProps {
        if !cfg!(debug_assertions) {
            return DeprecatedProps::empty();
        }
        let fresh = used.difference(self.warned);
        for flag in fresh.iter() {
            if let Some((old, new)) = flag.names() {
                tracing::warn!(
                    component,
                    deprecated = old,
                    replacement = new,
                    "[{component}] `{old}` is deprecated, please use `{new}` instead"
                );
            }
        }
        self.warned |= fresh;
        fresh
    }
}
