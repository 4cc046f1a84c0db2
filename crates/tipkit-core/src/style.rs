#![forbid(unsafe_code)]

//! Inline style maps and CSS lengths.
//!
//! [`InlineStyle`] is the property bag carried by rendered elements. Keys
//! use the camelCase property names of DOM style objects (`zIndex`,
//! `pointerEvents`); custom properties keep their `--` prefix. Iteration
//! order is by key so rendered output is deterministic.

use std::collections::BTreeMap;
use std::fmt;

/// A CSS length value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CssLength {
    /// Absolute pixels.
    Px(f32),
    /// Percentage of the reference box.
    Percent(f32),
}

impl CssLength {
    /// The `50%` length, the center of the reference box.
    pub const CENTER: Self = Self::Percent(50.0);
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding 0.0 folds -0.0 into 0.0 so negated zero offsets print as "0px".
        match *self {
            Self::Px(v) => write!(f, "{}px", v + 0.0),
            Self::Percent(v) => write!(f, "{}%", v + 0.0),
        }
    }
}

/// An inline style declaration block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InlineStyle {
    props: BTreeMap<String, String>,
}

impl InlineStyle {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.props.insert(key.into(), value.into());
    }

    /// Get a property value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(String::as_str)
    }

    /// Check whether a property is declared.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.props.contains_key(key)
    }

    /// Number of declared properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Check whether no properties are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterate `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of this style; `other` wins on conflicts.
    pub fn extend(&mut self, other: &InlineStyle) {
        for (k, v) in &other.props {
            self.props.insert(k.clone(), v.clone());
        }
    }

    /// Partition into `(picked, omitted)` by key membership in `keys`.
    #[must_use]
    pub fn split(&self, keys: &[&str]) -> (InlineStyle, InlineStyle) {
        let mut picked = InlineStyle::new();
        let mut omitted = InlineStyle::new();
        for (k, v) in &self.props {
            let target = if keys.contains(&k.as_str()) {
                &mut picked
            } else {
                &mut omitted
            };
            target.props.insert(k.clone(), v.clone());
        }
        (picked, omitted)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InlineStyle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = InlineStyle::new();
        for (k, v) in iter {
            style.set(k, v);
        }
        style
    }
}

impl fmt::Display for InlineStyle {
    /// Serialize as a declaration list, e.g. `color: red; zIndex: 3`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.props.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        Ok(())
    }
}
