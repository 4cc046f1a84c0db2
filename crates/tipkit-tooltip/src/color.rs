#![forbid(unsafe_code)]

//! Overlay color resolution.
//!
//! Preset names map to a modifier class that the stylesheet colors; any
//! other value is treated as a literal CSS color and written inline on the
//! overlay and its arrow.

use tipkit_core::style::InlineStyle;

/// Named palette presets. Each also accepts an `-inverse` suffix.
pub const PRESET_COLORS: [&str; 13] = [
    "pink", "red", "yellow", "orange", "cyan", "green", "blue", "purple", "geekblue", "magenta",
    "volcano", "gold", "lime",
];

/// Custom property read by the arrow's stylesheet rule.
pub const ARROW_BACKGROUND_VAR: &str = "--tip-arrow-background-color";

/// Check whether `color` names a preset.
pub fn is_preset_color(color: &str) -> bool {
    let base = color.strip_suffix("-inverse").unwrap_or(color);
    PRESET_COLORS.contains(&base)
}

/// Styling derived from a `color` prop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorInfo {
    /// Modifier class for presets, empty otherwise.
    pub class_name: String,
    pub overlay_style: InlineStyle,
    pub arrow_style: InlineStyle,
}

/// Resolve a `color` prop against the tooltip prefix.
pub fn parse_color(prefix: &str, color: Option<&str>) -> ColorInfo {
    let Some(color) = color.filter(|c| !c.is_empty()) else {
        return ColorInfo::default();
    };
    if is_preset_color(color) {
        return ColorInfo {
            class_name: format!("{prefix}-{color}"),
            ..ColorInfo::default()
        };
    }
    ColorInfo {
        class_name: String::new(),
        overlay_style: InlineStyle::new().with("background", color),
        arrow_style: InlineStyle::new().with(ARROW_BACKGROUND_VAR, color),
    }
}
