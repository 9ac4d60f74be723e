//! Inline style declarations and computed style resolution.
//!
//! Only the properties the editor can change are resolved into a
//! [`ComputedStyle`]; any other declaration found in a `style` attribute is
//! kept verbatim so it survives serialisation.

use crate::constants::{INITIAL_BACKGROUND_COLOR, INITIAL_COLOR, INITIAL_FONT_SIZE, INITIAL_LENGTH};
use serde::{Deserialize, Serialize};

/// The closed set of style properties the editor writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleProperty {
    BackgroundColor,
    Color,
    FontSize,
    Padding,
    Margin,
}

impl StyleProperty {
    pub const ALL: [StyleProperty; 5] = [
        StyleProperty::BackgroundColor,
        StyleProperty::Color,
        StyleProperty::FontSize,
        StyleProperty::Padding,
        StyleProperty::Margin,
    ];

    /// CSS property name as written in a `style` attribute
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::Color => "color",
            StyleProperty::FontSize => "font-size",
            StyleProperty::Padding => "padding",
            StyleProperty::Margin => "margin",
        }
    }

    /// Whether an unset value is taken from the parent element
    pub fn is_inherited(&self) -> bool {
        matches!(self, StyleProperty::Color | StyleProperty::FontSize)
    }

    /// Value reported when neither the element nor (for inherited
    /// properties) any ancestor sets the property
    pub fn initial_value(&self) -> &'static str {
        match self {
            StyleProperty::BackgroundColor => INITIAL_BACKGROUND_COLOR,
            StyleProperty::Color => INITIAL_COLOR,
            StyleProperty::FontSize => INITIAL_FONT_SIZE,
            StyleProperty::Padding | StyleProperty::Margin => INITIAL_LENGTH,
        }
    }
}

/// Ordered `property: value` declarations of an element's `style` attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `style` attribute value. Malformed declarations are skipped.
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        for declaration in css_text.split(';') {
            let Some((name, value)) = declaration.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            style.set(name, value);
        }
        style
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_ascii_lowercase();
        self.declarations
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set a declaration, replacing an existing one in place
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let name = name.to_ascii_lowercase();
        let value = value.into();
        match self.declarations.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        let index = self.declarations.iter().position(|(n, _)| *n == name)?;
        Some(self.declarations.remove(index).1)
    }

    pub fn property(&self, property: StyleProperty) -> Option<&str> {
        self.get(property.css_name())
    }

    pub fn set_property(&mut self, property: StyleProperty, value: impl Into<String>) {
        self.set(property.css_name(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Serialise back to `style` attribute text
    pub fn to_css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Resolved values of the editable properties, as a browser reports them
/// from `getComputedStyle`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedStyle {
    pub background_color: String,
    pub color: String,
    pub font_size: String,
    pub padding: String,
    pub margin: String,
}

impl ComputedStyle {
    pub fn get(&self, property: StyleProperty) -> &str {
        match property {
            StyleProperty::BackgroundColor => &self.background_color,
            StyleProperty::Color => &self.color,
            StyleProperty::FontSize => &self.font_size,
            StyleProperty::Padding => &self.padding,
            StyleProperty::Margin => &self.margin,
        }
    }

    pub(crate) fn set(&mut self, property: StyleProperty, value: String) {
        match property {
            StyleProperty::BackgroundColor => self.background_color = value,
            StyleProperty::Color => self.color = value,
            StyleProperty::FontSize => self.font_size = value,
            StyleProperty::Padding => self.padding = value,
            StyleProperty::Margin => self.margin = value,
        }
    }
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            background_color: INITIAL_BACKGROUND_COLOR.to_string(),
            color: INITIAL_COLOR.to_string(),
            font_size: INITIAL_FONT_SIZE.to_string(),
            padding: INITIAL_LENGTH.to_string(),
            margin: INITIAL_LENGTH.to_string(),
        }
    }
}

// ============================================================================
// Length resolution
// ============================================================================

/// Root font size that `rem` units and the `medium` keyword resolve to.
pub const ROOT_FONT_SIZE_PX: f64 = 16.0;

/// Split `12.5px` into its number and lowercased unit.
fn split_length(value: &str) -> Option<(f64, String)> {
    let value = value.trim();
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
        .unwrap_or(value.len());
    let number = value[..end].parse::<f64>().ok()?;
    if !number.is_finite() {
        return None;
    }
    Some((number, value[end..].trim().to_ascii_lowercase()))
}

/// Resolve a declared `font-size` to pixels. Relative units resolve
/// against the parent's font size; `None` means the declaration is not
/// understood and the element inherits instead.
pub fn resolve_font_size(value: &str, parent_px: f64) -> Option<f64> {
    let keyword = match value.trim().to_ascii_lowercase().as_str() {
        "xx-small" => Some(9.0),
        "x-small" => Some(10.0),
        "small" => Some(13.0),
        "medium" => Some(ROOT_FONT_SIZE_PX),
        "large" => Some(18.0),
        "x-large" => Some(24.0),
        "xx-large" => Some(32.0),
        "inherit" => Some(parent_px),
        _ => None,
    };
    if keyword.is_some() {
        return keyword;
    }

    let (number, unit) = split_length(value)?;
    if number < 0.0 {
        return None;
    }
    match unit.as_str() {
        "px" => Some(number),
        "em" => Some(number * parent_px),
        "%" => Some(number / 100.0 * parent_px),
        "rem" => Some(number * ROOT_FONT_SIZE_PX),
        "pt" => Some(number * 4.0 / 3.0),
        "" if number == 0.0 => Some(0.0),
        _ => None,
    }
}

/// Resolve a single `padding` / `margin` length to pixels. `em` resolves
/// against the element's own font size.
pub fn resolve_length(value: &str, font_px: f64) -> Option<f64> {
    let (number, unit) = split_length(value)?;
    match unit.as_str() {
        "px" => Some(number),
        "em" => Some(number * font_px),
        "rem" => Some(number * ROOT_FONT_SIZE_PX),
        "pt" => Some(number * 4.0 / 3.0),
        "" if number == 0.0 => Some(0.0),
        _ => None,
    }
}

/// Format pixels the way computed styles report them: `32px`, `12.8px`.
pub fn format_px(px: f64) -> String {
    let rounded = (px * 100.0).round() / 100.0;
    format!("{}px", rounded)
}

/// Pixel number of a computed `Npx` value.
pub fn px_number(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}
