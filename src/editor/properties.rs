//! Properties panel model and typed element edits.
//!
//! The panel mirrors the selected element: tag, text, classes, two colours
//! and three pixel lengths. Every control carries the edit it produces, so a
//! host wires input events to [`PanelControl::edit_for`] and hands the result
//! to [`VisualEditor::apply_edit`].

use super::VisualEditor;
use crate::color::rgb_to_hex;
use crate::constants::{FONT_SIZE_RANGE, MARGIN_RANGE, PADDING_RANGE, PANEL_PLACEHOLDER};
use crate::dom::{ComputedStyle, NodeId, StyleProperty};
use serde::Serialize;
use std::ops::RangeInclusive;

/// Colour properties edited with a colour picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorProperty {
    Background,
    Text,
}

impl ColorProperty {
    pub fn style_property(&self) -> StyleProperty {
        match self {
            ColorProperty::Background => StyleProperty::BackgroundColor,
            ColorProperty::Text => StyleProperty::Color,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorProperty::Background => "Background color",
            ColorProperty::Text => "Text color",
        }
    }
}

/// Pixel lengths edited with a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthProperty {
    FontSize,
    Padding,
    Margin,
}

impl LengthProperty {
    pub fn style_property(&self) -> StyleProperty {
        match self {
            LengthProperty::FontSize => StyleProperty::FontSize,
            LengthProperty::Padding => StyleProperty::Padding,
            LengthProperty::Margin => StyleProperty::Margin,
        }
    }

    pub fn range(&self) -> RangeInclusive<i32> {
        match self {
            LengthProperty::FontSize => FONT_SIZE_RANGE,
            LengthProperty::Padding => PADDING_RANGE,
            LengthProperty::Margin => MARGIN_RANGE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LengthProperty::FontSize => "Font size",
            LengthProperty::Padding => "Padding",
            LengthProperty::Margin => "Margin",
        }
    }
}

/// A numeric slider with its unit label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slider {
    pub property: LengthProperty,
    pub min: i32,
    pub max: i32,
    pub value: i32,
    /// Text next to the slider; starts as the computed value
    pub label: String,
}

impl Slider {
    /// Slider bound to a computed value such as `"16px"` or `"10px 4px"`.
    /// The leading integer is used; anything unparseable sits at the middle
    /// of the range, as a range input does.
    pub fn from_computed(property: LengthProperty, computed: &str) -> Self {
        let range = property.range();
        let (min, max) = (*range.start(), *range.end());
        let value = leading_integer(computed).unwrap_or(min + (max - min) / 2);
        Self {
            property,
            min,
            max,
            value: value.clamp(min, max),
            label: computed.to_string(),
        }
    }

    /// Move the slider; the label follows live as `<value>px`.
    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(self.min, self.max);
        self.label = px(self.value);
    }
}

fn px(value: i32) -> String {
    format!("{}px", value)
}

/// Integer prefix of a CSS value, the way `parseInt` reads it
fn leading_integer(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some((sign * magnitude).clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// Snapshot of the selected element shown in the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementProperties {
    pub element: NodeId,
    pub tag_name: String,
    pub text: String,
    pub class_name: String,
    pub background_color: String,
    pub color: String,
    pub font_size: Slider,
    pub padding: Slider,
    pub margin: Slider,
}

impl ElementProperties {
    pub fn slider(&self, property: LengthProperty) -> &Slider {
        match property {
            LengthProperty::FontSize => &self.font_size,
            LengthProperty::Padding => &self.padding,
            LengthProperty::Margin => &self.margin,
        }
    }

    pub fn slider_mut(&mut self, property: LengthProperty) -> &mut Slider {
        match property {
            LengthProperty::FontSize => &mut self.font_size,
            LengthProperty::Padding => &mut self.padding,
            LengthProperty::Margin => &mut self.margin,
        }
    }

    pub fn color(&self, property: ColorProperty) -> &str {
        match property {
            ColorProperty::Background => &self.background_color,
            ColorProperty::Text => &self.color,
        }
    }

    /// The panel's form controls, top to bottom.
    pub fn controls(&self) -> Vec<PanelControl> {
        vec![
            PanelControl::new("Tag", ControlKind::ReadOnly(self.tag_name.clone())),
            PanelControl::new("Text content", ControlKind::TextArea(self.text.clone())),
            PanelControl::new("CSS classes", ControlKind::TextInput(self.class_name.clone())),
            self.color_control(ColorProperty::Background),
            self.color_control(ColorProperty::Text),
            PanelControl::new(LengthProperty::FontSize.label(), ControlKind::Slider(self.font_size.clone())),
            PanelControl::new(LengthProperty::Padding.label(), ControlKind::Slider(self.padding.clone())),
            PanelControl::new(LengthProperty::Margin.label(), ControlKind::Slider(self.margin.clone())),
            PanelControl::new("Delete element", ControlKind::DeleteButton),
        ]
    }

    /// Refresh the colours and sliders from a recomputed style.
    pub fn apply_computed(&mut self, computed: &ComputedStyle) {
        self.background_color = rgb_to_hex(&computed.background_color);
        self.color = rgb_to_hex(&computed.color);
        self.font_size = Slider::from_computed(LengthProperty::FontSize, &computed.font_size);
        self.padding = Slider::from_computed(LengthProperty::Padding, &computed.padding);
        self.margin = Slider::from_computed(LengthProperty::Margin, &computed.margin);
    }

    fn color_control(&self, property: ColorProperty) -> PanelControl {
        PanelControl::new(
            property.label(),
            ControlKind::ColorPicker {
                property,
                value: self.color(property).to_string(),
            },
        )
    }
}

/// What the properties panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PropertiesPanel {
    Placeholder { message: String },
    Element(ElementProperties),
}

impl PropertiesPanel {
    pub fn placeholder() -> Self {
        Self::Placeholder {
            message: PANEL_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    pub fn element(&self) -> Option<&ElementProperties> {
        match self {
            Self::Element(props) => Some(props),
            Self::Placeholder { .. } => None,
        }
    }

    fn element_mut(&mut self) -> Option<&mut ElementProperties> {
        match self {
            Self::Element(props) => Some(props),
            Self::Placeholder { .. } => None,
        }
    }
}

/// A form control in the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelControl {
    pub label: &'static str,
    pub kind: ControlKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ControlKind {
    ReadOnly(String),
    TextArea(String),
    TextInput(String),
    ColorPicker { property: ColorProperty, value: String },
    Slider(Slider),
    DeleteButton,
}

impl PanelControl {
    fn new(label: &'static str, kind: ControlKind) -> Self {
        Self { label, kind }
    }

    /// Edit produced when the control's value changes to `raw`. Read-only
    /// controls and unparseable slider input produce nothing.
    pub fn edit_for(&self, raw: &str) -> Option<PanelEdit> {
        match &self.kind {
            ControlKind::ReadOnly(_) => None,
            ControlKind::TextArea(_) => Some(PanelEdit::Text(raw.to_string())),
            ControlKind::TextInput(_) => Some(PanelEdit::ClassName(raw.to_string())),
            ControlKind::ColorPicker { property, .. } => {
                Some(PanelEdit::Color(*property, raw.to_string()))
            }
            ControlKind::Slider(slider) => raw
                .trim()
                .parse::<i32>()
                .ok()
                .map(|value| PanelEdit::Length(slider.property, value)),
            ControlKind::DeleteButton => Some(PanelEdit::DeleteElement),
        }
    }
}

/// A committed change from the properties panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEdit {
    /// Replace the element's text content
    Text(String),
    /// Replace the element's whole class attribute
    ClassName(String),
    /// Set a colour from the picker (`#rrggbb`)
    Color(ColorProperty, String),
    /// Set a length in pixels
    Length(LengthProperty, i32),
    DeleteElement,
}

impl VisualEditor {
    pub fn properties_panel(&self) -> Option<&PropertiesPanel> {
        self.panel.as_ref()
    }

    /// Rebuild the panel from the selected element.
    pub(crate) fn refresh_properties_panel(&mut self) {
        if self.panel.is_none() {
            return;
        }
        let Some(element) = self.selection else { return };
        let Some(props) = self.element_properties(element) else { return };
        self.panel = Some(PropertiesPanel::Element(props));
    }

    fn element_properties(&self, element: NodeId) -> Option<ElementProperties> {
        let doc = &self.document;
        let computed = doc.computed_style(element)?;
        let mut props = ElementProperties {
            element,
            tag_name: doc.tag_name(element)?.to_string(),
            text: doc.text_content(element),
            class_name: doc.class_name(element),
            background_color: String::new(),
            color: String::new(),
            font_size: Slider::from_computed(LengthProperty::FontSize, ""),
            padding: Slider::from_computed(LengthProperty::Padding, ""),
            margin: Slider::from_computed(LengthProperty::Margin, ""),
        };
        props.apply_computed(&computed);
        Some(props)
    }

    fn panel_props_mut(&mut self) -> Option<&mut ElementProperties> {
        self.panel.as_mut()?.element_mut()
    }

    /// Overwrite the selected element's text. Nested elements are lost.
    pub fn update_element_text(&mut self, text: &str) -> bool {
        let Some(element) = self.selection else { return false };
        if let Err(e) = self.document.set_text_content(element, text) {
            tracing::warn!(?element, error = %e, "text update failed");
            return false;
        }
        if let Some(props) = self.panel_props_mut() {
            props.text = text.to_string();
        }
        true
    }

    /// Replace the selected element's class attribute.
    pub fn update_element_class(&mut self, class_name: &str) -> bool {
        let Some(element) = self.selection else { return false };
        if let Err(e) = self.document.set_class_name(element, class_name) {
            tracing::warn!(?element, error = %e, "class update failed");
            return false;
        }
        let current = self.document.class_name(element);
        if let Some(props) = self.panel_props_mut() {
            props.class_name = current;
        }
        true
    }

    /// Set an inline style property on the selected element. The panel's
    /// colours and sliders follow the recomputed style.
    pub fn update_element_style(&mut self, property: StyleProperty, value: &str) -> bool {
        let Some(element) = self.selection else { return false };
        if let Err(e) = self.document.set_style(element, property, value) {
            tracing::warn!(?element, ?property, error = %e, "style update failed");
            return false;
        }
        tracing::debug!(?element, property = property.css_name(), value, "style updated");

        let computed = self.document.computed_style(element);
        if let (Some(computed), Some(props)) = (computed, self.panel_props_mut()) {
            props.apply_computed(&computed);
        }
        true
    }

    /// Live slider movement: only the unit label changes.
    pub fn slider_input(&mut self, property: LengthProperty, value: i32) {
        if let Some(props) = self.panel_props_mut() {
            props.slider_mut(property).set_value(value);
        }
    }

    /// Apply a committed panel edit to the selected element. Returns false
    /// when nothing was changed (no selection, stale element).
    pub fn apply_edit(&mut self, edit: PanelEdit) -> bool {
        match edit {
            PanelEdit::Text(text) => self.update_element_text(&text),
            PanelEdit::ClassName(class_name) => self.update_element_class(&class_name),
            PanelEdit::Color(property, value) => {
                self.update_element_style(property.style_property(), &value)
            }
            PanelEdit::Length(property, value) => {
                let range = property.range();
                let value = value.clamp(*range.start(), *range.end());
                self.update_element_style(property.style_property(), &px(value))
            }
            PanelEdit::DeleteElement => self.delete_selected_element(),
        }
    }
}
