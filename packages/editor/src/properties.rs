//! # Property Editor
//!
//! Builds the form for the selected element from the type registry and turns
//! raw form input into one-key patches.
//!
//! Input coercion per field kind:
//!
//! | kind | accepted input | stored as |
//! |---|---|---|
//! | `number` | leading integer, clamped; anything else → minimum | `Number` |
//! | `color` | `#rgb`, `rgb`, `#rrggbb`, `rrggbb` | lowercase `#rrggbb` |
//! | `choice` | one of the options, any case | the option |
//! | `text`, `multiline`, `url` | anything | verbatim |
//!
//! Rejected input produces no patch at all.

use letterpress_document::{
    descriptor, normalize_color, Element, ElementId, ElementType, FieldKind, FieldSpec, FieldValue, Patch,
    Record,
};
use serde::Serialize;

/// Which record of the element a field lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldGroup {
    Content,
    Styles,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
    pub group: FieldGroup,
    #[serde(flatten)]
    pub spec: FieldSpec,
    pub value: FieldValue,
}

/// Editable fields of one element, with their current values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySheet {
    pub element_id: ElementId,
    pub element_type: ElementType,
    pub label: &'static str,
    pub content: Vec<FieldEntry>,
    pub styles: Vec<FieldEntry>,
}

impl PropertySheet {
    pub fn field(&self, group: FieldGroup, key: &str) -> Option<&FieldEntry> {
        let entries = match group {
            FieldGroup::Content => &self.content,
            FieldGroup::Styles => &self.styles,
        };
        entries.iter().find(|entry| entry.spec.key == key)
    }
}

pub fn property_sheet(element: &Element) -> PropertySheet {
    let desc = descriptor(element.element_type());

    PropertySheet {
        element_id: element.id.clone(),
        element_type: desc.element_type,
        label: desc.label,
        content: entries(FieldGroup::Content, desc.content_fields, element.kind.content()),
        styles: entries(FieldGroup::Styles, desc.style_fields, element.kind.styles()),
    }
}

fn entries(group: FieldGroup, specs: &[FieldSpec], record: &dyn Record) -> Vec<FieldEntry> {
    specs
        .iter()
        .filter_map(|spec| {
            let value = record.get(spec.key)?;
            Some(FieldEntry {
                group,
                spec: *spec,
                value,
            })
        })
        .collect()
}

/// Coerce raw form input into a value admitted by `spec`
pub fn coerce(spec: &FieldSpec, input: &str) -> Option<FieldValue> {
    match spec.kind {
        FieldKind::Text | FieldKind::Multiline | FieldKind::Url => Some(FieldValue::from(input)),
        FieldKind::Number { min, max } => Some(FieldValue::Number(coerce_number(input, min, max))),
        FieldKind::Color => normalize_color(input).map(FieldValue::Text),
        FieldKind::Choice { options } => options
            .iter()
            .find(|option| option.eq_ignore_ascii_case(input.trim()))
            .map(|option| FieldValue::from(*option)),
    }
}

/// One-key patch for a field edit, or `None` if the input is rejected
pub fn field_patch(group: FieldGroup, spec: &FieldSpec, input: &str) -> Option<Patch> {
    let value = coerce(spec, input)?;
    Some(match group {
        FieldGroup::Content => Patch::new().content(spec.key, value),
        FieldGroup::Styles => Patch::new().style(spec.key, value),
    })
}

fn coerce_number(input: &str, min: u32, max: u32) -> u32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: Vec<u64> = rest
        .chars()
        .map_while(|c| c.to_digit(10))
        .map(u64::from)
        .collect();
    if digits.is_empty() || negative {
        return min;
    }

    let n = digits
        .iter()
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(*d));
    u32::try_from(n).unwrap_or(u32::MAX).clamp(min, max)
}
