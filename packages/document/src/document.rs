//! # Document Model
//!
//! The ordered sequence of elements that makes up one template. Sequence order
//! is layout order. The document guarantees:
//!
//! - element ids are pairwise distinct, and minted ids are never reused
//! - every element carries a complete content/style record for its type
//! - numeric fields stay inside their registered range and colours are
//!   normalized hex, whether set by a patch or loaded from a template
//!
//! Operations that target a missing id are no-ops and report so through
//! their return value instead of failing.

use crate::element::{Element, ElementId, ElementType};
use crate::errors::DocumentError;
use crate::fields::{FieldError, FieldValue, Patch, Record};
use crate::id_generator::IdGenerator;
use crate::registry::{self, FieldSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Types seeded into a document opened without any elements
pub const STARTER_TYPES: &[ElementType] = &[
    ElementType::Header,
    ElementType::Text,
    ElementType::Button,
    ElementType::Footer,
];

/// Editable email template
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    elements: Vec<Element>,
    ids: IdGenerator,
}

/// Document value handed to and received from the outside world
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,

    /// Draft (`false`) or published (`true`) intent
    #[serde(default)]
    pub published: bool,

    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Template {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Document {
    /// Empty document
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    /// Document from existing elements, rejecting duplicate ids.
    ///
    /// Every registered field is brought into its domain the same way a patch
    /// would; a colour that is not a hex colour fails the load.
    pub fn from_elements(name: impl Into<String>, mut elements: Vec<Element>) -> Result<Self, DocumentError> {
        let mut seen = HashSet::new();
        let mut ids = IdGenerator::new();

        for element in &mut elements {
            if !seen.insert(element.id.clone()) {
                return Err(DocumentError::DuplicateId(element.id.clone()));
            }
            ids.observe(&element.id);
            normalize_element(element)?;
        }

        Ok(Self {
            name: name.into(),
            elements,
            ids,
        })
    }

    /// Document for a new editing session; an empty input gets the starter set
    pub fn open(name: impl Into<String>, elements: Vec<Element>) -> Result<Self, DocumentError> {
        if elements.is_empty() {
            return Ok(Self::starter(name));
        }
        Self::from_elements(name, elements)
    }

    /// Minimal starter document: header, text, button, footer
    pub fn starter(name: impl Into<String>) -> Self {
        let mut doc = Self::new(name);
        for ty in STARTER_TYPES {
            doc.append(*ty);
        }
        doc
    }

    pub fn from_template(template: Template) -> Result<Self, DocumentError> {
        Self::from_elements(template.name, template.elements)
    }

    /// Snapshot of the document as a hand-off value
    pub fn to_template(&self, published: bool) -> Template {
        Template {
            name: self.name.clone(),
            published,
            elements: self.elements.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == id)
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Ids in document order
    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id.clone()).collect()
    }

    /// Append a new element with registered defaults
    pub fn append(&mut self, element_type: ElementType) -> ElementId {
        self.insert(self.elements.len(), element_type)
    }

    /// Insert a new element with registered defaults at `index` (clamped)
    pub fn insert(&mut self, index: usize, element_type: ElementType) -> ElementId {
        let id = self.mint(element_type);
        let index = index.min(self.elements.len());
        self.elements.insert(index, Element::new(id.clone(), element_type));
        debug!(element_id = %id, index, "Inserted element");
        id
    }

    /// Insert `element` right after `source_id`.
    ///
    /// No-op when the source is missing, the element's id is already taken or
    /// one of its fields cannot be brought into its domain.
    pub fn insert_after(&mut self, source_id: &ElementId, mut element: Element) -> bool {
        let Some(index) = self.index_of(source_id) else {
            debug!(source_id = %source_id, "insert_after: source not found");
            return false;
        };
        if self.contains(&element.id) {
            debug!(element_id = %element.id, "insert_after: id already present");
            return false;
        }
        if let Err(err) = normalize_element(&mut element) {
            debug!(element_id = %element.id, %err, "insert_after: invalid element");
            return false;
        }

        self.ids.observe(&element.id);
        self.elements.insert(index + 1, element);
        true
    }

    /// Copy an element under a fresh id, placed right after the original
    pub fn duplicate(&mut self, id: &ElementId) -> Option<ElementId> {
        let source = self.get(id)?;
        let kind = source.kind.clone();
        let new_id = self.mint(kind.element_type());

        let copy = Element {
            id: new_id.clone(),
            kind,
        };
        if self.insert_after(id, copy) {
            debug!(source_id = %id, element_id = %new_id, "Duplicated element");
            Some(new_id)
        } else {
            None
        }
    }

    /// Next generated id not already used by an element
    fn mint(&mut self, element_type: ElementType) -> ElementId {
        loop {
            let id = self.ids.new_id(element_type);
            if !self.contains(&id) {
                return id;
            }
        }
    }

    /// Remove an element; no-op if it does not exist
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        let index = self.index_of(id)?;
        debug!(element_id = %id, index, "Removed element");
        Some(self.elements.remove(index))
    }

    /// Move the element at `from` to `to`, shifting the ones in between.
    ///
    /// Out-of-range indices and `from == to` leave the document untouched.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.elements.len();
        if from >= len || to >= len || from == to {
            return false;
        }

        let element = self.elements.remove(from);
        self.elements.insert(to, element);
        debug!(from, to, "Reordered element");
        true
    }

    /// Shallow-merge `patch` into an element's content and styles.
    ///
    /// Returns `Ok(false)` if the element does not exist. The patch is applied
    /// atomically: an unknown key or a value of the wrong shape rejects the
    /// whole patch. Numbers are clamped to the field's registered range.
    pub fn patch(&mut self, id: &ElementId, patch: &Patch) -> Result<bool, DocumentError> {
        let Some(index) = self.index_of(id) else {
            debug!(element_id = %id, "patch: element not found");
            return Ok(false);
        };

        let element_type = self.elements[index].element_type();
        let descriptor = registry::descriptor(element_type);
        let mut kind = self.elements[index].kind.clone();

        for (key, value) in &patch.content {
            let spec = descriptor.content_field(key);
            apply_field(kind.content_mut(), element_type, spec, key, value)?;
        }
        for (key, value) in &patch.styles {
            let spec = descriptor.style_field(key);
            apply_field(kind.styles_mut(), element_type, spec, key, value)?;
        }

        self.elements[index].kind = kind;
        debug!(element_id = %id, ?patch, "Patched element");
        Ok(true)
    }
}

fn apply_field(
    record: &mut dyn Record,
    element_type: ElementType,
    spec: Option<&FieldSpec>,
    key: &str,
    value: &FieldValue,
) -> Result<(), DocumentError> {
    let unknown = || DocumentError::UnknownField {
        element_type,
        key: key.to_string(),
    };

    let invalid = || DocumentError::InvalidValue {
        element_type,
        key: key.to_string(),
        value: value.clone(),
    };

    let spec = spec.ok_or_else(unknown)?;
    let normalized = spec.normalize(value.clone()).ok_or_else(invalid)?;
    record.set(key, normalized).map_err(|err| match err {
        FieldError::Unknown => unknown(),
        FieldError::Mismatch => invalid(),
    })
}

/// Re-set every registered field through [`apply_field`]
fn normalize_element(element: &mut Element) -> Result<(), DocumentError> {
    let element_type = element.element_type();
    let descriptor = registry::descriptor(element_type);

    for spec in descriptor.content_fields {
        if let Some(value) = element.kind.content().get(spec.key) {
            apply_field(element.kind.content_mut(), element_type, Some(spec), spec.key, &value)?;
        }
    }
    for spec in descriptor.style_fields {
        if let Some(value) = element.kind.styles().get(spec.key) {
            apply_field(element.kind.styles_mut(), element_type, Some(spec), spec.key, &value)?;
        }
    }
    Ok(())
}
