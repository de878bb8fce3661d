//! # Edit Session
//!
//! One user's editing session over one template. The session owns the
//! document together with its interaction state and is the only place the
//! document is mutated. After every applied mutation it keeps the rest of the
//! state consistent:
//!
//! - a created or duplicated element becomes the selection
//! - removing the selected element clears the selection
//! - removing the dragged element ends the gesture without another move

use crate::mutations::{Mutation, MutationOutcome, MutationResult};
use crate::properties::{field_patch, property_sheet, FieldGroup, PropertySheet};
use crate::render::{self, CanvasAction, Device, Rendered, ViewMode};
use crate::reorder::{DragEffect, DragEvent, DragState, ReorderEngine};
use crate::selection::Interaction;
use crate::errors::{EditorError, HostError};
use letterpress_document::{descriptor, Document, DocumentError, ElementId, ElementType, Template};
use tracing::{debug, info};

/// Destination of the exported markup
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), HostError>;
}

/// Receives finished templates (draft or published)
pub trait TemplateSink {
    fn save(&mut self, template: Template) -> Result<(), HostError>;
}

pub struct EditSession {
    document: Document,
    interaction: Interaction,
    reorder: ReorderEngine,
    view_mode: ViewMode,
    device: Device,

    /// Bumped on every mutation that changed the document
    version: u64,
}

impl EditSession {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            interaction: Interaction::new(),
            reorder: ReorderEngine::new(),
            view_mode: ViewMode::default(),
            device: Device::default(),
            version: 0,
        }
    }

    /// Session over a received template; an empty one gets the starter blocks
    pub fn open(template: Template) -> Result<Self, EditorError> {
        let document = Document::open(template.name, template.elements)?;
        info!(template = %document.name(), elements = document.len(), "Opened template");
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn selected(&self) -> Option<&ElementId> {
        self.interaction.selected.as_ref()
    }

    pub fn drag_state(&self) -> &DragState {
        self.reorder.state()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn device(&self) -> Device {
        self.device
    }

    /// Apply a mutation and its follow-up state changes
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let outcome = mutation.apply(&mut self.document)?;

        match &outcome {
            MutationOutcome::Unchanged => {
                debug!(mutation = mutation.name(), "Mutation had no effect");
            }
            MutationOutcome::Created(id) => {
                self.interaction.select(&self.document, id);
            }
            MutationOutcome::Removed(id) => {
                let cleared = self.interaction.element_removed(id);
                if let Some(effect) = self.reorder.element_removed(id) {
                    debug!(?effect, "Drag ended by removal");
                }
                debug!(element_id = %id, ?cleared, "Cleared interaction state");
            }
            MutationOutcome::Moved { .. } | MutationOutcome::Patched(_) => {}
        }

        if outcome != MutationOutcome::Unchanged {
            self.version += 1;
            debug!(mutation = mutation.name(), version = self.version, "Applied mutation");
        }

        Ok(MutationResult {
            version: self.version,
            outcome,
        })
    }

    /// Palette click: append a block with its defaults
    pub fn add_element(&mut self, element_type: ElementType) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::AppendElement { element_type })
    }

    pub fn insert_element(&mut self, index: usize, element_type: ElementType) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::InsertElement { index, element_type })
    }

    pub fn duplicate(&mut self, id: &ElementId) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::DuplicateElement { element_id: id.clone() })
    }

    pub fn remove(&mut self, id: &ElementId) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::RemoveElement { element_id: id.clone() })
    }

    pub fn select(&mut self, id: &ElementId) -> bool {
        self.interaction.select(&self.document, id)
    }

    pub fn clear_selection(&mut self) {
        self.interaction.clear_selection();
    }

    /// Property form for the selected element
    pub fn properties(&self) -> Option<PropertySheet> {
        let id = self.selected()?;
        self.document.get(id).map(property_sheet)
    }

    /// Form input on one field of the selected element.
    ///
    /// Input the field cannot accept leaves the document unchanged.
    pub fn edit_field(&mut self, group: FieldGroup, key: &str, input: &str) -> Result<MutationResult, EditorError> {
        let unchanged = MutationResult {
            version: self.version,
            outcome: MutationOutcome::Unchanged,
        };

        let Some(element) = self.selected().and_then(|id| self.document.get(id)) else {
            debug!(key, "Field edit without a selection");
            return Ok(unchanged);
        };

        let element_type = element.element_type();
        let desc = descriptor(element_type);
        let spec = match group {
            FieldGroup::Content => desc.content_field(key),
            FieldGroup::Styles => desc.style_field(key),
        }
        .ok_or_else(|| DocumentError::UnknownField {
            element_type,
            key: key.to_string(),
        })?;

        let Some(patch) = field_patch(group, spec, input) else {
            debug!(key, input, "Rejected field input");
            return Ok(unchanged);
        };

        let element_id = element.id.clone();
        self.apply(Mutation::PatchElement { element_id, patch })
    }

    /// Feed one gesture event through the reorder engine, committing any move
    pub fn drag(&mut self, event: DragEvent) -> Result<DragEffect, EditorError> {
        let effect = self.reorder.apply_event(&event, &self.document);

        if let DragEffect::PickedUp { id, .. } = &effect {
            self.interaction.start_drag(id);
        }
        if let Some((from, to)) = effect.committed_move() {
            self.apply(Mutation::MoveElement { from, to })?;
        }
        if effect.ends_gesture() {
            self.interaction.end_drag();
        }

        Ok(effect)
    }

    /// Route a canvas click. Returns whether anything changed.
    pub fn dispatch(&mut self, action: CanvasAction, id: &ElementId) -> Result<bool, EditorError> {
        debug!(?action, element_id = %id, "Canvas action");
        match action {
            CanvasAction::Select => Ok(self.select(id)),
            CanvasAction::Duplicate => Ok(self.duplicate(id)?.changed()),
            CanvasAction::Delete => Ok(self.remove(id)?.changed()),
            CanvasAction::PickUp => {
                let effect = self.drag(DragEvent::PickUp { id: id.clone() })?;
                Ok(matches!(effect, DragEffect::PickedUp { .. }))
            }
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn set_device(&mut self, device: Device) {
        self.device = device;
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.document.set_name(name);
        self.version += 1;
    }

    /// Render the current view mode
    pub fn render(&self) -> Rendered {
        render::render(&self.document, &self.interaction, self.view_mode, self.device)
    }

    /// Exported email markup
    pub fn markup(&self) -> String {
        render::render_code(&self.document)
    }

    pub fn copy_code(&self, clipboard: &mut dyn Clipboard) -> Result<(), EditorError> {
        clipboard.write_text(&self.markup()).map_err(EditorError::Clipboard)?;
        info!(template = %self.document.name(), "Copied markup");
        Ok(())
    }

    pub fn template(&self, published: bool) -> Template {
        self.document.to_template(published)
    }

    pub fn save_draft(&self, sink: &mut dyn TemplateSink) -> Result<(), EditorError> {
        self.hand_off(sink, false)
    }

    pub fn publish(&self, sink: &mut dyn TemplateSink) -> Result<(), EditorError> {
        self.hand_off(sink, true)
    }

    fn hand_off(&self, sink: &mut dyn TemplateSink, published: bool) -> Result<(), EditorError> {
        sink.save(self.template(published)).map_err(EditorError::Save)?;
        info!(
            template = %self.document.name(),
            elements = self.document.len(),
            published,
            "Saved template"
        );
        Ok(())
    }
}
