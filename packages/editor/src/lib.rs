//! # Letterpress Editor
//!
//! Interactive editing core of the email template builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: elements, registry, patches       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - mutations (single mutation surface)      │
//! │  - selection + drag state                   │
//! │  - reorder engine (closest-centre drops)    │
//! │  - property editor (coerced field input)    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: edit canvas / preview / markup      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use letterpress_editor::{EditSession, FieldGroup};
//! use letterpress_document::{Document, ElementType};
//!
//! let mut session = EditSession::new(Document::starter("Lembrete"));
//! session.add_element(ElementType::Spacer).unwrap();
//!
//! // The new spacer is selected, so the edit lands on it
//! session.edit_field(FieldGroup::Content, "height", "48").unwrap();
//!
//! let html = session.render().to_html();
//! assert!(html.contains("height: 48px"));
//! ```

mod errors;
mod mutations;
mod properties;
mod render;
mod reorder;
mod selection;
mod session;
mod vdom;

pub use errors::{EditorError, HostError};
pub use mutations::{Mutation, MutationOutcome, MutationResult};
pub use properties::{coerce, field_patch, property_sheet, FieldEntry, FieldGroup, PropertySheet};
pub use render::{
    render, render_block, render_code, render_edit, render_preview, CanvasAction, Device, Rendered,
    ViewMode, EMPTY_CANVAS_MESSAGE,
};
pub use reorder::{
    closest_center, CancelReason, Direction, DragEffect, DragEvent, DragState, NoopReason, Point,
    Rect, ReorderEngine, Slot,
};
pub use selection::{Cleared, Interaction};
pub use session::{Clipboard, EditSession, TemplateSink};
pub use vdom::VNode;
