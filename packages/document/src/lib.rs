//! # Letterpress Document
//!
//! Data model of the email template builder.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ registry: type tag → defaults + field schema│
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: ordered, id-stable element list   │
//! │  - append / insert / duplicate / remove     │
//! │  - reorder (pure permutation)               │
//! │  - patch (scoped, clamped, atomic)          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ Template: name + elements + published flag  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use letterpress_document::{Document, ElementType, Patch};
//!
//! let mut doc = Document::open("Lembrete de consulta", vec![]).unwrap();
//! let id = doc.append(ElementType::Image);
//! doc.patch(&id, &Patch::new().content("url", "https://cdn.example.com/logo.png")).unwrap();
//!
//! let template = doc.to_template(false);
//! assert_eq!(template.elements.len(), 5);
//! ```

#[macro_use]
mod fields;

mod blocks;
mod document;
mod element;
mod errors;
mod id_generator;
pub mod registry;

pub use blocks::*;
pub use document::{Document, Template, STARTER_TYPES};
pub use element::{Element, ElementId, ElementKind, ElementType};
pub use errors::DocumentError;
pub use fields::{Align, DividerStyle, FieldError, FieldType, FieldValue, HeadingLevel, Patch, Record};
pub use id_generator::IdGenerator;
pub use registry::{descriptor, normalize_color, palette, Category, FieldKind, FieldSpec, TypeDescriptor};
