//! # Document Mutations
//!
//! Semantic operations on a template document. Every change the builder makes
//! to the model goes through [`Mutation::apply`].
//!
//! ## Mutation Semantics
//!
//! ### Append / Insert
//! - New element from the registry defaults, under a freshly minted id
//!
//! ### Duplicate
//! - Deep copy under a new id, placed right after the source
//!
//! ### Move
//! - Pure permutation; ids, content and styles are untouched
//! - Out-of-range or same-position moves are no-ops
//!
//! ### Patch
//! - Shallow merge of the given keys only; clamped, atomic
//!
//! ### Remove / Duplicate / Patch of a missing element
//! - No-op, reported as [`MutationOutcome::Unchanged`]

use crate::EditorError;
use letterpress_document::{Document, ElementId, ElementType, Patch};
use serde::{Deserialize, Serialize};

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Mutation {
    /// Add a new element at the end of the document
    #[serde(rename_all = "camelCase")]
    AppendElement { element_type: ElementType },

    /// Add a new element at `index` (clamped to the document length)
    #[serde(rename_all = "camelCase")]
    InsertElement { index: usize, element_type: ElementType },

    #[serde(rename_all = "camelCase")]
    DuplicateElement { element_id: ElementId },

    #[serde(rename_all = "camelCase")]
    RemoveElement { element_id: ElementId },

    /// Move the element at `from` to `to`
    MoveElement { from: usize, to: usize },

    #[serde(rename_all = "camelCase")]
    PatchElement { element_id: ElementId, patch: Patch },
}

/// What a mutation did to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Created(ElementId),
    Removed(ElementId),
    Moved { from: usize, to: usize },
    Patched(ElementId),
    Unchanged,
}

impl Mutation {
    /// Apply mutation to the document
    pub fn apply(&self, doc: &mut Document) -> Result<MutationOutcome, EditorError> {
        let outcome = match self {
            Mutation::AppendElement { element_type } => {
                MutationOutcome::Created(doc.append(*element_type))
            }

            Mutation::InsertElement { index, element_type } => {
                MutationOutcome::Created(doc.insert(*index, *element_type))
            }

            Mutation::DuplicateElement { element_id } => match doc.duplicate(element_id) {
                Some(id) => MutationOutcome::Created(id),
                None => MutationOutcome::Unchanged,
            },

            Mutation::RemoveElement { element_id } => match doc.remove(element_id) {
                Some(removed) => MutationOutcome::Removed(removed.id),
                None => MutationOutcome::Unchanged,
            },

            Mutation::MoveElement { from, to } => {
                if doc.reorder(*from, *to) {
                    MutationOutcome::Moved { from: *from, to: *to }
                } else {
                    MutationOutcome::Unchanged
                }
            }

            Mutation::PatchElement { element_id, patch } => {
                if doc.patch(element_id, patch)? {
                    MutationOutcome::Patched(element_id.clone())
                } else {
                    MutationOutcome::Unchanged
                }
            }
        };

        Ok(outcome)
    }

    /// Debug name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AppendElement { .. } => "append_element",
            Mutation::InsertElement { .. } => "insert_element",
            Mutation::DuplicateElement { .. } => "duplicate_element",
            Mutation::RemoveElement { .. } => "remove_element",
            Mutation::MoveElement { .. } => "move_element",
            Mutation::PatchElement { .. } => "patch_element",
        }
    }
}

/// Result of applying a mutation through a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    /// Session version after the mutation
    pub version: u64,

    pub outcome: MutationOutcome,
}

impl MutationResult {
    pub fn changed(&self) -> bool {
        self.outcome != MutationOutcome::Unchanged
    }

    /// Id of the element the mutation created
    pub fn created(&self) -> Option<&ElementId> {
        match &self.outcome {
            MutationOutcome::Created(id) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::PatchElement {
            element_id: ElementId::new("text-2"),
            patch: Patch::new().content("text", "Hello World"),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"patchElement","elementId":"text-2","patch":{"content":{"text":"Hello World"}}}"#
        );

        let deserialized: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_missing_targets_are_unchanged() {
        let mut doc = Document::starter("t");
        let ghost = ElementId::new("ghost-1");

        let mutations = [
            Mutation::DuplicateElement { element_id: ghost.clone() },
            Mutation::RemoveElement { element_id: ghost.clone() },
            Mutation::MoveElement { from: 9, to: 0 },
            Mutation::PatchElement {
                element_id: ghost,
                patch: Patch::new().content("text", "x"),
            },
        ];

        for mutation in &mutations {
            assert_eq!(mutation.apply(&mut doc).unwrap(), MutationOutcome::Unchanged, "{}", mutation.name());
        }
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn test_invalid_patch_is_an_error() {
        let mut doc = Document::starter("t");
        let mutation = Mutation::PatchElement {
            element_id: ElementId::new("header-1"),
            patch: Patch::new().style("borderRadius", 4u32),
        };

        assert!(matches!(mutation.apply(&mut doc), Err(EditorError::Document(_))));
    }
}
