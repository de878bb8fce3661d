//! Selection and drag tracking for the canvas.
//!
//! The two halves are independent: picking up or dropping an element never
//! touches the selection. Both are cleared when the element they point at is
//! removed from the document.

use letterpress_document::{Document, ElementId};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub selected: Option<ElementId>,
    pub dragging: Option<ElementId>,
}

/// What [`Interaction::element_removed`] had to clear
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cleared {
    pub selection: bool,
    pub drag: bool,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an element that exists in `doc`; unknown ids are ignored
    pub fn select(&mut self, doc: &Document, id: &ElementId) -> bool {
        if !doc.contains(id) {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    pub fn start_drag(&mut self, id: &ElementId) {
        self.dragging = Some(id.clone());
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    pub fn is_dragging(&self, id: &ElementId) -> bool {
        self.dragging.as_ref() == Some(id)
    }

    pub fn element_removed(&mut self, id: &ElementId) -> Cleared {
        let selection = self.is_selected(id);
        if selection {
            self.selected = None;
        }
        let drag = self.is_dragging(id);
        if drag {
            self.dragging = None;
        }
        Cleared { selection, drag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_ignores_unknown_ids() {
        let doc = Document::starter("t");
        let mut state = Interaction::new();

        assert!(state.select(&doc, &ElementId::new("text-2")));
        assert!(!state.select(&doc, &ElementId::new("ghost-1")));
        assert_eq!(state.selected, Some(ElementId::new("text-2")));
    }

    #[test]
    fn test_drag_leaves_selection_alone() {
        let doc = Document::starter("t");
        let mut state = Interaction::new();
        let header = ElementId::new("header-1");

        state.select(&doc, &header);
        state.start_drag(&ElementId::new("footer-4"));
        state.end_drag();

        assert!(state.is_selected(&header));
        assert_eq!(state.dragging, None);
    }

    #[test]
    fn test_removal_clears_only_matching_state() {
        let doc = Document::starter("t");
        let mut state = Interaction::new();
        let text = ElementId::new("text-2");
        let button = ElementId::new("button-3");

        state.select(&doc, &text);
        state.start_drag(&button);

        let cleared = state.element_removed(&ElementId::new("footer-4"));
        assert_eq!(cleared, Cleared::default());

        let cleared = state.element_removed(&button);
        assert_eq!(cleared, Cleared { selection: false, drag: true });
        assert!(state.is_selected(&text));

        let cleared = state.element_removed(&text);
        assert!(cleared.selection);
        assert_eq!(state, Interaction::default());
    }
}
