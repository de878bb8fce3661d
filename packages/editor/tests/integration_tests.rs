//! Integration tests for editor crate

use letterpress_document::{Document, ElementId, ElementType, FieldValue, Record, Template};
use letterpress_editor::*;

fn ids(session: &EditSession) -> Vec<String> {
    session.document().elements().iter().map(|e| e.id.to_string()).collect()
}

/// Blocks stacked top to bottom, 120px each
fn layout(session: &EditSession) -> Vec<Slot> {
    session
        .document()
        .elements()
        .iter()
        .enumerate()
        .map(|(i, e)| Slot::new(e.id.clone(), Rect::new(0.0, i as f64 * 120.0, 600.0, 120.0)))
        .collect()
}

#[derive(Default)]
struct MemoryClipboard {
    text: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), HostError> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), HostError> {
        Err("permission denied".into())
    }
}

#[derive(Default)]
struct MemorySink {
    saved: Vec<Template>,
}

impl TemplateSink for MemorySink {
    fn save(&mut self, template: Template) -> Result<(), HostError> {
        self.saved.push(template);
        Ok(())
    }
}

#[test]
fn test_drag_button_onto_header() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::starter("Lembrete"));
    let before: Vec<_> = session.document().elements().to_vec();

    session.drag(DragEvent::PickUp {
        id: ElementId::new("button-3"),
    })?;
    assert_eq!(session.interaction().dragging, Some(ElementId::new("button-3")));

    session.drag(DragEvent::Hover {
        center: Point::new(300.0, 70.0),
        layout: layout(&session),
    })?;
    let effect = session.drag(DragEvent::Drop)?;

    assert_eq!(
        effect,
        DragEffect::Dropped {
            id: ElementId::new("button-3"),
            from: 2,
            to: 0
        }
    );
    assert_eq!(ids(&session), vec!["button-3", "header-1", "text-2", "footer-4"]);
    assert_eq!(session.interaction().dragging, None);
    assert_eq!(session.drag_state(), &DragState::Idle);

    // Same four elements, untouched apart from position
    for element in &before {
        assert_eq!(session.document().get(&element.id), Some(element));
    }
    Ok(())
}

#[test]
fn test_drag_keeps_selection() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::starter("t"));
    let text = ElementId::new("text-2");
    session.select(&text);

    session.drag(DragEvent::PickUp {
        id: ElementId::new("footer-4"),
    })?;
    assert_eq!(session.selected(), Some(&text));

    session.drag(DragEvent::Hover {
        center: Point::new(0.0, 0.0),
        layout: layout(&session),
    })?;
    session.drag(DragEvent::Drop)?;

    assert_eq!(ids(&session), vec!["footer-4", "header-1", "text-2", "button-3"]);
    assert_eq!(session.selected(), Some(&text));
    Ok(())
}

#[test]
fn test_cancelled_drag_changes_nothing() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::starter("t"));
    let before = ids(&session);

    session.drag(DragEvent::PickUp {
        id: ElementId::new("text-2"),
    })?;
    session.drag(DragEvent::Hover {
        center: Point::new(300.0, 420.0),
        layout: layout(&session),
    })?;
    let effect = session.drag(DragEvent::Cancel)?;

    assert!(matches!(
        effect,
        DragEffect::Cancelled {
            reason: CancelReason::Explicit,
            ..
        }
    ));
    assert_eq!(ids(&session), before);
    assert_eq!(session.version(), 0);
    assert_eq!(session.interaction().dragging, None);
    Ok(())
}

#[test]
fn test_keyboard_nudges_commit_one_step_each() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::starter("t"));

    session.dispatch(CanvasAction::PickUp, &ElementId::new("header-1"))?;
    session.drag(DragEvent::Nudge {
        direction: Direction::Down,
    })?;
    session.drag(DragEvent::Nudge {
        direction: Direction::Down,
    })?;
    assert_eq!(ids(&session), vec!["text-2", "button-3", "header-1", "footer-4"]);

    // Releasing without hovering ends the gesture; the nudges stay
    let effect = session.drag(DragEvent::Drop)?;
    assert!(effect.ends_gesture());
    assert_eq!(ids(&session), vec!["text-2", "button-3", "header-1", "footer-4"]);
    assert_eq!(session.version(), 2);
    Ok(())
}

#[test]
fn test_delete_selected_element() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::starter("t"));
    let button = ElementId::new("button-3");

    assert!(session.dispatch(CanvasAction::Select, &button)?);
    let len = session.document().len();

    assert!(session.dispatch(CanvasAction::Delete, &button)?);
    assert_eq!(session.selected(), None);
    assert_eq!(session.document().len(), len - 1);
    assert!(session.properties().is_none());
    Ok(())
}

#[test]
fn test_delete_dragged_element_ends_gesture() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::starter("t"));
    let text = ElementId::new("text-2");

    session.drag(DragEvent::PickUp { id: text.clone() })?;
    session.remove(&text)?;

    assert_eq!(session.interaction().dragging, None);
    assert_eq!(session.drag_state(), &DragState::Idle);

    let order = ids(&session);
    let effect = session.drag(DragEvent::Drop)?;
    assert_eq!(
        effect,
        DragEffect::Noop {
            reason: NoopReason::IdleWithoutActiveDrag
        }
    );
    assert_eq!(ids(&session), order);
    Ok(())
}

#[test]
fn test_property_edits_reach_only_the_selected_element() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::starter("t"));
    session.select(&ElementId::new("header-1"));
    let before = session.document().elements().to_vec();

    session.edit_field(FieldGroup::Content, "title", "ACME Clinic")?;
    session.edit_field(FieldGroup::Styles, "padding", "500")?;
    session.edit_field(FieldGroup::Styles, "backgroundColor", "#ABC")?;

    let sheet = session.properties().unwrap();
    assert_eq!(
        sheet.field(FieldGroup::Content, "title").unwrap().value,
        FieldValue::from("ACME Clinic")
    );
    assert_eq!(sheet.field(FieldGroup::Styles, "padding").unwrap().value, FieldValue::Number(96));
    assert_eq!(
        sheet.field(FieldGroup::Styles, "backgroundColor").unwrap().value,
        FieldValue::from("#aabbcc")
    );

    for (old, new) in before.iter().zip(session.document().elements()).skip(1) {
        assert_eq!(old, new);
    }
    Ok(())
}

#[test]
fn test_view_modes_render_the_same_document() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::starter("Campanha"));
    session.add_element(ElementType::Social)?;

    let canvas = session.render();
    assert!(matches!(canvas, Rendered::Canvas(_)));
    assert!(canvas.to_html().contains("data-action=\"delete\""));

    session.set_view_mode(ViewMode::Preview);
    session.set_device(Device::Mobile);
    let preview = session.render().to_html();
    assert!(preview.contains("width: 375px"));
    assert!(!preview.contains("data-action"));

    session.set_view_mode(ViewMode::Code);
    assert_eq!(session.render().to_html(), session.markup());
    Ok(())
}

#[test]
fn test_copy_code_does_not_mutate() -> anyhow::Result<()> {
    let session = EditSession::new(Document::starter("t"));
    let mut clipboard = MemoryClipboard::default();

    session.copy_code(&mut clipboard)?;
    assert_eq!(clipboard.text.as_deref(), Some(session.markup().as_str()));
    assert_eq!(session.version(), 0);

    let err = session.copy_code(&mut DeniedClipboard).unwrap_err();
    assert!(matches!(err, EditorError::Clipboard(_)));
    assert_eq!(err.to_string(), "Clipboard unavailable: permission denied");
    Ok(())
}

#[test]
fn test_save_draft_and_publish() -> anyhow::Result<()> {
    let mut session = EditSession::open(Template {
        name: "Retorno".into(),
        published: false,
        elements: vec![],
    })?;
    session.rename("Retorno anual");
    let mut sink = MemorySink::default();

    session.save_draft(&mut sink)?;
    session.add_element(ElementType::Divider)?;
    session.publish(&mut sink)?;

    assert_eq!(sink.saved.len(), 2);
    assert!(!sink.saved[0].published);
    assert!(sink.saved[1].published);
    assert_eq!(sink.saved[0].elements.len(), 4);
    assert_eq!(sink.saved[1].elements.len(), 5);
    assert_eq!(sink.saved[1].name, "Retorno anual");

    let reopened = EditSession::open(sink.saved[1].clone())?;
    assert_eq!(reopened.document().elements(), session.document().elements());
    Ok(())
}

#[test]
fn test_mutations_from_json() -> anyhow::Result<()> {
    let mut session = EditSession::new(Document::starter("t"));
    let script = r##"[
        {"kind": "appendElement", "elementType": "heading"},
        {"kind": "patchElement", "elementId": "heading-5", "patch": {"content": {"level": "h1"}, "styles": {"fontSize": 200}}},
        {"kind": "moveElement", "from": 4, "to": 1},
        {"kind": "removeElement", "elementId": "footer-4"}
    ]"##;
    let mutations: Vec<Mutation> = serde_json::from_str(script)?;

    for mutation in mutations {
        assert!(session.apply(mutation)?.changed());
    }

    assert_eq!(ids(&session), vec!["header-1", "heading-5", "text-2", "button-3"]);
    let heading = session.document().get(&ElementId::new("heading-5")).unwrap();
    assert_eq!(heading.kind.styles().get("fontSize"), Some(FieldValue::Number(72)));
    assert_eq!(session.version(), 4);
    Ok(())
}

struct OfflineSink;

impl TemplateSink for OfflineSink {
    fn save(&mut self, _template: Template) -> Result<(), HostError> {
        Err(std::io::Error::new(std::io::ErrorKind::NotConnected, "store offline").into())
    }
}

#[test]
fn test_sink_failure_keeps_its_source() {
    let session = EditSession::new(Document::starter("t"));

    let err = session.publish(&mut OfflineSink).unwrap_err();
    assert!(matches!(err, EditorError::Save(_)));

    let source = std::error::Error::source(&err).unwrap();
    let io = source.downcast_ref::<std::io::Error>().unwrap();
    assert_eq!(io.kind(), std::io::ErrorKind::NotConnected);
}
