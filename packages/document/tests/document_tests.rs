//! Document model behaviour: defaults, duplication, scoped patches and
//! structural properties of reorder/create operations.

use letterpress_document::{
    Document, Element, ElementId, ElementKind, ElementType, FieldValue, Patch, Record,
};
use std::collections::HashSet;

fn ids(doc: &Document) -> Vec<String> {
    doc.elements().iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn test_append_image_uses_registered_defaults() {
    let mut doc = Document::new("Newsletter");
    let id = doc.append(ElementType::Image);

    let element = doc.get(&id).unwrap();
    assert_eq!(doc.index_of(&id), Some(0));

    let content = element.kind.content().to_map();
    assert_eq!(content.len(), 3);
    assert_eq!(content["url"], FieldValue::from(""));
    assert_eq!(content["alt"], FieldValue::from("Descrição da imagem"));
    assert_eq!(content["width"], FieldValue::from("100%"));

    let styles = element.kind.styles().to_map();
    assert_eq!(styles.len(), 2);
    assert_eq!(styles["borderRadius"], FieldValue::Number(8));
    assert_eq!(styles["padding"], FieldValue::Number(16));
}

#[test]
fn test_duplicate_inserts_independent_copy_after_source() {
    let mut text = Element::new(ElementId::new("text-1"), ElementType::Text);
    if let ElementKind::Text { content, .. } = &mut text.kind {
        content.text = "Hello".to_string();
    }
    let footer = Element::new(ElementId::new("footer-2"), ElementType::Footer);
    let mut doc = Document::from_elements("t", vec![text, footer]).unwrap();

    let source_id = ElementId::new("text-1");
    let copy_id = doc.duplicate(&source_id).unwrap();

    assert_ne!(copy_id, source_id);
    assert!(copy_id.as_str().starts_with("text-"));
    assert_eq!(doc.index_of(&copy_id), Some(1));
    assert_eq!(
        doc.get(&copy_id).unwrap().kind.content().get("text"),
        Some(FieldValue::from("Hello"))
    );

    // Editing the copy leaves the original alone
    doc.patch(&copy_id, &Patch::new().content("text", "Olá")).unwrap();
    assert_eq!(
        doc.get(&source_id).unwrap().kind.content().get("text"),
        Some(FieldValue::from("Hello"))
    );
}

#[test]
fn test_patch_changes_only_the_given_keys() {
    let mut doc = Document::starter("t");
    let header_id = ElementId::new("header-1");
    let before = doc.elements().to_vec();

    let applied = doc
        .patch(&header_id, &Patch::new().content("title", "ACME Clinic"))
        .unwrap();
    assert!(applied);

    let after = doc.elements();
    assert_eq!(after.len(), before.len());

    for (old, new) in before.iter().zip(after) {
        if old.id != header_id {
            assert_eq!(old, new, "{} changed", old.id);
            continue;
        }

        assert_eq!(new.kind.content().get("title"), Some(FieldValue::from("ACME Clinic")));
        assert_eq!(new.kind.content().get("subtitle"), old.kind.content().get("subtitle"));
        assert_eq!(new.kind.styles().to_map(), old.kind.styles().to_map());
    }
}

#[test]
fn test_patch_with_styles_and_content_together() {
    let mut doc = Document::new("t");
    let id = doc.append(ElementType::Button);

    let patch = Patch::new()
        .content("url", "https://clinica.example/agenda")
        .style("borderRadius", 12u32)
        .style("textAlign", "left");
    doc.patch(&id, &patch).unwrap();

    let button = doc.get(&id).unwrap();
    assert_eq!(
        button.kind.content().get("url"),
        Some(FieldValue::from("https://clinica.example/agenda"))
    );
    assert_eq!(button.kind.content().get("text"), Some(FieldValue::from("Agendar consulta")));
    assert_eq!(button.kind.styles().get("borderRadius"), Some(FieldValue::Number(12)));
    assert_eq!(button.kind.styles().get("textAlign"), Some(FieldValue::from("left")));
    assert_eq!(button.kind.styles().get("fontSize"), Some(FieldValue::Number(16)));
}

#[test]
fn test_reorder_is_a_permutation() {
    let mut base = Document::starter("t");
    base.append(ElementType::Spacer);
    base.append(ElementType::Divider);
    let len = base.len();
    let original: HashSet<String> = ids(&base).into_iter().collect();

    for from in 0..len {
        for to in 0..len {
            let mut doc = base.clone();
            doc.reorder(from, to);

            let moved: HashSet<String> = ids(&doc).into_iter().collect();
            assert_eq!(moved, original, "reorder({}, {}) changed the id set", from, to);
            assert_eq!(doc.elements()[to].id, base.elements()[from].id);

            // Every element is unchanged apart from its position
            for element in doc.elements() {
                assert_eq!(Some(element), base.get(&element.id));
            }
        }
    }
}

#[test]
fn test_reorder_moves_button_to_top() {
    let mut doc = Document::starter("t");
    assert!(doc.reorder(2, 0));
    assert_eq!(ids(&doc), vec!["button-3", "header-1", "text-2", "footer-4"]);
}

#[test]
fn test_ids_stay_unique_across_create_and_duplicate() {
    let mut doc = Document::starter("t");
    let mut seen: HashSet<ElementId> = doc.ids().into_iter().collect();

    for (i, ty) in ElementType::ALL.iter().cycle().take(30).enumerate() {
        let id = if i % 3 == 0 {
            let source = doc.elements()[i % doc.len()].id.clone();
            doc.duplicate(&source).unwrap()
        } else if i % 3 == 1 {
            doc.insert(i / 2, *ty)
        } else {
            doc.append(*ty)
        };
        assert!(seen.insert(id.clone()), "{} minted twice", id);

        if i % 5 == 0 {
            // Removing never frees an id for reuse
            let victim = doc.elements()[0].id.clone();
            doc.remove(&victim);
        }
    }

    let unique: HashSet<ElementId> = doc.ids().into_iter().collect();
    assert_eq!(unique.len(), doc.len());
}

#[test]
fn test_template_json_fills_defaults_and_rejects_unknown_types() {
    let json = r#"{
        "name": "Retorno",
        "elements": [
            {"id": "heading-3", "type": "heading", "content": {"text": "Hora do retorno"}},
            {"id": "spacer-8", "type": "spacer"}
        ]
    }"#;
    let template = letterpress_document::Template::from_json(json).unwrap();
    assert!(!template.published);

    let mut doc = Document::from_template(template).unwrap();
    let heading = &doc.elements()[0];
    assert_eq!(heading.kind.content().get("level"), Some(FieldValue::from("h2")));

    assert_eq!(doc.append(ElementType::Text).as_str(), "text-9");

    let bad = r#"{"name": "x", "elements": [{"id": "a-1", "type": "video"}]}"#;
    assert!(letterpress_document::Template::from_json(bad).is_err());
}

#[test]
fn test_loaded_values_are_brought_into_their_domains() {
    let json = r##"{
        "name": "Importado",
        "elements": [
            {"id": "spacer-1", "type": "spacer", "content": {"height": 100000}},
            {"id": "columns-2", "type": "columns", "content": {"count": 0}, "styles": {"gap": 4294967295}},
            {"id": "button-3", "type": "button", "styles": {"backgroundColor": "#0F766E", "textColor": "FFF"}}
        ]
    }"##;
    let template = letterpress_document::Template::from_json(json).unwrap();
    let doc = Document::from_template(template).unwrap();

    let spacer = doc.get(&ElementId::new("spacer-1")).unwrap();
    assert_eq!(spacer.kind.content().get("height"), Some(FieldValue::Number(200)));

    let columns = doc.get(&ElementId::new("columns-2")).unwrap();
    assert_eq!(columns.kind.content().get("count"), Some(FieldValue::Number(2)));
    assert_eq!(columns.kind.styles().get("gap"), Some(FieldValue::Number(64)));

    let button = doc.get(&ElementId::new("button-3")).unwrap();
    assert_eq!(button.kind.styles().get("backgroundColor"), Some(FieldValue::from("#0f766e")));
    assert_eq!(button.kind.styles().get("textColor"), Some(FieldValue::from("#ffffff")));
}

#[test]
fn test_loaded_non_hex_color_is_rejected() {
    let json = r#"{
        "name": "x",
        "elements": [
            {"id": "text-1", "type": "text", "styles": {"color": "red\"><script>alert(1)</script>"}}
        ]
    }"#;
    let template = letterpress_document::Template::from_json(json).unwrap();

    let err = Document::from_template(template).unwrap_err();
    assert!(matches!(
        err,
        letterpress_document::DocumentError::InvalidValue { key, .. } if key == "color"
    ));
}

#[test]
fn test_insert_after_normalizes_the_inserted_element() {
    let mut doc = Document::starter("t");
    let mut spacer = Element::new(ElementId::new("spacer-20"), ElementType::Spacer);
    spacer.kind.content_mut().set("height", FieldValue::Number(9999)).unwrap();

    assert!(doc.insert_after(&ElementId::new("header-1"), spacer));
    let stored = doc.get(&ElementId::new("spacer-20")).unwrap();
    assert_eq!(stored.kind.content().get("height"), Some(FieldValue::Number(200)));
}
