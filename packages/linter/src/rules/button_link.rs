use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use letterpress_document::{Element, ElementKind};

/// Buttons whose link goes nowhere
pub struct ButtonLinkRule;

impl LintRule for ButtonLinkRule {
    fn name(&self) -> &'static str {
        "button-link"
    }

    fn description(&self) -> &'static str {
        "Require buttons to link somewhere"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        let ElementKind::Button { content, .. } = &element.kind else {
            return Vec::new();
        };
        let url = content.url.trim();
        if !url.is_empty() && url != "#" {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            self.name(),
            format!("Button '{}' does not link anywhere.", content.text),
        )
        .on(&element.id)
        .with_suggestion("Set the button link to the page the reader should open")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterpress_document::{Document, ElementId, Patch};

    #[test]
    fn test_placeholder_link_is_reported() {
        let doc = Document::starter("t");
        let button = doc.get(&ElementId::new("button-3")).unwrap();

        let diagnostics = ButtonLinkRule.check_element(button);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("Agendar consulta"));
    }

    #[test]
    fn test_real_link_passes() {
        let mut doc = Document::starter("t");
        let id = ElementId::new("button-3");
        doc.patch(&id, &Patch::new().content("url", "https://clinica.example/agenda"))
            .unwrap();

        assert!(ButtonLinkRule.check_element(doc.get(&id).unwrap()).is_empty());
    }
}
