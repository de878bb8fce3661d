use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use letterpress_document::{Element, ElementKind};

/// Outlook for Windows renders with Word and ignores `border-radius`
pub struct BorderRadiusSupportRule;

impl LintRule for BorderRadiusSupportRule {
    fn name(&self) -> &'static str {
        "border-radius-support"
    }

    fn description(&self) -> &'static str {
        "Note rounded corners that Outlook desktop will render square"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        let radius = match &element.kind {
            ElementKind::Button { styles, .. } => styles.border_radius,
            ElementKind::Image { styles, .. } => styles.border_radius,
            _ => return Vec::new(),
        };
        if radius == 0 {
            return Vec::new();
        }

        vec![Diagnostic::info(
            self.name(),
            format!(
                "Border radius of {}px is ignored by Outlook desktop; corners will be square there.",
                radius
            ),
        )
        .on(&element.id)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterpress_document::{Document, ElementType, Patch};

    #[test]
    fn test_rounded_button_and_image() {
        let mut doc = Document::new("t");
        let button = doc.append(ElementType::Button);
        let image = doc.append(ElementType::Image);
        let text = doc.append(ElementType::Text);

        for id in [&button, &image] {
            let diagnostics = BorderRadiusSupportRule.check_element(doc.get(id).unwrap());
            assert_eq!(diagnostics.len(), 1);
            assert_eq!(diagnostics[0].level, crate::DiagnosticLevel::Info);
        }
        assert!(BorderRadiusSupportRule.check_element(doc.get(&text).unwrap()).is_empty());

        doc.patch(&button, &Patch::new().style("borderRadius", 0u32)).unwrap();
        assert!(BorderRadiusSupportRule.check_element(doc.get(&button).unwrap()).is_empty());
    }
}
