use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use letterpress_document::{Document, Element, ElementKind, ElementType};

/// Marketing email needs a visible way to opt out
pub struct UnsubscribeFooterRule;

impl LintRule for UnsubscribeFooterRule {
    fn name(&self) -> &'static str {
        "unsubscribe-footer"
    }

    fn description(&self) -> &'static str {
        "Require a footer with an unsubscribe link"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        match &element.kind {
            ElementKind::Footer { content, .. } if content.unsubscribe_text.trim().is_empty() => {
                vec![Diagnostic::warning(
                    self.name(),
                    "Footer hides the unsubscribe link because its text is empty.",
                )
                .on(&element.id)
                .with_suggestion("Fill in the unsubscribe text")]
            }
            _ => Vec::new(),
        }
    }

    fn check_document(&self, document: &Document) -> Vec<Diagnostic> {
        let has_footer = document
            .elements()
            .iter()
            .any(|e| e.element_type() == ElementType::Footer);
        if has_footer {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            self.name(),
            "Template has no footer, so recipients have no way to unsubscribe.",
        )
        .with_suggestion("Add a footer block")]
    }
}
