use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use letterpress_document::{Element, ElementKind};
use regex::Regex;
use std::sync::OnceLock;

/// Images need alt text: many clients block images until the reader opts in
pub struct ImageAltTextRule;

impl LintRule for ImageAltTextRule {
    fn name(&self) -> &'static str {
        "image-alt-text"
    }

    fn description(&self) -> &'static str {
        "Require alternative text on images"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        let ElementKind::Image { content, .. } = &element.kind else {
            return Vec::new();
        };
        if !content.alt.trim().is_empty() {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            self.name(),
            "Image has no alternative text. It is shown in place of the image when the client blocks images.",
        )
        .on(&element.id)
        .with_suggestion("Describe the image content in 'alt'")]
    }
}

/// Image sources must be absolute URLs
pub struct ImageSourceRule;

fn absolute_url() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^https?://[^\s/]+\.[^\s/]+(/\S*)?$").ok())
        .as_ref()
}

fn is_absolute_url(url: &str) -> bool {
    absolute_url().is_some_and(|re| re.is_match(url.trim()))
}

impl LintRule for ImageSourceRule {
    fn name(&self) -> &'static str {
        "image-source"
    }

    fn description(&self) -> &'static str {
        "Require images to point at an absolute http(s) URL"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        let ElementKind::Image { content, .. } = &element.kind else {
            return Vec::new();
        };
        let url = content.url.trim();

        if url.is_empty() {
            return vec![Diagnostic::error(self.name(), "Image has no source URL and will not be exported.")
                .on(&element.id)
                .with_suggestion("Set the image URL")];
        }
        if !is_absolute_url(url) {
            return vec![Diagnostic::warning(
                self.name(),
                format!(
                    "Image source '{}' is not an absolute URL. Email clients cannot resolve relative paths.",
                    url
                ),
            )
            .on(&element.id)
            .with_suggestion("Host the image and use its full https:// address")];
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterpress_document::{Document, ElementType, Patch};

    fn image(url: &str, alt: &str) -> Element {
        let mut doc = Document::new("t");
        let id = doc.append(ElementType::Image);
        doc.patch(&id, &Patch::new().content("url", url).content("alt", alt))
            .unwrap();
        doc.get(&id).unwrap().clone()
    }

    #[test]
    fn test_missing_alt_text() {
        let diagnostics = ImageAltTextRule.check_element(&image("https://cdn.example.com/a.png", "  "));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].rule, "image-alt-text");
        assert_eq!(diagnostics[0].element_id.as_ref().map(|id| id.as_str()), Some("image-1"));

        let diagnostics = ImageAltTextRule.check_element(&image("https://cdn.example.com/a.png", "Logo"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_image_sources() {
        let rule = ImageSourceRule;

        let empty = rule.check_element(&image("", "Logo"));
        assert_eq!(empty[0].level, crate::DiagnosticLevel::Error);

        let relative = rule.check_element(&image("/img/logo.png", "Logo"));
        assert_eq!(relative[0].level, crate::DiagnosticLevel::Warning);

        assert!(rule.check_element(&image("https://cdn.example.com/logo.png", "Logo")).is_empty());
        assert!(rule.check_element(&image("http://clinica.example", "Logo")).is_empty());
    }

    #[test]
    fn test_other_elements_are_ignored() {
        let doc = Document::starter("t");
        for element in doc.elements() {
            assert!(ImageSourceRule.check_element(element).is_empty());
            assert!(ImageAltTextRule.check_element(element).is_empty());
        }
    }
}
