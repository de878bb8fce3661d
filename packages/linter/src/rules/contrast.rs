//! WCAG contrast between a block's text colour and its background.
//!
//! Only blocks that set both colours are checked: header, button and footer.

use crate::diagnostic::Diagnostic;
use crate::rules::LintRule;
use letterpress_document::{Element, ElementKind};

/// Minimum ratio for body-size text (WCAG AA)
pub const MIN_CONTRAST: f64 = 4.5;

pub struct ColorContrastRule {
    pub min_ratio: f64,
}

impl Default for ColorContrastRule {
    fn default() -> Self {
        Self {
            min_ratio: MIN_CONTRAST,
        }
    }
}

impl LintRule for ColorContrastRule {
    fn name(&self) -> &'static str {
        "color-contrast"
    }

    fn description(&self) -> &'static str {
        "Require readable contrast between text and background colours"
    }

    fn check_element(&self, element: &Element) -> Vec<Diagnostic> {
        let (text, background) = match &element.kind {
            ElementKind::Header { styles, .. } => (&styles.text_color, &styles.background_color),
            ElementKind::Button { styles, .. } => (&styles.text_color, &styles.background_color),
            ElementKind::Footer { styles, .. } => (&styles.text_color, &styles.background_color),
            _ => return Vec::new(),
        };

        let Some(ratio) = contrast_ratio(text, background) else {
            return Vec::new();
        };
        if ratio >= self.min_ratio {
            return Vec::new();
        }

        vec![Diagnostic::warning(
            self.name(),
            format!(
                "Text colour {} on {} has a contrast ratio of {:.2}:1 (minimum {:.1}:1).",
                text, background, ratio, self.min_ratio
            ),
        )
        .on(&element.id)
        .with_suggestion("Darken the text or lighten the background")]
    }
}

/// Parse `#rgb` or `#rrggbb`
fn parse_hex(color: &str) -> Option<[u8; 3]> {
    let hex = color.trim().strip_prefix('#')?;
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn relative_luminance([r, g, b]: [u8; 3]) -> f64 {
    let linear = |c: u8| {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(r) + 0.7152 * linear(g) + 0.0722 * linear(b)
}

/// Contrast ratio between two colours, or `None` if either does not parse
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let la = relative_luminance(parse_hex(a)?);
    let lb = relative_luminance(parse_hex(b)?);
    let (light, dark) = if la >= lb { (la, lb) } else { (lb, la) };
    Some((light + 0.05) / (dark + 0.05))
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterpress_document::{Document, ElementId, Patch};

    #[test]
    fn test_contrast_ratio() {
        let black_on_white = contrast_ratio("#000000", "#fff").unwrap();
        assert!((black_on_white - 21.0).abs() < 1e-9);
        assert!((contrast_ratio("#abc", "#abc").unwrap() - 1.0).abs() < 1e-9);
        assert!(contrast_ratio("teal", "#ffffff").is_none());
    }

    #[test]
    fn test_default_header_and_button_pass() {
        let doc = Document::starter("t");
        let rule = ColorContrastRule::default();

        for id in ["header-1", "button-3"] {
            let element = doc.get(&ElementId::new(id)).unwrap();
            assert!(rule.check_element(element).is_empty(), "{}", id);
        }
    }

    #[test]
    fn test_default_footer_is_just_below_threshold() {
        // #6b7280 on #f3f4f6 is about 4.39:1
        let doc = Document::starter("t");
        let footer = doc.get(&ElementId::new("footer-4")).unwrap();

        let diagnostics = ColorContrastRule::default().check_element(footer);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("4.39:1"));

        let relaxed = ColorContrastRule { min_ratio: 3.0 };
        assert!(relaxed.check_element(footer).is_empty());
    }

    #[test]
    fn test_low_contrast_button() {
        let mut doc = Document::starter("t");
        let id = ElementId::new("button-3");
        doc.patch(&id, &Patch::new().style("backgroundColor", "#fde68a")).unwrap();

        let diagnostics = ColorContrastRule::default().check_element(doc.get(&id).unwrap());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].element_id, Some(id));
    }
}
