mod border_radius;
mod button_link;
mod contrast;
mod images;
mod unsubscribe;

pub use border_radius::BorderRadiusSupportRule;
pub use button_link::ButtonLinkRule;
pub use contrast::ColorContrastRule;
pub use images::{ImageAltTextRule, ImageSourceRule};
pub use unsubscribe::UnsubscribeFooterRule;

use crate::diagnostic::Diagnostic;
use letterpress_document::{Document, Element};

/// Trait for implementing lint rules
pub trait LintRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check a single element
    fn check_element(&self, _element: &Element) -> Vec<Diagnostic> {
        Vec::new()
    }

    /// Check properties of the document as a whole
    fn check_document(&self, _document: &Document) -> Vec<Diagnostic> {
        Vec::new()
    }
}

/// Registry of all available lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(ImageAltTextRule),
                Box::new(ImageSourceRule),
                Box::new(ButtonLinkRule),
                Box::new(BorderRadiusSupportRule),
                Box::new(ColorContrastRule::default()),
                Box::new(UnsubscribeFooterRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Drop every rule whose name is in `names`
    pub fn without(mut self, names: &[&str]) -> Self {
        self.rules.retain(|rule| !names.contains(&rule.name()));
        self
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
