use crate::diagnostic::{Diagnostic, DiagnosticLevel};
use crate::rules::RuleRegistry;
use letterpress_document::Document;
use tracing::debug;

/// Options for configuring the linter
#[derive(Debug, Default)]
pub struct LintOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Lint a template document and return diagnostics in document order
pub fn lint_document(document: &Document, options: LintOptions) -> Vec<Diagnostic> {
    let registry = options.registry.unwrap_or_default();
    let mut diagnostics = Vec::new();

    for element in document.elements() {
        for rule in registry.rules() {
            diagnostics.extend(rule.check_element(element));
        }
    }

    for rule in registry.rules() {
        diagnostics.extend(rule.check_document(document));
    }

    debug!(
        template = %document.name(),
        count = diagnostics.len(),
        "Linted template"
    );
    diagnostics
}

pub fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.level == DiagnosticLevel::Error)
}
