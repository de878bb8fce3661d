//! Email-client compatibility caveats for letterpress templates.
//!
//! The linter does not simulate any client. It reports the known ways a
//! template tends to break once it leaves the builder: missing image sources,
//! dead buttons, styles Outlook ignores, unreadable colour pairs and a missing
//! opt-out footer.

mod diagnostic;
mod linter;
mod rules;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use linter::{has_errors, lint_document, LintOptions};
pub use rules::{
    BorderRadiusSupportRule, ButtonLinkRule, ColorContrastRule, ImageAltTextRule, ImageSourceRule,
    LintRule, RuleRegistry, UnsubscribeFooterRule,
};
