use super::find_template_files;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use letterpress_document::{Document, Template};
use letterpress_linter::{lint_document, DiagnosticLevel, LintOptions, RuleRegistry};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Template file or directory to lint (defaults to the configured srcDir)
    pub input: Option<PathBuf>,

    /// Show all diagnostics including info level
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Rules to skip, by name
    #[arg(long = "disable", value_name = "RULE")]
    pub disabled: Vec<String>,
}

/// Totals across every linted file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LintSummary {
    pub files: usize,
    pub diagnostics: usize,
    pub errors: usize,
    pub warnings: usize,
}

impl LintSummary {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

pub fn lint(args: LintArgs, cwd: &Path) -> Result<LintSummary> {
    let input = match &args.input {
        Some(path) => cwd.join(path),
        None => Config::load(cwd)?.get_src_dir(cwd),
    };

    let text = args.format != "json";
    if text {
        println!("🔍 {} Letterpress Linter", "Starting".green().bold());
        println!("   Input: {}", input.display());
        println!();
    }

    let files = if input.is_file() {
        vec![input.clone()]
    } else if input.is_dir() {
        let files = find_template_files(&input)?;
        if text {
            println!("   Found {} templates", files.len());
            println!();
        }
        files
    } else {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    };

    let disabled: Vec<&str> = args.disabled.iter().map(String::as_str).collect();
    let mut summary = LintSummary::default();

    for file in &files {
        let registry = RuleRegistry::new().without(&disabled);
        lint_file(file, &args, registry, &mut summary)?;
        summary.files += 1;
    }

    if text {
        print_summary(&summary);
    }

    Ok(summary)
}

fn lint_file(file_path: &Path, args: &LintArgs, registry: RuleRegistry, summary: &mut LintSummary) -> Result<()> {
    let source = fs::read_to_string(file_path)?;

    let document = match Template::from_json(&source).and_then(Document::from_template) {
        Ok(doc) => doc,
        Err(err) => {
            eprintln!("{} Failed to read {}: {}", "✗".red(), file_path.display(), err);
            summary.errors += 1;
            return Ok(());
        }
    };

    let diagnostics = lint_document(
        &document,
        LintOptions {
            registry: Some(registry),
        },
    );

    let errors = diagnostics.iter().filter(|d| d.level == DiagnosticLevel::Error).count();
    let warnings = diagnostics.iter().filter(|d| d.level == DiagnosticLevel::Warning).count();
    summary.diagnostics += diagnostics.len();
    summary.errors += errors;
    summary.warnings += warnings;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
        return Ok(());
    }

    if diagnostics.is_empty() {
        if args.verbose {
            println!("{} {}", "✓".green(), file_path.display());
        }
        return Ok(());
    }

    println!("{}", file_path.display());
    for diagnostic in &diagnostics {
        if !args.verbose && diagnostic.level == DiagnosticLevel::Info {
            continue;
        }

        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };
        let target = diagnostic
            .element_id
            .as_ref()
            .map(|id| format!(" {}", id.as_str().dimmed()))
            .unwrap_or_default();

        println!("  {} [{}]{} {}", level_str, diagnostic.rule, target, diagnostic.message);

        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }
    println!();

    Ok(())
}

fn print_summary(summary: &LintSummary) {
    println!();
    println!(
        "✨ {} Linting complete!",
        if summary.has_errors() {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", summary.files);
    println!("   Total diagnostics: {}", summary.diagnostics);

    if summary.errors > 0 {
        println!("   {} {}", "Errors:".red(), summary.errors);
    }
    if summary.warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), summary.warnings);
    }
    if summary.errors == 0 && summary.warnings == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use letterpress_document::ElementType;

    fn args(input: &str, disabled: &[&str]) -> LintArgs {
        LintArgs {
            input: Some(PathBuf::from(input)),
            verbose: false,
            format: "text".to_string(),
            disabled: disabled.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn write(dir: &Path, file: &str, document: &Document) {
        let json = document.to_template(false).to_json_pretty().unwrap();
        fs::write(dir.join(file), json).unwrap();
    }

    #[test]
    fn test_starter_has_warnings_but_no_errors() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "starter.json", &Document::starter("t"));

        let summary = lint(args("starter.json", &[]), dir.path()).unwrap();
        assert_eq!(summary.files, 1);
        assert!(!summary.has_errors());
        assert!(summary.warnings > 0);
    }

    #[test]
    fn test_image_without_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut document = Document::starter("t");
        document.append(ElementType::Image);
        write(dir.path(), "image.json", &document);

        let summary = lint(args(".", &[]), dir.path()).unwrap();
        assert!(summary.has_errors());

        let summary = lint(args(".", &["image-source"]), dir.path()).unwrap();
        assert!(!summary.has_errors());
    }

    #[test]
    fn test_unreadable_template_counts_as_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{ not json").unwrap();

        let summary = lint(args("broken.json", &[]), dir.path()).unwrap();
        assert_eq!(summary.errors, 1);
    }
}
