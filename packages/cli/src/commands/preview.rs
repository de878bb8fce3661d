use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use letterpress_compiler_html::escape_html;
use letterpress_document::{Document, Template};
use letterpress_editor::{render_preview, Device};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Template file to preview
    pub file: PathBuf,

    /// Device width to preview at (desktop, mobile)
    #[arg(short, long, default_value = "desktop", value_parser = parse_device)]
    pub device: Device,

    /// Output file (defaults to `<file>.preview.html`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn parse_device(s: &str) -> Result<Device, String> {
    s.parse()
}

/// Write the read-only preview page and return its path
pub fn preview(args: PreviewArgs, cwd: &Path) -> Result<PathBuf> {
    let input = cwd.join(&args.file);
    if !input.is_file() {
        return Err(anyhow!("Template file does not exist: {}", input.display()));
    }

    let source = fs::read_to_string(&input)?;
    let document = Document::from_template(Template::from_json(&source)?)?;
    let body = render_preview(&document, args.device).to_html();

    let page = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{} ({})</title>\n</head>\n<body style=\"margin: 0; background-color: #e5e7eb;\">\n{}\n</body>\n</html>\n",
        escape_html(document.name()),
        args.device.as_str(),
        body
    );

    let output = match &args.output {
        Some(path) => cwd.join(path),
        None => input.with_extension("preview.html"),
    };
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output, page)?;

    tracing::info!(path = %output.display(), device = args.device.as_str(), "Wrote preview");
    println!("{} Preview → {}", "✓".green(), output.display());

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_preview_is_written_next_to_template() {
        let dir = tempfile::tempdir().unwrap();
        let template = Document::starter("Lembrete").to_template(false);
        fs::write(dir.path().join("reminder.json"), template.to_json_pretty().unwrap()).unwrap();

        let args = PreviewArgs {
            file: PathBuf::from("reminder.json"),
            device: Device::Mobile,
            output: None,
        };
        let output = preview(args, dir.path()).unwrap();
        assert_eq!(output, dir.path().join("reminder.preview.html"));

        let html = fs::read_to_string(output).unwrap();
        assert!(html.contains("<title>Lembrete (mobile)</title>"));
        assert!(html.contains("width: 375px"));
        assert!(!html.contains("data-action"));
    }

    #[test]
    fn test_parse_device() {
        assert_eq!(parse_device("Desktop"), Ok(Device::Desktop));
        assert!(parse_device("tablet").is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = PreviewArgs {
            file: PathBuf::from("nope.json"),
            device: Device::Desktop,
            output: None,
        };
        assert!(preview(args, dir.path()).is_err());
    }
}
