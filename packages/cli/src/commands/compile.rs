use super::find_template_files;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use letterpress_compiler_html::{compile_template_json, CompileOptions};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Template file or directory (defaults to the configured srcDir)
    pub path: Option<PathBuf>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

/// Compile every template found; returns the written (or printed) outputs
pub fn compile(args: CompileArgs, cwd: &Path) -> Result<Vec<String>> {
    let config = Config::load(cwd)?;
    let input = match &args.path {
        Some(path) => cwd.join(path),
        None => config.get_src_dir(cwd),
    };

    let (root, files) = if input.is_file() {
        let root = input.parent().map(Path::to_path_buf).unwrap_or_default();
        (root, vec![input.clone()])
    } else if input.is_dir() {
        (input.clone(), find_template_files(&input)?)
    } else {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    };

    if !args.stdout {
        println!("{}", "🔨 Compiling templates...".bright_blue().bold());
    }

    if files.is_empty() {
        println!("{}", "⚠️  No template files found".yellow());
        return Ok(Vec::new());
    }

    let out_dir = match &args.out_dir {
        Some(out) => cwd.join(out),
        None => config.get_out_dir(cwd),
    };
    let options = config.compiler_options.to_compile_options();

    let mut outputs = Vec::new();
    let mut error_count = 0;

    for file in &files {
        let relative_path = file.strip_prefix(&root).unwrap_or(file);
        match compile_file(file, relative_path, &args, &out_dir, &options) {
            Ok(output) => {
                if !args.stdout {
                    println!("  {} {} → {}", "✓".green(), relative_path.display(), output);
                }
                outputs.push(output);
            }
            Err(e) => {
                error_count += 1;
                eprintln!("  {} {} - {}", "✗".red(), relative_path.display(), e.to_string().red());
            }
        }
    }

    tracing::info!(compiled = outputs.len(), failed = error_count, "Compile finished");

    if error_count > 0 {
        return Err(anyhow!("{} of {} templates failed to compile", error_count, files.len()));
    }

    if !args.stdout {
        println!();
        println!("{} Compiled {} templates successfully", "✅".green(), outputs.len());
    }

    Ok(outputs)
}

fn compile_file(
    file_path: &Path,
    relative_path: &Path,
    args: &CompileArgs,
    out_dir: &Path,
    options: &CompileOptions,
) -> Result<String> {
    let source = fs::read_to_string(file_path)?;
    let html = compile_template_json(&source, options.clone())?;

    if args.stdout {
        println!("{}", html);
        return Ok("stdout".to_string());
    }

    let output_file = out_dir.join(relative_path).with_extension("html");
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_file, html)?;

    Ok(output_file.display().to_string())
}
