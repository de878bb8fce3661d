mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{compile, init, lint, preview, CompileArgs, InitArgs, LintArgs, PreviewArgs};
use std::path::Path;

/// Letterpress CLI - email templates from the command line
#[derive(Parser, Debug)]
#[command(name = "letterpress")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Letterpress project
    Init(InitArgs),

    /// Compile template JSON files to email HTML
    Compile(CompileArgs),

    /// Report email-client compatibility caveats
    Lint(LintArgs),

    /// Write the read-only preview of a template
    Preview(PreviewArgs),
}

fn run(command: Command, cwd: &Path) -> anyhow::Result<bool> {
    match command {
        Command::Init(args) => init(args, cwd).map(|_| true),
        Command::Compile(args) => compile(args, cwd).map(|_| true),
        Command::Lint(args) => lint(args, cwd).map(|summary| !summary.has_errors()),
        Command::Preview(args) => preview(args, cwd).map(|_| true),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| run(cli.command, &cwd));

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!();
            eprintln!("{} {}", "Error:".red().bold(), err);
            eprintln!();
            std::process::exit(1);
        }
    }
}
