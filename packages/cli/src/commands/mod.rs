pub mod compile;
pub mod init;
pub mod lint;
pub mod preview;

pub use compile::{compile, CompileArgs};
pub use init::{init, InitArgs};
pub use lint::{lint, LintArgs, LintSummary};
pub use preview::{preview, PreviewArgs};

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Template files under `dir`, sorted so output order is stable
pub(crate) fn find_template_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}
