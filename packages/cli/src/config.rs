use letterpress_compiler_html::CompileOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "letterpress.config.json";

/// Letterpress configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding template JSON files
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Where compiled HTML is written
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default)]
    pub compiler_options: CompilerOptions,
}

fn default_src_dir() -> String {
    "templates".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    /// Width of the email column, in pixels
    pub max_width: u32,

    pub pretty: bool,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        let defaults = CompileOptions::default();
        Self {
            max_width: defaults.max_width,
            pretty: defaults.pretty,
        }
    }
}

impl CompilerOptions {
    pub fn to_compile_options(&self) -> CompileOptions {
        CompileOptions {
            max_width: self.max_width,
            pretty: self.pretty,
            ..CompileOptions::default()
        }
    }
}

impl Config {
    /// Load config from a directory, falling back to defaults when absent
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn get_src_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.src_dir)
    }

    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            out_dir: default_out_dir(),
            compiler_options: CompilerOptions::default(),
        }
    }
}
