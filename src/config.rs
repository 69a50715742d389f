use anyhow::{Context, Result};
use graph::git_backend::DEFAULT_ABBREV;
use graph::RenderOptions;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Looked up in the repository root when no `--config` is given
pub const CONFIG_FILE: &str = ".gitgraph.toml";

/// Settings read from `.gitgraph.toml`
///
/// ```toml
/// limit = 200
/// abbrev = 9
///
/// [render]
/// max_width = 100
/// marker = "*"
/// order = "strict"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Newest commits to load
    pub limit: Option<usize>,
    /// Hex digits kept from commit IDs
    pub abbrev: usize,
    pub render: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: None,
            abbrev: DEFAULT_ABBREV,
            render: RenderOptions::default(),
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Read `explicit` if given, else `<repo>/.gitgraph.toml` if it exists.
    pub fn load(explicit: Option<&Path>, repo: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = repo.join(CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::parse(&text).with_context(|| format!("In {}", path.display()))?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }
}
