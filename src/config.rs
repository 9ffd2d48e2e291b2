use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_GREETING: &str = "Hello, World from nx-make!";

/// Contents of `Hello.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HelloFile {
    pub greeting: String,
    pub demo: DemoSection,
}

/// Operands for the three math demo lines
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DemoSection {
    pub multiply: (i32, i32),
    pub power: (i32, u32),
    pub divide: (f64, f64),
}

impl Default for HelloFile {
    fn default() -> Self {
        Self {
            greeting: DEFAULT_GREETING.to_string(),
            demo: DemoSection::default(),
        }
    }
}

impl Default for DemoSection {
    fn default() -> Self {
        Self {
            multiply: (5, 3),
            power: (2, 8),
            divide: (10.0, 4.0),
        }
    }
}

impl HelloFile {
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("failed to parse Hello.toml")
    }

    /// Load the config from `path`.
    ///
    /// If `required` is false, a missing file gives the defaults.
    pub fn load(path: &Path, required: bool) -> anyhow::Result<Self> {
        if !path.exists() {
            if required {
                anyhow::bail!("config file '{}' does not exist", path.display());
            }
            log::debug!("no config at '{}', using defaults", path.display());
            return Ok(Self::default());
        }
        log::debug!("reading config from '{}'", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        let config = Self::parse(&content)?;
        log::trace!("parsed config: {config:#?}");
        Ok(config)
    }
}
