use crate::error::Result;
use crate::io;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// PaperMeta
// ---------------------------------------------------------------------------

/// Author block stamped into generated papers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// GenerationConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_true")]
    pub create_markdown: bool,
    #[serde(default = "default_true")]
    pub create_latex: bool,
    #[serde(default)]
    pub regenerate_markdown: bool,
    #[serde(default)]
    pub regenerate_latex: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            create_markdown: true,
            create_latex: true,
            regenerate_markdown: false,
            regenerate_latex: false,
        }
    }
}

// ---------------------------------------------------------------------------
// RepoConfig / SocialConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Create remote repositories as public rather than private.
    #[serde(default)]
    pub make_public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Pause between consecutive platform posts (not after the last one).
    #[serde(default = "default_post_delay")]
    pub post_delay_seconds: u64,
    #[serde(default)]
    pub twitter: bool,
    #[serde(default)]
    pub linkedin: bool,
    #[serde(default)]
    pub facebook: bool,
}

fn default_post_delay() -> u64 {
    300
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            post_delay_seconds: default_post_delay(),
            twitter: false,
            linkedin: false,
            facebook: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

/// Process configuration, persisted as `forge.yaml` in the base directory.
/// Every section defaults, so an absent or partial file is always usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub paper: PaperMeta,
    #[serde(default)]
    pub repo: RepoConfig,
    #[serde(default)]
    pub social: SocialConfig,
}

impl Config {
    /// Load `forge.yaml` from the base directory, or defaults when missing.
    /// A present-but-malformed file is an error: silently ignoring a config
    /// the user wrote would be worse than stopping.
    pub fn load_or_default(base: &Path) -> Result<Self> {
        let path = paths::config_path(base);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, base: &Path) -> Result<()> {
        let path = paths::config_path(base);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&path, data.as_bytes())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
