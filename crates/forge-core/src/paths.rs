use crate::error::{ForgeError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Default base directory holding all paper projects.
pub const DEFAULT_BASE_DIR: &str = "ai_preprints";

/// Prompt-fingerprint → project-name mapping, one per base directory.
pub const NAME_CACHE_FILE: &str = "name_cache.json";

/// Process configuration, one per base directory.
pub const CONFIG_FILE: &str = "forge.yaml";

/// Upper bound on the slug portion of a project name (date suffix excluded).
pub const MAX_SLUG_LEN: usize = 30;

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn name_cache_path(base: &Path) -> PathBuf {
    base.join(NAME_CACHE_FILE)
}

pub fn config_path(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// A project directory is named exactly after its project name.
pub fn project_dir(base: &Path, name: &str) -> PathBuf {
    base.join(name)
}

pub fn readme_path(project_dir: &Path) -> PathBuf {
    project_dir.join("README.md")
}

pub fn gitignore_path(project_dir: &Path) -> PathBuf {
    project_dir.join(".gitignore")
}

/// Compiled artifact, produced by the external LaTeX compiler.
pub fn pdf_path(project_dir: &Path, name: &str) -> PathBuf {
    project_dir.join(format!("{name}.pdf"))
}

// ---------------------------------------------------------------------------
// Name validation
// ---------------------------------------------------------------------------

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    // slug of underscore-separated lowercase words, then a YYMMDD stamp
    NAME_RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*_\d{6}$").unwrap())
}

/// Check that `name` is a well-formed project name: lowercase alphanumerics
/// and single underscores, no leading/trailing underscore, a 6-digit date
/// suffix, and a bounded slug.
pub fn validate_name(name: &str) -> Result<()> {
    if name.len() > MAX_SLUG_LEN + 7 || !name_re().is_match(name) {
        return Err(ForgeError::InvalidName(name.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        for name in [
            "quantum_entanglement_231004",
            "a_250101",
            "untitled_0042_240620",
            "x1_999999",
        ] {
            validate_name(name).unwrap_or_else(|_| panic!("expected valid: {name}"));
        }
    }

    #[test]
    fn invalid_names() {
        for name in [
            "",
            "231004",
            "_leading_231004",
            "trailing__231004",
            "no_date_suffix",
            "UPPER_231004",
            "has space_231004",
            "way_too_long_slug_that_exceeds_the_thirty_char_bound_231004",
        ] {
            assert!(validate_name(name).is_err(), "expected invalid: {name}");
        }
    }

    #[test]
    fn path_helpers() {
        let base = Path::new("/tmp/papers");
        assert_eq!(name_cache_path(base), PathBuf::from("/tmp/papers/name_cache.json"));
        assert_eq!(config_path(base), PathBuf::from("/tmp/papers/forge.yaml"));
        let dir = project_dir(base, "swarm_robotics_240101");
        assert_eq!(dir, PathBuf::from("/tmp/papers/swarm_robotics_240101"));
        assert_eq!(
            pdf_path(&dir, "swarm_robotics_240101"),
            PathBuf::from("/tmp/papers/swarm_robotics_240101/swarm_robotics_240101.pdf")
        );
    }
}
