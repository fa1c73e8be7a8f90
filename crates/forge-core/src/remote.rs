use crate::error::Result;
use crate::io;
use crate::paths;
use std::path::Path;

// ---------------------------------------------------------------------------
// RemoteHost
// ---------------------------------------------------------------------------

/// Remote repository host (e.g. GitHub). The network half lives with the
/// caller; the core prepares the local directory and drives this seam.
pub trait RemoteHost {
    /// Find or create the remote project and return its browsable URL.
    fn ensure_remote(&self, name: &str, description: &str) -> Result<String>;

    /// Push the local project directory to the remote.
    fn push(&self, local_dir: &Path) -> Result<()>;
}

/// Hosts cap repository descriptions at 100 characters.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Clamp a description to the host limit, ellipsizing when over.
pub fn clamp_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_LIMIT {
        return description.to_string();
    }
    let head: String = description.chars().take(DESCRIPTION_LIMIT - 3).collect();
    format!("{head}...")
}

// ---------------------------------------------------------------------------
// Local repository scaffolding
// ---------------------------------------------------------------------------

const LATEX_GITIGNORE: &str = "\
# LaTeX
*.aux
*.log
*.out
*.toc
*.fls
*.fdb_latexmk
*.synctex.gz
*.bbl
*.blg

# Keep these files
!*.tex
!*.md
!*.pdf
!README.md
";

/// Write the LaTeX build-artifact ignore file unless the project has one.
/// Returns true if written.
pub fn ensure_gitignore(project_dir: &Path) -> Result<bool> {
    io::write_if_missing(&paths::gitignore_path(project_dir), LATEX_GITIGNORE.as_bytes())
}

/// Write README.md only when missing; an existing README is never touched.
pub fn write_readme_if_missing(project_dir: &Path, content: &str) -> Result<bool> {
    io::write_if_missing(&paths::readme_path(project_dir), content.as_bytes())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
