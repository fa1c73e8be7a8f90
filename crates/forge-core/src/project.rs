use crate::error::Result;
use crate::io;
use crate::name;
use crate::paths;
use crate::store::NameStore;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Variants
// ---------------------------------------------------------------------------

/// One output document format of a project. The compiled PDF is derived from
/// the LaTeX variant by the external compiler and is not written here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    Markdown,
    Latex,
}

impl VariantKind {
    pub fn extension(self) -> &'static str {
        match self {
            VariantKind::Markdown => "md",
            VariantKind::Latex => "tex",
        }
    }

    /// Variant files share the project name as their stem.
    pub fn filename(self, name: &str) -> String {
        format!("{name}.{}", self.extension())
    }

    pub fn path(self, project_dir: &Path, name: &str) -> PathBuf {
        project_dir.join(self.filename(name))
    }
}

// ---------------------------------------------------------------------------
// Write policy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Created,
    Overwritten,
    Skipped,
    Absent,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WriteOutcome::Created => "created",
            WriteOutcome::Overwritten => "overwritten",
            WriteOutcome::Skipped => "skipped",
            WriteOutcome::Absent => "absent",
        };
        f.write_str(s)
    }
}

/// Apply the per-variant write policy:
///
/// - no content               → `Absent` (no-op)
/// - content, no file         → `Created`
/// - content, file, regenerate → `Overwritten`
/// - content, file, keep       → `Skipped` (existing content preserved)
///
/// Each variant is decided independently; regenerating one never affects the
/// other's file. Existence of the file is the only signal consulted.
pub fn write_variant(
    project_dir: &Path,
    name: &str,
    kind: VariantKind,
    content: Option<&str>,
    regenerate: bool,
) -> Result<WriteOutcome> {
    let Some(content) = content else {
        return Ok(WriteOutcome::Absent);
    };

    let path = kind.path(project_dir, name);
    if path.exists() {
        if regenerate {
            std::fs::write(&path, content)?;
            tracing::info!(path = %path.display(), "regenerated existing {} file", kind.extension());
            Ok(WriteOutcome::Overwritten)
        } else {
            tracing::info!(path = %path.display(), "keeping existing {} file", kind.extension());
            Ok(WriteOutcome::Skipped)
        }
    } else {
        std::fs::write(&path, content)?;
        tracing::info!(path = %path.display(), "created {} file", kind.extension());
        Ok(WriteOutcome::Created)
    }
}

// ---------------------------------------------------------------------------
// Orchestration
// ---------------------------------------------------------------------------

/// Content and regenerate flags for one `setup_project` invocation.
#[derive(Debug, Clone, Default)]
pub struct SetupRequest {
    pub markdown: Option<String>,
    pub latex: Option<String>,
    pub regenerate_markdown: bool,
    pub regenerate_latex: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SetupOutcome {
    pub name: String,
    pub dir: PathBuf,
    /// Whether the name came from the cache rather than a fresh generation.
    pub reused_name: bool,
    pub markdown: WriteOutcome,
    pub latex: WriteOutcome,
}

/// Owns a base directory of paper projects and the name store inside it.
///
/// `setup_project` is idempotent at the directory level: re-running with the
/// same prompt resolves to the same name and re-applies the same per-variant
/// policy, which is the documented recovery path after any local failure.
pub struct ProjectTracker {
    base_dir: PathBuf,
    names: NameStore,
}

impl ProjectTracker {
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        io::ensure_dir(&base_dir)?;
        let names = NameStore::open(&base_dir);
        Ok(Self { base_dir, names })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Existing project name for a prompt; never mutates.
    pub fn lookup(&self, prompt: &str) -> Option<&str> {
        self.names.lookup(prompt)
    }

    pub fn has_name(&self, prompt: &str) -> bool {
        self.names.has_name(prompt)
    }

    pub fn project_dir(&self, name: &str) -> PathBuf {
        paths::project_dir(&self.base_dir, name)
    }

    /// Resolve the prompt's identity, ensure its directory, and materialize
    /// the provided variants. Uses today's date for fresh names.
    pub fn setup_project(&mut self, prompt: &str, request: &SetupRequest) -> Result<SetupOutcome> {
        self.setup_project_on(prompt, chrono::Local::now().date_naive(), request)
    }

    /// `setup_project` with an injected date, for deterministic callers.
    pub fn setup_project_on(
        &mut self,
        prompt: &str,
        date: NaiveDate,
        request: &SetupRequest,
    ) -> Result<SetupOutcome> {
        // 1. Identity: cached name wins; otherwise generate and persist
        //    before touching the filesystem any further.
        let (name, reused_name) = match self.names.lookup(prompt) {
            Some(existing) => {
                let existing = existing.to_string();
                tracing::info!(name = %existing, "reusing existing project name");
                (existing, true)
            }
            None => {
                let fresh = name::generate(prompt, date);
                self.names.store(prompt, &fresh)?;
                tracing::info!(name = %fresh, "generated new project name");
                (fresh, false)
            }
        };

        // 2. Directory: idempotent create.
        let dir = paths::project_dir(&self.base_dir, &name);
        io::ensure_dir(&dir)?;

        // 3. Variants: independent write decisions.
        let markdown = write_variant(
            &dir,
            &name,
            VariantKind::Markdown,
            request.markdown.as_deref(),
            request.regenerate_markdown,
        )?;
        let latex = write_variant(
            &dir,
            &name,
            VariantKind::Latex,
            request.latex.as_deref(),
            request.regenerate_latex,
        )?;

        Ok(SetupOutcome {
            name,
            dir,
            reused_name,
            markdown,
            latex,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
