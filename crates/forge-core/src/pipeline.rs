use crate::compile::LatexCompiler;
use crate::config::{Config, PaperMeta};
use crate::error::Result;
use crate::generate::{self, ContentGenerator, OutputFormat};
use crate::latex;
use crate::paths;
use crate::project::{ProjectTracker, SetupOutcome, SetupRequest, VariantKind};
use crate::remote::{self, RemoteHost};
use crate::social::SocialRouter;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// RunOptions / RunReport
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub create_markdown: bool,
    pub create_latex: bool,
    pub regenerate_markdown: bool,
    pub regenerate_latex: bool,
    pub push_remote: bool,
    pub post_social: bool,
    /// Human-readable date stamped into generated documents.
    pub date_line: String,
}

impl RunOptions {
    pub fn from_config(cfg: &Config, date_line: impl Into<String>) -> Self {
        Self {
            create_markdown: cfg.generation.create_markdown,
            create_latex: cfg.generation.create_latex,
            regenerate_markdown: cfg.generation.regenerate_markdown,
            regenerate_latex: cfg.generation.regenerate_latex,
            push_remote: false,
            post_social: false,
            date_line: date_line.into(),
        }
    }
}

#[derive(Debug)]
pub struct RunReport {
    pub setup: SetupOutcome,
    pub pdf: Option<PathBuf>,
    pub remote_url: Option<String>,
    pub announced: bool,
}

// ---------------------------------------------------------------------------
// PaperPipeline
// ---------------------------------------------------------------------------

/// Full paper run: generate requested variants, resolve the project identity
/// and materialize artifacts, then hand off to the optional collaborators
/// (compiler, remote host, social fan-out).
///
/// Generation, setup, compile, and push failures abort the invocation; the
/// social announcement is best-effort and never does.
pub struct PaperPipeline {
    tracker: ProjectTracker,
    generator: Box<dyn ContentGenerator>,
    compiler: Option<Box<dyn LatexCompiler>>,
    remote: Option<Box<dyn RemoteHost>>,
    social: Option<SocialRouter>,
    meta: PaperMeta,
}

impl PaperPipeline {
    pub fn new(tracker: ProjectTracker, generator: Box<dyn ContentGenerator>, meta: PaperMeta) -> Self {
        Self {
            tracker,
            generator,
            compiler: None,
            remote: None,
            social: None,
            meta,
        }
    }

    pub fn with_compiler(mut self, compiler: Box<dyn LatexCompiler>) -> Self {
        self.compiler = Some(compiler);
        self
    }

    pub fn with_remote(mut self, remote: Box<dyn RemoteHost>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn with_social(mut self, social: SocialRouter) -> Self {
        self.social = Some(social);
        self
    }

    pub fn tracker(&self) -> &ProjectTracker {
        &self.tracker
    }

    pub fn run(&mut self, prompt: &str, opts: &RunOptions) -> Result<RunReport> {
        let markdown = if opts.create_markdown {
            Some(self.generate_clean(prompt, OutputFormat::Markdown, &opts.date_line)?)
        } else {
            None
        };
        let latex = if opts.create_latex {
            Some(self.generate_clean(prompt, OutputFormat::Latex, &opts.date_line)?)
        } else {
            None
        };

        let request = SetupRequest {
            markdown,
            latex,
            regenerate_markdown: opts.regenerate_markdown,
            regenerate_latex: opts.regenerate_latex,
        };
        let setup = self.tracker.setup_project(prompt, &request)?;

        let mut pdf = None;
        if let Some(compiler) = &self.compiler {
            let tex = VariantKind::Latex.path(&setup.dir, &setup.name);
            if tex.exists() {
                // rebuild the document around the fixed preamble before typesetting
                let restructured = latex::restructure_content(&std::fs::read_to_string(&tex)?);
                std::fs::write(&tex, &restructured)?;
                pdf = Some(compiler.compile(&tex)?);
            }
        }

        let mut remote_url = None;
        if opts.push_remote {
            if let Some(host) = &self.remote {
                remote::ensure_gitignore(&setup.dir)?;
                if !paths::readme_path(&setup.dir).exists() {
                    let readme =
                        self.generate_clean(prompt, OutputFormat::Readme, &opts.date_line)?;
                    remote::write_readme_if_missing(&setup.dir, &readme)?;
                }
                let description = remote::clamp_description(prompt);
                let url = host.ensure_remote(&setup.name, &description)?;
                host.push(&setup.dir)?;
                remote_url = Some(url);
            }
        }

        let mut announced = false;
        if opts.post_social {
            if let Some(router) = &self.social {
                announced = router.post_update(&announcement(prompt, remote_url.as_deref()));
            }
        }

        Ok(RunReport {
            setup,
            pdf,
            remote_url,
            announced,
        })
    }

    /// Generate one document and strip the code fences model replies tend to
    /// wrap it in; fenced output would otherwise land in the variant file.
    fn generate_clean(
        &self,
        prompt: &str,
        format: OutputFormat,
        date_line: &str,
    ) -> Result<String> {
        let raw = self
            .generator
            .generate(prompt, format, &self.meta, date_line)?;
        Ok(generate::strip_code_fences(&raw))
    }
}

fn announcement(prompt: &str, url: Option<&str>) -> String {
    match url {
        Some(url) => format!("New AI-generated research preprint: {prompt}\n{url}"),
        None => format!("New AI-generated research preprint: {prompt}"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
