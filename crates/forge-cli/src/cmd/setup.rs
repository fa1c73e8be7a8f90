use crate::output;
use anyhow::Context;
use clap::Args;
use forge_core::config::Config;
use forge_core::project::{ProjectTracker, SetupRequest};
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct SetupArgs {
    /// Free-text paper prompt
    pub prompt: String,

    /// File whose content becomes the Markdown variant ({name}.md)
    #[arg(long, value_name = "FILE")]
    pub md_file: Option<PathBuf>,

    /// File whose content becomes the LaTeX variant ({name}.tex)
    #[arg(long, value_name = "FILE")]
    pub latex_file: Option<PathBuf>,

    /// Overwrite an existing Markdown variant
    #[arg(long)]
    pub regenerate_md: bool,

    /// Overwrite an existing LaTeX variant
    #[arg(long)]
    pub regenerate_latex: bool,
}

pub fn run(base_dir: &Path, args: SetupArgs, json: bool) -> anyhow::Result<()> {
    let cfg = Config::load_or_default(base_dir)?;

    let request = SetupRequest {
        markdown: read_content(args.md_file.as_deref())?,
        latex: read_content(args.latex_file.as_deref())?,
        regenerate_markdown: args.regenerate_md || cfg.generation.regenerate_markdown,
        regenerate_latex: args.regenerate_latex || cfg.generation.regenerate_latex,
    };

    let mut tracker = ProjectTracker::open(base_dir)?;
    let outcome = tracker.setup_project(&args.prompt, &request)?;

    if json {
        return output::print_json(&outcome);
    }

    if outcome.reused_name {
        println!("Found existing project name: {}", outcome.name);
    } else {
        println!("Generated new project name: {}", outcome.name);
    }
    println!("Project directory: {}", outcome.dir.display());
    println!("  {}.md:  {}", outcome.name, outcome.markdown);
    println!("  {}.tex: {}", outcome.name, outcome.latex);

    Ok(())
}

fn read_content(path: Option<&Path>) -> anyhow::Result<Option<String>> {
    match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read {}", p.display()))?;
            Ok(Some(content))
        }
        None => Ok(None),
    }
}
