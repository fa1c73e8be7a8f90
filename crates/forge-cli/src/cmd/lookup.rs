use crate::output;
use forge_core::project::ProjectTracker;
use forge_core::ForgeError;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct LookupReport<'a> {
    prompt: &'a str,
    name: &'a str,
}

pub fn run(base_dir: &Path, prompt: &str, json: bool) -> anyhow::Result<()> {
    let tracker = ProjectTracker::open(base_dir)?;
    match tracker.lookup(prompt) {
        Some(name) => {
            if json {
                output::print_json(&LookupReport { prompt, name })?;
            } else {
                println!("{name}");
            }
            Ok(())
        }
        None => Err(ForgeError::UnknownPrompt.into()),
    }
}
