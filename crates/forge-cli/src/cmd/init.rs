use anyhow::Context;
use forge_core::{config::Config, io, paths};
use std::path::Path;

pub fn run(base_dir: &Path) -> anyhow::Result<()> {
    println!("Initializing preprint forge in: {}", base_dir.display());

    io::ensure_dir(base_dir)
        .with_context(|| format!("failed to create {}", base_dir.display()))?;

    // Write forge.yaml if missing
    let config_path = paths::config_path(base_dir);
    if !config_path.exists() {
        Config::default()
            .save(base_dir)
            .context("failed to write forge.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }

    // The name cache is created lazily by the first setup; report its state.
    if paths::name_cache_path(base_dir).exists() {
        println!("  exists:  {}", paths::NAME_CACHE_FILE);
    }

    Ok(())
}
