use crate::output;
use forge_core::paths;
use forge_core::project::VariantKind;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ProjectRow {
    name: String,
    markdown: bool,
    latex: bool,
    pdf: bool,
}

pub fn run(base_dir: &Path, json: bool) -> anyhow::Result<()> {
    let mut rows: Vec<ProjectRow> = Vec::new();

    if base_dir.is_dir() {
        for entry in std::fs::read_dir(base_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            // skip directories that are not project-shaped
            if paths::validate_name(&name).is_err() {
                continue;
            }
            let dir = entry.path();
            rows.push(ProjectRow {
                markdown: VariantKind::Markdown.path(&dir, &name).exists(),
                latex: VariantKind::Latex.path(&dir, &name).exists(),
                pdf: paths::pdf_path(&dir, &name).exists(),
                name,
            });
        }
    }
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    if json {
        return output::print_json(&rows);
    }

    if rows.is_empty() {
        println!("No projects found in {}", base_dir.display());
        return Ok(());
    }

    let table = rows
        .iter()
        .map(|r| {
            vec![
                r.name.clone(),
                mark(r.markdown),
                mark(r.latex),
                mark(r.pdf),
            ]
        })
        .collect();
    output::print_table(&["NAME", "MD", "TEX", "PDF"], table);

    Ok(())
}

fn mark(present: bool) -> String {
    if present { "yes".into() } else { "-".into() }
}
