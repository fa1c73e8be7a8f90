use crate::config::PaperMeta;
use crate::error::Result;
use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// ContentGenerator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Latex,
    Readme,
}

/// Produces document text for a prompt. Implementations wrap whatever model
/// backend the caller wires in; the core never talks to one directly.
pub trait ContentGenerator {
    fn generate(
        &self,
        prompt: &str,
        format: OutputFormat,
        meta: &PaperMeta,
        date_line: &str,
    ) -> Result<String>;
}

static FENCE_RE: OnceLock<Regex> = OnceLock::new();

/// Strip markdown code-fence lines (``` or ```latex) that model replies wrap
/// documents in. Text on the same line before a fence survives; the fence and
/// the rest of its line do not.
pub fn strip_code_fences(text: &str) -> String {
    let re = FENCE_RE.get_or_init(|| Regex::new("```[^\n]*\n?").unwrap());
    re.replace_all(text, "").into_owned()
}

// ---------------------------------------------------------------------------
// Instruction templates
// ---------------------------------------------------------------------------

/// System prompt shared by all formats.
pub const SYSTEM_INSTRUCTION: &str = "You are an AI that writes research papers in a \
concise, coherent style. Do not include any disclaimers or references to the model \
in the output.";

/// Build the per-format user instruction a generator backend should send.
/// Pure, so backends stay thin and the templates stay testable.
pub fn instruction_for(
    prompt: &str,
    format: OutputFormat,
    meta: &PaperMeta,
    date_line: &str,
) -> String {
    let author = meta.author.as_deref().unwrap_or("");
    let institution = meta.institution.as_deref().unwrap_or("");
    let department = meta.department.as_deref().unwrap_or("");
    let email = meta.email.as_deref().unwrap_or("");

    match format {
        OutputFormat::Latex => format!(
            "Generate a well-formatted LaTeX document for a research paper based on:\n\
             {prompt}\n\n\
             Use an arXiv-like style that compiles under pdfTeX.\n\
             At the top of the document, please include:\n\
             \\documentclass{{article}}\n\
             \\usepackage[margin=1in]{{geometry}}\n\
             \\usepackage{{amsmath,amssymb,graphicx}}\n\
             \\title{{A Short Descriptive Title}}\n\
             \\author{{{author} \\\\ {department} \\\\ {institution} \\\\ {email}}}\n\
             \\date{{{date_line}}}\n\n\
             Then add standard sections: Abstract, Introduction, Methods, Results, Conclusion.\n\
             Do not reference the model or disclaimers in the text. Output only valid LaTeX."
        ),
        OutputFormat::Markdown => format!(
            "Generate a structured Markdown research paper based on:\n\
             {prompt}\n\n\
             At the top, include a title and author block:\n\
             # A Short Descriptive Title\n\
             **Author**: {author}\n\
             **Department**: {department}\n\
             **Institution**: {institution}\n\
             **Email**: {email}\n\
             **Date**: {date_line}\n\n\
             Then include standard sections: Abstract, Introduction, Methods, Results, Conclusion.\n\
             Do not reference the model or disclaimers. Return only valid Markdown."
        ),
        OutputFormat::Readme => format!(
            "Write a professional README for a research paper repository about: {prompt}\n\
             Include sections: Overview, Methodology, Key Findings, and How to Cite.\n\
             Be concise and informative."
        ),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> PaperMeta {
        PaperMeta {
            author: Some("Ada Lovelace".into()),
            institution: Some("Analytical Society".into()),
            department: Some("Mathematics".into()),
            email: Some("ada@example.org".into()),
        }
    }

    #[test]
    fn latex_instruction_carries_preamble_and_author() {
        let s = instruction_for("quines", OutputFormat::Latex, &meta(), "October 4, 2023");
        assert!(s.contains("\\documentclass{article}"));
        assert!(s.contains("Ada Lovelace \\\\ Mathematics \\\\ Analytical Society"));
        assert!(s.contains("\\date{October 4, 2023}"));
        assert!(s.contains("quines"));
    }

    #[test]
    fn markdown_instruction_carries_author_block() {
        let s = instruction_for("quines", OutputFormat::Markdown, &meta(), "October 4, 2023");
        assert!(s.contains("**Author**: Ada Lovelace"));
        assert!(s.contains("**Date**: October 4, 2023"));
        assert!(s.contains("Abstract, Introduction, Methods, Results, Conclusion"));
    }

    #[test]
    fn readme_instruction_names_sections() {
        let s = instruction_for("quines", OutputFormat::Readme, &PaperMeta::default(), "");
        assert!(s.contains("Overview, Methodology, Key Findings"));
        assert!(s.contains("quines"));
    }

    #[test]
    fn empty_meta_leaves_blank_fields() {
        let s = instruction_for("x", OutputFormat::Markdown, &PaperMeta::default(), "");
        assert!(s.contains("**Author**: \n"));
    }

    #[test]
    fn strip_code_fences_removes_wrapping_fences() {
        let fenced = "```latex\n\\documentclass{article}\nbody\n```\n";
        assert_eq!(strip_code_fences(fenced), "\\documentclass{article}\nbody\n");
        let plain = "# Title\n\nprose\n";
        assert_eq!(strip_code_fences(plain), plain);
    }

    #[test]
    fn strip_code_fences_handles_unterminated_fence() {
        assert_eq!(strip_code_fences("```md\n# Title\n```"), "# Title\n");
    }
}
