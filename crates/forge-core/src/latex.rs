// ---------------------------------------------------------------------------
// LaTeX content cleanup
// ---------------------------------------------------------------------------

/// Fixed preamble every compiled document gets, regardless of what the
/// generator emitted. pdfTeX-safe for UTF-8 input.
pub const PREAMBLE: &str = "\\documentclass{article}
\\usepackage[margin=1in]{geometry}
\\usepackage{amsmath,amssymb,graphicx}
\\usepackage[T1]{fontenc}
\\usepackage[utf8]{inputenc}
\\usepackage{lmodern}
\\usepackage{textcomp}
\\usepackage{lastpage}";

/// Drop markdown code-fence markers and blank lines from LaTeX content.
pub fn clean_content(content: &str) -> String {
    let content = content.replace("```latex", "").replace("```", "");
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rebuild a generated document around the fixed [`PREAMBLE`].
///
/// Whatever preamble the generator produced is discarded, keeping only its
/// `\title` / `\author` / `\date` lines; the body is wrapped in exactly one
/// `document` environment, with `\maketitle` when any metadata survived.
pub fn restructure_content(content: &str) -> String {
    let content = clean_content(content);

    let mut skip_preamble = false;
    let mut title = None;
    let mut author = None;
    let mut date = None;
    let mut body: Vec<&str> = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("\\documentclass") {
            skip_preamble = true;
            continue;
        }
        if trimmed.starts_with("\\begin{document}") {
            skip_preamble = false;
            continue;
        }
        if trimmed.starts_with("\\end{document}") {
            continue;
        }
        if skip_preamble {
            if trimmed.starts_with("\\title{") {
                title = Some(line);
            } else if trimmed.starts_with("\\author{") {
                author = Some(line);
            } else if trimmed.starts_with("\\date{") {
                date = Some(line);
            }
            continue;
        }
        body.push(line);
    }

    let mut out: Vec<&str> = vec![PREAMBLE];
    out.extend(title);
    out.extend(author);
    out.extend(date);
    out.push("\\begin{document}");
    if title.is_some() || author.is_some() || date.is_some() {
        out.push("\\maketitle");
    }
    out.extend(body);
    out.push("\\end{document}");
    out.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
