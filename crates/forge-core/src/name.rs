use crate::fingerprint;
use crate::paths::MAX_SLUG_LEN;
use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Slug derivation
// ---------------------------------------------------------------------------

/// Derive the filesystem-safe slug portion of a project name from a prompt.
///
/// Keeps ASCII alphanumerics and whitespace, joins words with single
/// underscores, lowercases, and truncates to `MAX_SLUG_LEN` at the last word
/// boundary (hard cut if the first word alone exceeds the bound). Pure:
/// the same prompt always yields the same slug.
pub fn slugify(prompt: &str) -> String {
    let cleaned: String = prompt
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    let mut slug = cleaned
        .split_whitespace()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("_");

    if slug.len() > MAX_SLUG_LEN {
        slug = match slug[..MAX_SLUG_LEN].rfind('_') {
            Some(i) => slug[..i].to_string(),
            None => slug[..MAX_SLUG_LEN].to_string(),
        };
    }

    slug.trim_end_matches('_').to_string()
}

// ---------------------------------------------------------------------------
// Name generation
// ---------------------------------------------------------------------------

/// Generate a project name for `prompt`: slug plus a `YYMMDD` stamp.
///
/// The date is an explicit input so callers (and tests) control the clock;
/// the same prompt generates different names on different days, which is why
/// the name store only ever generates once per distinct prompt.
pub fn generate(prompt: &str, date: NaiveDate) -> String {
    let mut slug = slugify(prompt);
    if slug.is_empty() {
        slug = fallback_slug(prompt);
    }
    format!("{}_{}", slug, date.format("%y%m%d"))
}

/// Stand-in slug for prompts that clean down to nothing (all punctuation).
///
/// The digits come from the prompt fingerprint, so distinct empty-yielding
/// prompts still get distinct names on the same day.
fn fallback_slug(prompt: &str) -> String {
    let digits = u16::from_str_radix(&fingerprint::fingerprint(prompt)[..4], 16)
        .unwrap_or(0)
        % 10000;
    format!("untitled_{digits:04}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
