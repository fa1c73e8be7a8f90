use sha2::{Digest, Sha256};

/// Normalize a prompt for fingerprinting: trim, collapse whitespace runs to
/// a single space, lowercase.
pub fn normalize(prompt: &str) -> String {
    prompt
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Stable 128-bit fingerprint of a prompt, rendered as 32 lowercase hex chars.
///
/// Two prompts that differ only in casing or whitespace runs share a
/// fingerprint. Not reversible; used only as the name-cache key, so the
/// digest choice is private to this crate.
pub fn fingerprint(prompt: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(normalize(prompt).as_bytes()));
    digest[..32].to_string()
}
