//! URL-safe wishlist identifiers derived from the owner name.
//!
//! A slug is `<base>-<6 hex chars>`. The base is the lower-cased owner name
//! with everything outside `[a-z0-9\s-]` removed and every whitespace run
//! turned into one hyphen.

use uuid::Uuid;

/// Existence pre-checks before giving up on a base.
pub const PRECHECK_ATTEMPTS: usize = 16;
/// Save attempts when the UNIQUE constraint rejects a slug at insert time.
pub const SAVE_ATTEMPTS: usize = 5;
pub const SUFFIX_LEN: usize = 6;

fn is_regex_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn normalize_base(owner_name: &str) -> String {
    let lower = owner_name.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_space = false;
    for c in lower.chars() {
        if is_regex_space(c) {
            if !in_space {
                out.push('-');
                in_space = true;
            }
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            out.push(c);
            in_space = false;
        }
        // anything else is dropped and does not break a whitespace run
    }
    out
}

pub fn random_suffix() -> String {
    let mut s = Uuid::new_v4().simple().to_string();
    s.truncate(SUFFIX_LEN);
    s
}

pub fn with_random_suffix(base: &str) -> String {
    format!("{}-{}", base, random_suffix())
}
