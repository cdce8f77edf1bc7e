//! JavaScript pretty-printer and minifier.
//!
//! These are the same regex substitution pipelines as the CSS tools,
//! adapted to JS punctuation. Not a tokenizer or parser: string literals,
//! template strings, and regex literals containing `{`, `}`, `;`, `//` or
//! `/*` WILL be corrupted. That is the documented contract of the tool;
//! callers must warn users it is unsafe on non-trivial JavaScript.

use regex::Regex;
use std::sync::OnceLock;

use super::{collapse_whitespace, require_input};
use crate::error::WorkflowResult;

use super::css::tidy_lines;

/// Insert a newline and indent after `{` and `;`, newline around `}`.
pub fn pretty_print(js: &str) -> WorkflowResult<String> {
    static OPEN_BRACE: OnceLock<Regex> = OnceLock::new();
    static SEMICOLON: OnceLock<Regex> = OnceLock::new();
    static CLOSE_BRACE: OnceLock<Regex> = OnceLock::new();

    require_input("JavaScript", js)?;

    let s = collapse_whitespace(js);
    let s = OPEN_BRACE
        .get_or_init(|| Regex::new(r"\s*\{\s*").unwrap())
        .replace_all(&s, " {\n  ");
    let s = SEMICOLON
        .get_or_init(|| Regex::new(r";\s*").unwrap())
        .replace_all(&s, ";\n  ");
    let s = CLOSE_BRACE
        .get_or_init(|| Regex::new(r"\s*\}\s*").unwrap())
        .replace_all(&s, "\n}\n");
    Ok(tidy_lines(&s))
}

/// Strip comments and squeeze out whitespace around JS punctuation.
pub fn minify(js: &str) -> WorkflowResult<String> {
    static LINE_COMMENT: OnceLock<Regex> = OnceLock::new();
    static BLOCK_COMMENT: OnceLock<Regex> = OnceLock::new();
    static AROUND_PUNCT: OnceLock<Regex> = OnceLock::new();

    require_input("JavaScript", js)?;

    // Line comments go first, while newlines still bound them.
    let s = LINE_COMMENT
        .get_or_init(|| Regex::new(r"//[^\n]*").unwrap())
        .replace_all(js, "");
    let s = BLOCK_COMMENT
        .get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").unwrap())
        .replace_all(&s, "");
    let s = collapse_whitespace(&s);
    let s = AROUND_PUNCT
        .get_or_init(|| Regex::new(r"\s*([{};:,=()])\s*").unwrap())
        .replace_all(&s, "${1}");
    Ok(s.trim().to_string())
}
