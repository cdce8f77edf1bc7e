//! HTML pretty-printer and minifier.
//!
//! Neither function parses HTML. The pretty-printer walks a flat token
//! sequence with an indent counter; the minifier is a regex pipeline.
//! Malformed markup is formatted best-effort and never rejected.

use regex::Regex;
use std::sync::OnceLock;

use super::{collapse_whitespace, require_input};
use crate::error::WorkflowResult;

/// Element names that never take a closing tag and so never increase
/// nesting depth.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const INDENT: &str = "  ";

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Open(&'a str),
    Close(&'a str),
    Text(&'a str),
}

/// Indent an HTML fragment, two spaces per nesting level.
///
/// Unbalanced closing tags stop decrementing at depth zero instead of
/// corrupting the indentation of everything after them.
pub fn pretty_print(html: &str) -> WorkflowResult<String> {
    require_input("HTML", html)?;

    let normalized = collapse_whitespace(html);
    let mut lines: Vec<String> = Vec::new();
    let mut depth: usize = 0;

    for token in tokenize(&normalized) {
        match token {
            Token::Close(tag) => {
                depth = depth.saturating_sub(1);
                lines.push(format!("{}{}", INDENT.repeat(depth), tag));
            }
            Token::Open(tag) => {
                lines.push(format!("{}{}", INDENT.repeat(depth), tag));
                if opens_scope(tag) {
                    depth += 1;
                }
            }
            Token::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    lines.push(format!("{}{}", INDENT.repeat(depth), trimmed));
                }
            }
        }
    }

    tracing::debug!(lines = lines.len(), "pretty-printed HTML");
    Ok(lines.join("\n"))
}

/// Collapse an HTML fragment to minimal size, preserving content.
///
/// Comments are stripped unconditionally; there is no escape mechanism to
/// keep one.
pub fn minify(html: &str) -> WorkflowResult<String> {
    static BETWEEN_TAGS: OnceLock<Regex> = OnceLock::new();
    static SPACE_BEFORE_SLASH: OnceLock<Regex> = OnceLock::new();
    static LOOSE_SELF_CLOSE: OnceLock<Regex> = OnceLock::new();
    static COMMENT: OnceLock<Regex> = OnceLock::new();

    require_input("HTML", html)?;

    let s = collapse_whitespace(html);
    let s = BETWEEN_TAGS
        .get_or_init(|| Regex::new(r">\s+<").unwrap())
        .replace_all(&s, "><");
    let s = LOOSE_SELF_CLOSE
        .get_or_init(|| Regex::new(r"/\s+>").unwrap())
        .replace_all(&s, "/>");
    let s = SPACE_BEFORE_SLASH
        .get_or_init(|| Regex::new(r"\s+/>").unwrap())
        .replace_all(&s, "/>");
    let s = COMMENT
        .get_or_init(|| Regex::new(r"(?s)<!--.*?-->").unwrap())
        .replace_all(&s, "");
    // Stripping a comment between two text runs can butt two spaces together.
    let s = collapse_whitespace(&s);
    Ok(s.trim().to_string())
}

fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = html;

    while !rest.is_empty() {
        match rest.find('<') {
            Some(start) => {
                if start > 0 {
                    tokens.push(Token::Text(&rest[..start]));
                }
                let tail = &rest[start..];
                match tail.find('>') {
                    Some(end) => {
                        let tag = &tail[..=end];
                        if tag.starts_with("</") {
                            tokens.push(Token::Close(tag));
                        } else {
                            tokens.push(Token::Open(tag));
                        }
                        rest = &tail[end + 1..];
                    }
                    None => {
                        // Unterminated tag: emit the remainder as text.
                        tokens.push(Token::Text(tail));
                        rest = "";
                    }
                }
            }
            None => {
                tokens.push(Token::Text(rest));
                rest = "";
            }
        }
    }

    tokens
}

/// True if the tag increases nesting depth for everything after it.
fn opens_scope(tag: &str) -> bool {
    if tag.starts_with("<!") || tag.starts_with("<?") || tag.ends_with("/>") {
        return false;
    }
    !VOID_TAGS.contains(&tag_name(tag).as_str())
}

fn tag_name(tag: &str) -> String {
    tag.trim_start_matches(['<', '/'])
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}
