//! CSS pretty-printer and minifier.
//!
//! Both are regex substitution pipelines with no CSS parsing: malformed
//! input produces malformed but non-crashing output.

use regex::Regex;
use std::sync::OnceLock;

use super::{collapse_whitespace, require_input};
use crate::error::WorkflowResult;

/// Reformat CSS with one declaration per line and a blank line after each
/// rule block.
pub fn pretty_print(css: &str) -> WorkflowResult<String> {
    static OPEN_BRACE: OnceLock<Regex> = OnceLock::new();
    static SEMICOLON: OnceLock<Regex> = OnceLock::new();
    static CLOSE_BRACE: OnceLock<Regex> = OnceLock::new();
    static COMMA: OnceLock<Regex> = OnceLock::new();

    require_input("CSS", css)?;

    let s = collapse_whitespace(css);
    let s = OPEN_BRACE
        .get_or_init(|| Regex::new(r"\s*\{\s*").unwrap())
        .replace_all(&s, " {\n  ");
    let s = SEMICOLON
        .get_or_init(|| Regex::new(r";\s*").unwrap())
        .replace_all(&s, ";\n  ");
    let s = CLOSE_BRACE
        .get_or_init(|| Regex::new(r"\s*\}\s*").unwrap())
        .replace_all(&s, "\n}\n\n");
    let s = COMMA
        .get_or_init(|| Regex::new(r",\s*").unwrap())
        .replace_all(&s, ",\n");
    Ok(tidy_lines(&s))
}

/// Strip comments and squeeze out every inessential space.
pub fn minify(css: &str) -> WorkflowResult<String> {
    static BLOCK_COMMENT: OnceLock<Regex> = OnceLock::new();
    static AROUND_PUNCT: OnceLock<Regex> = OnceLock::new();

    require_input("CSS", css)?;

    let s = BLOCK_COMMENT
        .get_or_init(|| Regex::new(r"(?s)/\*.*?\*/").unwrap())
        .replace_all(css, "");
    let s = collapse_whitespace(&s);
    let s = AROUND_PUNCT
        .get_or_init(|| Regex::new(r"\s*([{};:,])\s*").unwrap())
        .replace_all(&s, "${1}");
    Ok(s.trim().to_string())
}

/// Trim line ends, collapse blank-line runs to one, drop outer blanks.
pub(crate) fn tidy_lines(s: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut blank_run = 0usize;
    for line in s.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        lines.push(line);
    }
    while lines.first().is_some_and(|l| l.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pretty_print_single_rule() {
        let css = ".a { color: red; background: blue; }";
        let expected = ".a {\n  color: red;\n  background: blue;\n}";
        assert_eq!(pretty_print(css).unwrap(), expected);
    }

    #[test]
    fn test_pretty_print_selector_list_on_own_lines() {
        let css = ".a, .b { color: red; }";
        let expected = ".a,\n.b {\n  color: red;\n}";
        assert_eq!(pretty_print(css).unwrap(), expected);
    }

    #[test]
    fn test_pretty_print_blank_line_between_rules() {
        let css = ".a{color:red;}.b{color:blue;}";
        let expected = ".a {\n  color:red;\n}\n\n.b {\n  color:blue;\n}";
        assert_eq!(pretty_print(css).unwrap(), expected);
    }

    #[test]
    fn test_minify_strips_comments_and_spaces() {
        assert_eq!(
            minify("/* c */ .a { color: red; }").unwrap(),
            ".a{color:red;}"
        );
    }

    #[test]
    fn test_minify_is_idempotent() {
        let css = ".nav ul li { margin: 0 ; /* gap */ padding : 0; }";
        let once = minify(css).unwrap();
        assert_eq!(minify(&once).unwrap(), once);
    }

    #[test]
    fn test_empty_input_is_an_advisory() {
        assert!(pretty_print("").is_err());
        assert!(minify("\n\n").is_err());
    }
}
