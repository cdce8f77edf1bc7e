//! Messy-HTML cleanup.
//!
//! A fixed catalogue of removal passes runs over the fragment; each pass
//! that finds something contributes one line to the change report with its
//! occurrence count. Empty-element removal runs before the whitespace
//! collapses so an `&nbsp;`-stuffed paragraph counts as one removed
//! paragraph, not as a collapsed entity run plus a removed paragraph.

use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::OnceLock;

use super::{class_attribute, is_icon_class, require_input};
use crate::error::WorkflowResult;
use crate::report::ChangeReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanupOutcome {
    pub html: String,
    pub report: ChangeReport,
}

struct Passes {
    empty_paragraph: Regex,
    empty_div: Regex,
    empty_span: Regex,
    space_run: Regex,
    nbsp_run: Regex,
    br_run: Regex,
    space_before_punct: Regex,
    empty_style_attr: Regex,
    empty_class_attr: Regex,
    placeholder_anchor: Regex,
    comment: Regex,
    tag_boundary: Regex,
}

fn passes() -> &'static Passes {
    static PASSES: OnceLock<Passes> = OnceLock::new();
    PASSES.get_or_init(|| Passes {
        empty_paragraph: Regex::new(r"(?is)<p\b[^>]*>(?:\s|&nbsp;)*</p\s*>").unwrap(),
        empty_div: Regex::new(r"(?is)<div\b[^>]*>\s*</div\s*>").unwrap(),
        empty_span: Regex::new(r"(?is)(<span\b[^>]*>)\s*</span\s*>").unwrap(),
        space_run: Regex::new(r" {2,}").unwrap(),
        nbsp_run: Regex::new(r"&nbsp;(?:\s*&nbsp;)+").unwrap(),
        br_run: Regex::new(r"(?is)(?:<br\s*/?>\s*){3,}").unwrap(),
        space_before_punct: Regex::new(r"\s+([.,;:!?])").unwrap(),
        empty_style_attr: Regex::new(r#"\s+style\s*=\s*(?:""|'')"#).unwrap(),
        empty_class_attr: Regex::new(r#"\s+class\s*=\s*(?:""|'')"#).unwrap(),
        placeholder_anchor: Regex::new(
            r##"(?is)<a\b[^>]*href\s*=\s*(?:"#"|'#')[^>]*>(.*?)</a\s*>"##,
        )
        .unwrap(),
        comment: Regex::new(r"(?s)<!--.*?-->").unwrap(),
        tag_boundary: Regex::new(r">\s+<").unwrap(),
    })
}

/// Apply every cleanup pass in order and report what each one found.
pub fn clean(html: &str) -> WorkflowResult<CleanupOutcome> {
    require_input("HTML", html)?;

    let p = passes();
    let mut report = ChangeReport::new();

    let s = apply(
        html,
        &p.empty_paragraph,
        "",
        &mut report,
        "empty paragraph removed",
        "empty paragraphs removed",
    );
    let s = apply(
        &s,
        &p.empty_div,
        "",
        &mut report,
        "empty div removed",
        "empty divs removed",
    );
    let s = remove_empty_spans(&s, &p.empty_span, &mut report);
    let s = apply(
        &s,
        &p.space_run,
        " ",
        &mut report,
        "run of spaces collapsed",
        "runs of spaces collapsed",
    );
    let s = apply(
        &s,
        &p.nbsp_run,
        "&nbsp;",
        &mut report,
        "run of &nbsp; entities collapsed",
        "runs of &nbsp; entities collapsed",
    );
    let s = apply(
        &s,
        &p.br_run,
        "<br><br>",
        &mut report,
        "run of <br> tags reduced to two",
        "runs of <br> tags reduced to two",
    );
    let s = apply(
        &s,
        &p.space_before_punct,
        "${1}",
        &mut report,
        "space before punctuation removed",
        "spaces before punctuation removed",
    );
    let s = apply(
        &s,
        &p.empty_style_attr,
        "",
        &mut report,
        "empty style attribute removed",
        "empty style attributes removed",
    );
    let s = apply(
        &s,
        &p.empty_class_attr,
        "",
        &mut report,
        "empty class attribute removed",
        "empty class attributes removed",
    );
    let s = apply(
        &s,
        &p.placeholder_anchor,
        "${1}",
        &mut report,
        "placeholder link unwrapped",
        "placeholder links unwrapped",
    );
    let s = apply(
        &s,
        &p.comment,
        "",
        &mut report,
        "HTML comment removed",
        "HTML comments removed",
    );

    let html = normalize_boundaries(&s, &p.tag_boundary);
    tracing::debug!(categories = report.len(), "cleanup finished");

    Ok(CleanupOutcome { html, report })
}

fn apply(
    input: &str,
    re: &Regex,
    replacement: &str,
    report: &mut ChangeReport,
    singular: &str,
    plural: &str,
) -> String {
    let count = re.find_iter(input).count();
    if count == 0 {
        return input.to_string();
    }
    report.record(count, singular, plural);
    re.replace_all(input, replacement).into_owned()
}

/// Empty spans go, except the ones whose class marks them as icons; those
/// stay so the icon-repair pass is not undone.
fn remove_empty_spans(input: &str, re: &Regex, report: &mut ChangeReport) -> String {
    let mut count = 0usize;
    let out = re
        .replace_all(input, |caps: &Captures| {
            if class_attribute(&caps[1]).is_some_and(is_icon_class) {
                caps[0].to_string()
            } else {
                count += 1;
                String::new()
            }
        })
        .into_owned();
    report.record(count, "empty span removed", "empty spans removed");
    out
}

/// Whitespace between tags becomes one newline; every line is trimmed and
/// blank lines are dropped.
fn normalize_boundaries(input: &str, tag_boundary: &Regex) -> String {
    let s = tag_boundary.replace_all(input, ">\n<");
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collapses_double_space() {
        let outcome = clean("<p>a  b</p>").unwrap();
        assert_eq!(outcome.html, "<p>a b</p>");
        assert_eq!(outcome.report.len(), 1);
    }

    #[test]
    fn test_removes_nbsp_paragraph_and_empty_div() {
        let outcome = clean("<p>&nbsp;&nbsp;&nbsp;</p><div></div>").unwrap();
        assert_eq!(outcome.html, "");
        assert_eq!(outcome.report.len(), 2);
    }

    #[test]
    fn test_keeps_icon_spans_removes_plain_ones() {
        let html = r#"<span class="ca-gov-icon-info"></span><span class="note"> </span>"#;
        let outcome = clean(html).unwrap();
        assert_eq!(outcome.html, r#"<span class="ca-gov-icon-info"></span>"#);
        assert_eq!(outcome.report.len(), 1);
    }

    #[test]
    fn test_reduces_br_runs_to_two() {
        let outcome = clean("a<br><br><br><br>b").unwrap();
        assert_eq!(outcome.html, "a<br><br>b");
    }

    #[test]
    fn test_removes_space_before_punctuation() {
        let outcome = clean("<p>Hello , world !</p>").unwrap();
        assert_eq!(outcome.html, "<p>Hello, world!</p>");
    }

    #[test]
    fn test_strips_empty_attributes() {
        let outcome = clean(r#"<p style="" class="">text</p>"#).unwrap();
        assert_eq!(outcome.html, "<p>text</p>");
        assert_eq!(outcome.report.len(), 2);
    }

    #[test]
    fn test_unwraps_placeholder_anchors() {
        let outcome = clean(r##"<p><a href="#">read more</a></p>"##).unwrap();
        assert_eq!(outcome.html, "<p>read more</p>");
    }

    #[test]
    fn test_strips_comments() {
        let outcome = clean("<p>keep</p><!-- drop -->").unwrap();
        assert_eq!(outcome.html, "<p>keep</p>");
    }

    #[test]
    fn test_tag_boundaries_get_one_newline() {
        let outcome = clean("<div><p>x</p>   <p>y</p></div>").unwrap();
        assert_eq!(outcome.html, "<div><p>x</p>\n<p>y</p></div>");
    }

    #[test]
    fn test_clean_input_reports_nothing() {
        let outcome = clean("<p>already tidy</p>").unwrap();
        assert_eq!(outcome.html, "<p>already tidy</p>");
        assert!(outcome.report.is_empty());
    }
}
