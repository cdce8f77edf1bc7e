//! Icon-span repair.
//!
//! The legacy content editor sanitizes HTML every time a module is
//! reopened and deletes empty inline elements, which is what icon spans
//! are. Filling each with a zero-width space keeps them alive, and a
//! second pass attaches icons to headings whose wording implies one.

use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::OnceLock;

use super::{class_attribute, contains_icon_span, is_icon_class, require_input};
use crate::error::WorkflowResult;
use crate::report::ChangeReport;

/// The HTML entity written into repaired spans.
pub const ZERO_WIDTH_SPACE_ENTITY: &str = "&#8203;";
const ZERO_WIDTH_SPACE_CHAR: char = '\u{200B}';

/// Keyword patterns tested against heading text, in priority order: the
/// first match wins and decides the icon. Reordering this list changes
/// which icon ambiguous headings get.
const HEADING_ICON_RULES: &[(&str, &str)] = &[
    (r"quick\s*links?", "ca-gov-icon-link"),
    (r"download", "ca-gov-icon-download"),
    (r"contact(\s*us)?", "ca-gov-icon-contact-us"),
    (r"calendar|event|meeting", "ca-gov-icon-calendar"),
    (r"e-?mail", "ca-gov-icon-email"),
    (r"info(rmation)?", "ca-gov-icon-info"),
    (r"legal|law|regulation", "ca-gov-icon-justice-legal"),
    (r"favorite|bookmark", "ca-gov-icon-favorite"),
    (r"facebook", "ca-gov-icon-facebook"),
    (r"youtube", "ca-gov-icon-youtube"),
    (r"instagram", "ca-gov-icon-instagram"),
    (r"linkedin", "ca-gov-icon-linkedin"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconRepairOutcome {
    pub html: String,
    /// Total number of repairs across both passes.
    pub repairs: usize,
    pub report: ChangeReport,
}

/// Fill empty icon spans with a zero-width space and prefix icon-less
/// headings that match a keyword rule with a matching icon span.
///
/// Running the repair twice yields the same HTML as running it once.
pub fn repair_icons(html: &str) -> WorkflowResult<IconRepairOutcome> {
    require_input("HTML", html)?;

    let mut filled = 0usize;
    let s = fill_empty_icon_spans(html, &mut filled);

    let mut prefixed = 0usize;
    let s = prefix_heading_icons(&s, &mut prefixed);

    let mut report = ChangeReport::new();
    report.record(
        filled,
        "empty icon span filled with a zero-width space",
        "empty icon spans filled with a zero-width space",
    );
    report.record(
        prefixed,
        "heading prefixed with an icon span",
        "headings prefixed with an icon span",
    );
    tracing::debug!(filled, prefixed, "icon repair finished");

    Ok(IconRepairOutcome {
        html: s,
        repairs: filled + prefixed,
        report,
    })
}

fn fill_empty_icon_spans(html: &str, count: &mut usize) -> String {
    static EMPTY_SPAN: OnceLock<Regex> = OnceLock::new();
    let re = EMPTY_SPAN
        .get_or_init(|| Regex::new(r"(?is)(<span\b[^>]*>)(\s*)(</span\s*>)").unwrap());

    re.replace_all(html, |caps: &Captures| {
        let open = &caps[1];
        let content = &caps[2];
        let already_marked = content.contains(ZERO_WIDTH_SPACE_ENTITY)
            || content.contains(ZERO_WIDTH_SPACE_CHAR);
        if class_attribute(open).is_some_and(is_icon_class) && !already_marked {
            *count += 1;
            format!("{}{}{}", open, ZERO_WIDTH_SPACE_ENTITY, &caps[3])
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}

fn prefix_heading_icons(html: &str, count: &mut usize) -> String {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    static ANY_TAG: OnceLock<Regex> = OnceLock::new();
    let heading = HEADING
        .get_or_init(|| Regex::new(r"(?is)(<h[1-6]\b[^>]*>)(.*?)(</h[1-6]\s*>)").unwrap());
    let any_tag = ANY_TAG.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());

    heading
        .replace_all(html, |caps: &Captures| {
            let open = &caps[1];
            let inner = &caps[2];
            let close = &caps[3];
            if contains_icon_span(inner) {
                return caps[0].to_string();
            }
            let text = any_tag.replace_all(inner, " ");
            for (rule, class) in heading_rules() {
                if rule.is_match(&text) {
                    *count += 1;
                    return format!(
                        "{}<span aria-hidden=\"true\" class=\"{}\">{}</span> {}{}",
                        open, class, ZERO_WIDTH_SPACE_ENTITY, inner, close
                    );
                }
            }
            caps[0].to_string()
        })
        .into_owned()
}

fn heading_rules() -> &'static [(Regex, &'static str)] {
    static RULES: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    RULES.get_or_init(|| {
        HEADING_ICON_RULES
            .iter()
            .map(|(pattern, class)| {
                (Regex::new(&format!("(?i){}", pattern)).unwrap(), *class)
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_fills_empty_icon_span() {
        let html = r#"<span aria-hidden="true" class="ca-gov-icon-info"></span>"#;
        let outcome = repair_icons(html).unwrap();
        assert_eq!(
            outcome.html,
            r#"<span aria-hidden="true" class="ca-gov-icon-info">&#8203;</span>"#
        );
        assert_eq!(outcome.repairs, 1);
    }

    #[test]
    fn test_fills_whitespace_only_icon_span() {
        let html = "<span class=\"external-link-icon\">  \n </span>";
        let outcome = repair_icons(html).unwrap();
        assert_eq!(
            outcome.html,
            "<span class=\"external-link-icon\">&#8203;</span>"
        );
        assert_eq!(outcome.repairs, 1);
    }

    #[test]
    fn test_leaves_non_icon_spans_alone() {
        let html = r#"<span class="sr-only"></span>"#;
        let outcome = repair_icons(html).unwrap();
        assert_eq!(outcome.html, html);
        assert_eq!(outcome.repairs, 0);
        assert!(outcome.report.is_empty());
    }

    #[test]
    fn test_heading_gets_link_icon() {
        let outcome = repair_icons("<h3>Quick Links</h3>").unwrap();
        assert_eq!(
            outcome.html,
            "<h3><span aria-hidden=\"true\" class=\"ca-gov-icon-link\">&#8203;</span> Quick Links</h3>"
        );
        assert_eq!(outcome.repairs, 1);
    }

    #[test]
    fn test_heading_priority_order_first_match_wins() {
        // "download" outranks "contact" in the rule order.
        let outcome = repair_icons("<h2>Download our contact sheet</h2>").unwrap();
        assert!(outcome.html.contains("ca-gov-icon-download"));
        assert!(!outcome.html.contains("ca-gov-icon-contact-us"));
    }

    #[test]
    fn test_repair_is_idempotent() {
        let html = r#"<h3>Quick Links</h3><span class="ca-gov-icon-email"></span>"#;
        let once = repair_icons(html).unwrap();
        assert_eq!(once.repairs, 2);
        let twice = repair_icons(&once.html).unwrap();
        assert_eq!(twice.html, once.html);
        assert_eq!(twice.repairs, 0);
    }

    #[test]
    fn test_heading_with_existing_icon_span_is_skipped() {
        let html = concat!(
            "<h4><span aria-hidden=\"true\" class=\"ca-gov-icon-calendar\">&#8203;</span>",
            " Meeting Schedule</h4>"
        );
        let outcome = repair_icons(html).unwrap();
        assert_eq!(outcome.html, html);
        assert_eq!(outcome.repairs, 0);
    }

    #[test]
    fn test_heading_without_keywords_untouched() {
        let outcome = repair_icons("<h1>Mission Statement</h1>").unwrap();
        assert_eq!(outcome.html, "<h1>Mission Statement</h1>");
        assert_eq!(outcome.repairs, 0);
    }
}
