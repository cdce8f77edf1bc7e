//! The markup transform engine: stateless string-to-string tools.
//!
//! Every transform is an independent pure function: text in, text out,
//! plus a change report for the cleanup and icon-repair tools. There is no
//! shared state between them and no required invocation order.

pub mod cleanup;
pub mod css;
pub mod html;
pub mod icons;
pub mod js;
pub mod textcase;

pub use cleanup::{clean, CleanupOutcome};
pub use icons::{repair_icons, IconRepairOutcome};

use crate::error::{WorkflowError, WorkflowResult};
use regex::Regex;
use std::sync::OnceLock;

/// Substrings that mark a `class` attribute as icon markup.
pub const ICON_CLASS_MARKERS: &[&str] = &["ca-gov-icon-", "external-link-icon", "icon-"];

pub fn is_icon_class(classes: &str) -> bool {
    ICON_CLASS_MARKERS.iter().any(|marker| classes.contains(marker))
}

/// Empty and whitespace-only buffers get an advisory instead of output.
pub(crate) fn require_input(tool: &'static str, input: &str) -> WorkflowResult<()> {
    if input.trim().is_empty() {
        return Err(WorkflowError::EmptyInput { tool });
    }
    Ok(())
}

/// Collapse every whitespace run to a single space.
pub(crate) fn collapse_whitespace(input: &str) -> String {
    static WS: OnceLock<Regex> = OnceLock::new();
    WS.get_or_init(|| Regex::new(r"\s+").unwrap())
        .replace_all(input, " ")
        .into_owned()
}

/// Read the `class` attribute value out of an open tag, if present.
pub(crate) fn class_attribute(open_tag: &str) -> Option<&str> {
    static CLASS_ATTR: OnceLock<Regex> = OnceLock::new();
    let re = CLASS_ATTR
        .get_or_init(|| Regex::new(r#"(?i)class\s*=\s*["']([^"']*)["']"#).unwrap());
    re.captures(open_tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// True if the fragment contains a `<span>` whose class marks it as an icon.
pub(crate) fn contains_icon_span(fragment: &str) -> bool {
    static SPAN_OPEN: OnceLock<Regex> = OnceLock::new();
    let re = SPAN_OPEN.get_or_init(|| Regex::new(r"(?is)<span\b[^>]*>").unwrap());
    re.find_iter(fragment)
        .any(|m| class_attribute(m.as_str()).is_some_and(is_icon_class))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_icon_class() {
        assert!(is_icon_class("ca-gov-icon-download"));
        assert!(is_icon_class("external-link-icon"));
        assert!(is_icon_class("some icon-star widget"));
        assert!(!is_icon_class("card-body"));
    }

    #[test]
    fn test_class_attribute() {
        assert_eq!(
            class_attribute(r#"<span aria-hidden="true" class="ca-gov-icon-info">"#),
            Some("ca-gov-icon-info")
        );
        assert_eq!(class_attribute("<span class='a b'>"), Some("a b"));
        assert_eq!(class_attribute("<span id=\"x\">"), None);
    }

    #[test]
    fn test_contains_icon_span() {
        assert!(contains_icon_span(
            r#"<span aria-hidden="true" class="ca-gov-icon-link">&#8203;</span> Quick Links"#
        ));
        assert!(!contains_icon_span(r#"<span class="sr-only">Facebook</span>"#));
        assert!(!contains_icon_span("plain text"));
    }

    #[test]
    fn test_require_input_rejects_whitespace() {
        assert!(matches!(
            require_input("HTML", "   \n\t"),
            Err(WorkflowError::EmptyInput { tool: "HTML" })
        ));
        assert!(require_input("HTML", "<p>x</p>").is_ok());
    }
}
