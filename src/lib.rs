//! # WorkflowHub markup toolkit
//!
//! The engine behind the WorkflowHub staff tool: stateless text transforms
//! for pasted HTML/CSS/JS, icon-span repair and messy-HTML cleanup with
//! change reports, plain-text case utilities, standardized PDF filename
//! generation, and the searchable snippet catalog.
//!
//! ## Features
//! - Pretty-printers and minifiers for HTML, CSS, and JavaScript
//! - Zero-width-space icon repair for the legacy content editor
//! - Cleanup of a fixed catalogue of messy-HTML patterns, with a report
//! - Case transforms, filename builders, and static snippet tables
//!
//! Every transform is best-effort: regex substitution pipelines and a flat
//! token walk, never a real parser. Arbitrary or malformed markup still
//! produces output instead of an error; the only errors are advisory
//! (empty input, invalid filename pieces).
//!
//! ## Example
//! ```ignore
//! use workflowhub::repair_icons;
//!
//! let html = r#"<span aria-hidden="true" class="ca-gov-icon-info"></span>"#;
//! let outcome = repair_icons(html).expect("non-empty input");
//! assert_eq!(outcome.repairs, 1);
//! ```

pub mod catalog;
pub mod error;
pub mod filename;
pub mod report;
pub mod transform;

// --- Core types ---
pub use error::{WorkflowError, WorkflowResult};
pub use report::ChangeReport;
pub use transform::cleanup::CleanupOutcome;
pub use transform::icons::IconRepairOutcome;

/// Pretty-print an HTML fragment.
pub fn format_html(html: &str) -> WorkflowResult<String> {
    transform::html::pretty_print(html)
}

/// Minify an HTML fragment.
pub fn minify_html(html: &str) -> WorkflowResult<String> {
    transform::html::minify(html)
}

/// Pretty-print CSS.
pub fn format_css(css: &str) -> WorkflowResult<String> {
    transform::css::pretty_print(css)
}

/// Minify CSS.
pub fn minify_css(css: &str) -> WorkflowResult<String> {
    transform::css::minify(css)
}

/// Pretty-print JavaScript. Unsafe on non-trivial JS — see [`transform::js`].
pub fn format_js(js: &str) -> WorkflowResult<String> {
    transform::js::pretty_print(js)
}

/// Minify JavaScript. Unsafe on non-trivial JS — see [`transform::js`].
pub fn minify_js(js: &str) -> WorkflowResult<String> {
    transform::js::minify(js)
}

/// Fill empty icon spans and attach icons to matching headings.
pub fn repair_icons(html: &str) -> WorkflowResult<IconRepairOutcome> {
    transform::icons::repair_icons(html)
}

/// Remove the fixed catalogue of messy-HTML patterns.
pub fn clean_html(html: &str) -> WorkflowResult<CleanupOutcome> {
    transform::cleanup::clean(html)
}
