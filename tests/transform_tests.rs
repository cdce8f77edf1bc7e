use pretty_assertions::assert_eq;
use workflowhub::{
    clean_html, format_css, format_html, format_js, minify_css, minify_html, minify_js,
    repair_icons, WorkflowError,
};

// Idempotence: every minifier is a fixed point of itself.

#[test]
fn test_html_minifier_is_idempotent() {
    let html = "<div>\n  <p>a <!-- note --> b</p>\n  <br / >\n</div>";
    let once = minify_html(html).unwrap();
    assert_eq!(minify_html(&once).unwrap(), once);
}

#[test]
fn test_css_minifier_is_idempotent() {
    let css = ".a , .b { color : red ; /* x */ }";
    let once = minify_css(css).unwrap();
    assert_eq!(minify_css(&once).unwrap(), once);
}

#[test]
fn test_js_minifier_is_idempotent() {
    let js = "function f ( a , b ) { return a + b ; } // sum";
    let once = minify_js(js).unwrap();
    assert_eq!(minify_js(&once).unwrap(), once);
}

// Icon repair round-trip safety.

#[test]
fn test_icon_repair_is_idempotent() {
    let html = concat!(
        r#"<span aria-hidden="true" class="ca-gov-icon-download"></span>"#,
        "<h3>Quick Links</h3>",
    );
    let once = repair_icons(html).unwrap();
    assert_eq!(once.repairs, 2);
    let twice = repair_icons(&once.html).unwrap();
    assert_eq!(twice.html, once.html);
    assert_eq!(twice.repairs, 0);
}

#[test]
fn test_icon_repair_fills_empty_info_span() {
    let html = "<span aria-hidden=\"true\" class=\"ca-gov-icon-info\"></span>";
    let outcome = repair_icons(html).unwrap();
    assert_eq!(
        outcome.html,
        "<span aria-hidden=\"true\" class=\"ca-gov-icon-info\">&#8203;</span>"
    );
    assert_eq!(outcome.repairs, 1);
}

#[test]
fn test_icon_repair_prefixes_quick_links_heading() {
    let outcome = repair_icons("<h3>Quick Links</h3>").unwrap();
    assert!(outcome.html.contains("ca-gov-icon-link"));
    assert!(outcome.html.starts_with("<h3><span aria-hidden=\"true\""));
    assert_eq!(outcome.repairs, 1);

    let again = repair_icons(&outcome.html).unwrap();
    assert_eq!(again.repairs, 0);
}

// Cleanup.

#[test]
fn test_cleanup_collapses_double_space_without_growing() {
    let outcome = clean_html("<p>a  b</p>").unwrap();
    assert_eq!(outcome.html, "<p>a b</p>");
    assert!(outcome.html.len() < "<p>a  b</p>".len());
}

#[test]
fn test_cleanup_reports_two_categories_for_nbsp_paragraph_and_empty_div() {
    let outcome = clean_html("<p>&nbsp;&nbsp;&nbsp;</p><div></div>").unwrap();
    assert_eq!(outcome.html, "");
    assert_eq!(outcome.report.len(), 2);
}

// Pretty-printer indent clamping.

#[test]
fn test_html_pretty_printer_indent_never_negative() {
    let out = format_html("<div></div></div>").unwrap();
    for line in out.lines() {
        let indent = line.len() - line.trim_start().len();
        assert_eq!(indent % 2, 0, "odd indent in {:?}", line);
    }
    assert_eq!(out, "<div>\n</div>\n</div>");
}

// CSS minifier comment stripping.

#[test]
fn test_css_minifier_strips_comments() {
    assert_eq!(
        minify_css("/* c */ .a { color: red; }").unwrap(),
        ".a{color:red;}"
    );
}

// Advisory errors on empty buffers.

#[test]
fn test_all_transforms_reject_empty_input() {
    assert!(matches!(
        format_html(""),
        Err(WorkflowError::EmptyInput { .. })
    ));
    assert!(matches!(
        minify_html(" \n "),
        Err(WorkflowError::EmptyInput { .. })
    ));
    assert!(matches!(
        format_css("\t"),
        Err(WorkflowError::EmptyInput { .. })
    ));
    assert!(matches!(
        format_js(""),
        Err(WorkflowError::EmptyInput { .. })
    ));
    assert!(matches!(
        repair_icons(""),
        Err(WorkflowError::EmptyInput { .. })
    ));
    assert!(matches!(
        clean_html("  "),
        Err(WorkflowError::EmptyInput { .. })
    ));
}

// Transforms never fail on malformed markup.

#[test]
fn test_malformed_markup_is_best_effort() {
    assert!(format_html("<div><p>unclosed").is_ok());
    assert!(minify_html("<<<>>>").is_ok());
    assert!(format_css("not css at all }{ ;").is_ok());
    assert!(minify_js("}}}}").is_ok());
    assert!(clean_html("<p>odd <span>").is_ok());
}
