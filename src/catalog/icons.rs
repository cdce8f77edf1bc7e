use super::Snippet;

/// CA Gov icon markup, ready to copy. Every span ships empty; the icon
/// repair tool fills them with a zero-width space before they reach the
/// legacy editor.
pub const ICONS: &[Snippet] = &[
    Snippet {
        name: "Download",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-download"></span>"#,
    },
    Snippet {
        name: "Link",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-link"></span>"#,
    },
    Snippet {
        name: "Calendar",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-calendar"></span>"#,
    },
    Snippet {
        name: "Info",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-info"></span>"#,
    },
    Snippet {
        name: "Justice/Legal",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-justice-legal"></span>"#,
    },
    Snippet {
        name: "Contact Us",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-contact-us"></span>"#,
    },
    Snippet {
        name: "Favorite",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-favorite"></span>"#,
    },
    Snippet {
        name: "YouTube",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-youtube"></span>"#,
    },
    Snippet {
        name: "Facebook",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-facebook"></span>"#,
    },
    Snippet {
        name: "Email",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-email"></span>"#,
    },
    Snippet {
        name: "Instagram",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-instagram"></span>"#,
    },
    Snippet {
        name: "LinkedIn",
        description: None,
        body: r#"<span aria-hidden="true" class="ca-gov-icon-linkedin"></span>"#,
    },
    Snippet {
        name: "External Link",
        description: None,
        body: r#"<span class="external-link-icon" aria-hidden="true"></span>"#,
    },
];
