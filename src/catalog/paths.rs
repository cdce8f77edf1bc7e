use super::Snippet;

/// File-path references for the document portals.
pub const SOURCE_PATHS: &[Snippet] = &[
    Snippet {
        name: "Certification Actions",
        description: Some("File path reference"),
        body: "/Portals/0/post_docs/Certification_Actions/",
    },
    Snippet {
        name: "Determination Notices",
        description: Some("File path reference"),
        body: "/Portals/0/post_docs/Certification_Actions/Determination_Notices/",
    },
    Snippet {
        name: "Pleadings Orders",
        description: Some("File path reference"),
        body: "/Portals/0/post_docs/Certification_Actions/Pleadings_Orders/",
    },
    Snippet {
        name: "Revocation Orders",
        description: Some("File path reference"),
        body: "/Portals/0/post_docs/Certification_Actions/Revocation_Orders/",
    },
    Snippet {
        name: "Statement of Findings",
        description: Some("File path reference"),
        body: "/Portals/0/post_docs/Certification_Actions/Statement_of_Findings/",
    },
    Snippet {
        name: "Suspension Orders",
        description: Some("File path reference"),
        body: "/Portals/0/post_docs/Certification_Actions/Suspension_Orders/",
    },
    Snippet {
        name: "Commission Meetings",
        description: Some("File path reference"),
        body: "/Portals/0/post_docs/commissionmeetings/2025/xx.pdf",
    },
    Snippet {
        name: "POST Docs Root",
        description: Some("File path reference"),
        body: "/Portals/0/post_docs/",
    },
    Snippet {
        name: "Documents Root",
        description: Some("File path reference"),
        body: "/Portals/0/Documents/",
    },
    Snippet {
        name: "Images Root",
        description: Some("File path reference"),
        body: "/Portals/0/Images/",
    },
    Snippet {
        name: "Resources",
        description: Some("File path reference"),
        body: "/Portals/0/Resources/",
    },
];
