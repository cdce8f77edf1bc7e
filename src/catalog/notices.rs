use super::Snippet;

/// PASS notice templates.
pub const PASS_NOTICES: &[Snippet] = &[
    Snippet {
        name: "PASS Course Notice",
        description: Some("Course announcement with PDF link"),
        body: r#"<h2><a href="https://post.ca.gov/Portals/0/post_docs/PASS_Notices/xx.pdf" target="_blank">Lorem text</a></h2>

<p>Course will be held January 15, 2026 in Long Beach, CA</p>"#,
    },
    Snippet {
        name: "Standard PASS Notice",
        description: Some("Official notice template"),
        body: r#"PASS NOTICE

Applicant Name: [Name]
Application ID: [ID]
Date: [Date]

This notice confirms that the applicant has successfully passed all required examinations and meets the certification requirements.

Certification Type: [Type]
Effective Date: [Date]
Expiration Date: [Date]

Authorized by: [Authority Name]"#,
    },
    Snippet {
        name: "Conditional PASS Notice",
        description: Some("Conditional approval template"),
        body: r#"CONDITIONAL PASS NOTICE

Applicant Name: [Name]
Application ID: [ID]
Date: [Date]

This notice confirms conditional approval pending completion of:
- [ ] Background verification
- [ ] Additional documentation
- [ ] Training completion

Deadline for completion: [Date]

Contact: [Contact Info]"#,
    },
    Snippet {
        name: "PASS with Commendation",
        description: Some("Distinction award template"),
        body: r#"PASS NOTICE - WITH DISTINCTION

Applicant Name: [Name]
Application ID: [ID]
Date: [Date]

Congratulations! The applicant has demonstrated exceptional performance and is hereby awarded certification WITH DISTINCTION.

Score: [Score]
Percentile: [Percentile]

This achievement recognizes outstanding dedication and expertise.

Authorized by: [Authority Name]"#,
    },
];
