use super::Snippet;

/// Canned email responses. Bracketed placeholders are filled in by hand.
pub const EMAIL_TEMPLATES: &[Snippet] = &[
    Snippet {
        name: "Acknowledgment Response",
        description: Some("Click to copy full template"),
        body: r#"Dear [Name],

Thank you for your inquiry. We have received your request and will review it within 3-5 business days.

If you have any additional questions, please do not hesitate to contact us.

Best regards,
[Your Name]"#,
    },
    Snippet {
        name: "Document Request Follow-up",
        description: Some("Click to copy full template"),
        body: r#"Dear [Name],

This is a follow-up regarding your document request submitted on [Date].

We are currently processing your request and expect to have an update by [Expected Date].

Thank you for your patience.

Best regards,
[Your Name]"#,
    },
    Snippet {
        name: "Certification Status Update",
        description: Some("Click to copy full template"),
        body: r#"Dear [Name],

We are writing to inform you about the status of your certification application.

Status: [PENDING/APPROVED/REQUIRES ADDITIONAL INFO]

[Additional details here]

Please contact us if you have any questions.

Best regards,
[Your Name]"#,
    },
    Snippet {
        name: "Job Listing Posted Confirmation",
        description: Some("Click to copy full template"),
        body: r#"Hi [Name],

Your job listing has been posted and announced. You can view it here:
https://post.ca.gov/Law-Enforcement-Jobs

Please reach out if you have any questions.

Thank you,
Skarli"#,
    },
    Snippet {
        name: "SLI Network Access Activated",
        description: Some("Click to copy full template"),
        body: r#"Hi [Name],

Your access to the SLI Network is now active.

Here are your direct links:
SLI Network: https://post.ca.gov/sbsli-network
Class 568: https://post.ca.gov/Class-568

If you have questions, please let me know.

Thank you,
Skarli"#,
    },
    Snippet {
        name: "Position Ineligible for Posting",
        description: Some("Click to copy full template"),
        body: r#"Hi [Name],

Thank you for checking with us.

This position cannot be posted on the POST Law Enforcement Jobs page because it does not perform law enforcement duties and it does not require POST certification. The role is administrative and compliance focused, supporting law enforcement operations rather than carrying out sworn or POST-certified functions.

Please let me know if you have another position you would like us to review, or if you have questions about posting requirements.

Thank you,
Skarli"#,
    },
];
