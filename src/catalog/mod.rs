//! Static snippet tables and the substring search that filters them.
//!
//! The tables are the browse-and-copy content of the tool: HTML code
//! templates, icon markup, file-path references, email templates, PASS
//! notices, and page modules. Nothing here is persisted or mutable.

pub mod code_templates;
pub mod email;
pub mod icons;
pub mod modules;
pub mod notices;
pub mod paths;

pub use code_templates::CODE_TEMPLATES;
pub use email::EMAIL_TEMPLATES;
pub use icons::ICONS;
pub use modules::MODULES;
pub use notices::PASS_NOTICES;
pub use paths::SOURCE_PATHS;

use crate::error::{WorkflowError, WorkflowResult};
use serde::Serialize;

/// One copyable entry in a catalog section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub name: &'static str,
    pub description: Option<&'static str>,
    pub body: &'static str,
}

/// Look up a catalog section by its tab name.
pub fn section(name: &str) -> WorkflowResult<&'static [Snippet]> {
    match name {
        "code" => Ok(CODE_TEMPLATES),
        "icons" => Ok(ICONS),
        "paths" => Ok(SOURCE_PATHS),
        "email" => Ok(EMAIL_TEMPLATES),
        "notices" => Ok(PASS_NOTICES),
        "modules" => Ok(MODULES),
        other => Err(WorkflowError::UnknownSection {
            section: other.to_string(),
        }),
    }
}

/// Case-insensitive substring filter over name, description, and body.
/// An empty query matches everything.
pub fn search<'a>(entries: &'a [Snippet], query: &str) -> Vec<&'a Snippet> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|snippet| {
            snippet.name.to_lowercase().contains(&query)
                || snippet
                    .description
                    .is_some_and(|d| d.to_lowercase().contains(&query))
                || snippet.body.to_lowercase().contains(&query)
        })
        .collect()
}
