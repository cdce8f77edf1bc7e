use serde::{Deserialize, Serialize};

/// Ordered list of human-readable fix descriptions produced by the cleanup
/// and icon-repair tools. Passes that find nothing contribute no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReport {
    entries: Vec<String>,
}

impl ChangeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one fix category. `count` instances were found; zero-count
    /// categories are dropped rather than recorded.
    pub fn record(&mut self, count: usize, singular: &str, plural: &str) {
        if count == 0 {
            return;
        }
        let noun = if count == 1 { singular } else { plural };
        self.entries.push(format!("{} {}", count, noun));
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
