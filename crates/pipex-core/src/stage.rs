use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// One phase of the documented pipeline.
///
/// Catalog order is the pipeline order: a stage conceptually gates the one
/// after it. That ordering is informational only and never enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: u32,
    pub title: String,
    /// One-line description shown while the stage is collapsed.
    pub summary: String,
    /// Longer prose shown when the stage is expanded.
    pub details: String,
    /// Tool names associated with the stage, in display order.
    #[serde(default)]
    pub tools: Vec<String>,
}

impl Stage {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        summary: impl Into<String>,
        details: impl Into<String>,
        tools: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.into(),
            summary: summary.into(),
            details: details.into(),
            tools: tools.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.id, self.title)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
