use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// A stripped down version of the workflow event payload found at `GITHUB_EVENT_PATH`.
/// Only `issues` and `issue_comment` events carry an `issue`.
#[derive(Deserialize, Debug, Clone, Default)]
pub(crate) struct EventPayload {
    /// The issue (or pull request) the event belongs to
    pub issue: Option<Issue>,
}

#[derive(Deserialize, Debug, Clone)]
pub(crate) struct Issue {
    pub number: u64,
}

impl EventPayload {
    /// Read the payload file. Without a path the payload is empty, like outside of Actions.
    pub(crate) fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("No event payload path given");
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read event payload {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse event payload {}", path.display()))
    }
}
