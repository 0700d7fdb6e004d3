use std::fmt::Display;

use anyhow::{Context, Result};
use tracing::Instrument;

use crate::comments::filter_comments;
use crate::event::Event;
use crate::traits::CommentApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunResult {
    /// The event has no issue or pull request to look at
    Skipped,
    Done { fetched: usize, minimized: usize },
}

impl Display for RunResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Skipped => f.write_str("skipped"),
            Self::Done { fetched, minimized } => {
                write!(f, "minimized {minimized} of {fetched} comments")
            }
        }
    }
}

/// Minimize all outdated reports on the event's pull request.
///
/// Stops at the first comment that fails to minimize.
pub(crate) async fn run<A: CommentApi>(api: &A, event: &Event, dry_run: bool) -> Result<RunResult> {
    let Some(pr) = event.pull_request() else {
        tracing::info!("non issue event: {}", event.name);
        return Ok(RunResult::Skipped);
    };

    let comments = api
        .fetch_comments(&pr)
        .instrument(tracing::info_span!("query_comments", %pr))
        .await?;
    let fetched = comments.len();

    let outdated = filter_comments(comments);
    for c in &outdated {
        if dry_run {
            tracing::info!("would minimize comment {}", c.url);
            continue;
        }
        tracing::info!("minimize comment {}", c.url);
        api.minimize_comment(&c.id)
            .instrument(tracing::info_span!("minimize", id = %c.id))
            .await
            .with_context(|| format!("failed to minimize {}", c.url))?;
    }
    Ok(RunResult::Done {
        fetched,
        minimized: if dry_run { 0 } else { outdated.len() },
    })
}
