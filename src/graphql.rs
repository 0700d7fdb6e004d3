use anyhow::{bail, Context, Result};
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::json;

use crate::comments::{Comment, PullRequestRef};
use crate::constants::COMMENTS_PAGE_SIZE;
use crate::traits::CommentApi;

// `last`/`before` walks from the newest page backwards.
const COMMENTS_QUERY: &str = r"
query Comments($owner: String!, $name: String!, $number: Int!, $pageSize: Int!, $before: String) {
  repository(owner: $owner, name: $name) {
    pullRequest(number: $number) {
      comments(last: $pageSize, before: $before) {
        nodes {
          id
          url
          isMinimized
          body
          author {
            login
          }
        }
        pageInfo {
          hasPreviousPage
          startCursor
        }
      }
    }
  }
}
";

const MINIMIZE_MUTATION: &str = r"
mutation Minimize($id: ID!) {
  minimizeComment(input: { subjectId: $id, classifier: OUTDATED }) {
    minimizedComment {
      isMinimized
    }
  }
}
";

#[derive(Debug, Deserialize)]
struct Response<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

impl<T> Response<T> {
    /// Messages of all reported errors, `None` if there were none.
    fn error_messages(&self) -> Option<String> {
        let errors = self.errors.as_deref().filter(|e| !e.is_empty())?;
        Some(
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentsData {
    repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Repository {
    pull_request: Option<PullRequest>,
}

#[derive(Debug, Deserialize)]
struct PullRequest {
    comments: Option<CommentConnection>,
}

/// Nodes stay raw JSON so a single odd node doesn't fail the whole page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentConnection {
    nodes: Option<Vec<Option<serde_json::Value>>>,
    page_info: Option<PageInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_previous_page: bool,
    start_cursor: Option<String>,
}

impl CommentsData {
    fn into_connection(self) -> Option<CommentConnection> {
        self.repository?.pull_request?.comments
    }
}

/// One page of comments, newest first, and the cursor of the page before it.
#[derive(Debug)]
struct CommentPage {
    comments: Vec<Comment>,
    previous: Option<String>,
}

/// Convert one comments query response.
///
/// `Ok(None)` if the response doesn't have the expected shape. A node without `body` is an error.
fn parse_page(value: serde_json::Value) -> Result<Option<CommentPage>> {
    let response: Response<CommentsData> = match serde_json::from_value(value) {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("unexpected comments response: {e}");
            return Ok(None);
        }
    };
    if let Some(messages) = response.error_messages() {
        tracing::warn!("comments query reported errors: {messages}");
    }
    let Some(CommentConnection {
        nodes: Some(nodes),
        page_info,
    }) = response.data.and_then(CommentsData::into_connection)
    else {
        tracing::warn!("unexpected comments response: no comment nodes");
        return Ok(None);
    };

    let mut comments = Vec::with_capacity(nodes.len());
    // each page is oldest-first
    for node in nodes.into_iter().rev().flatten() {
        if node.get("body").map_or(true, serde_json::Value::is_null) {
            bail!("comment node without body: {node}");
        }
        match serde_json::from_value::<Comment>(node) {
            Ok(comment) => comments.push(comment),
            Err(e) => {
                tracing::warn!("unexpected comment node: {e}");
                return Ok(None);
            }
        }
    }
    let previous = match page_info {
        Some(PageInfo {
            has_previous_page: true,
            start_cursor,
        }) => start_cursor,
        _ => None,
    };
    Ok(Some(CommentPage { comments, previous }))
}

impl CommentApi for Octocrab {
    async fn fetch_comments(&self, pr: &PullRequestRef) -> Result<Vec<Comment>> {
        let mut comments = Vec::new();
        let mut before: Option<String> = None;
        loop {
            let value: serde_json::Value = self
                .graphql(&json!({
                    "query": COMMENTS_QUERY,
                    "variables": {
                        "owner": pr.owner,
                        "name": pr.name,
                        "number": pr.number,
                        "pageSize": COMMENTS_PAGE_SIZE,
                        "before": before,
                    },
                }))
                .await
                .with_context(|| format!("failed to query comments of {pr}"))?;
            tracing::debug!("{value:#}");
            let Some(page) = parse_page(value).context("malformed comments response")? else {
                // a partial list would keep an older report instead of the newest
                tracing::warn!("discarding comments of {pr}, no comments to process");
                return Ok(Vec::new());
            };
            comments.extend(page.comments);
            match page.previous {
                Some(cursor) => before = Some(cursor),
                None => break,
            }
        }
        tracing::info!("Fetched {} comments of {pr}", comments.len());
        Ok(comments)
    }

    async fn minimize_comment(&self, id: &str) -> Result<()> {
        let response: Response<serde_json::Value> = self
            .graphql(&json!({
                "query": MINIMIZE_MUTATION,
                "variables": { "id": id },
            }))
            .await
            .with_context(|| format!("failed to minimize comment {id}"))?;
        if let Some(messages) = response.error_messages() {
            bail!("GitHub refused to minimize comment {id}: {messages}");
        }
        Ok(())
    }
}
