use anyhow::Result;

use crate::comments::{Comment, PullRequestRef};

pub(crate) trait CommentApi {
    /// All comments on the pull request, newest first.
    async fn fetch_comments(&self, pr: &PullRequestRef) -> Result<Vec<Comment>>;
    /// Hide a comment by its node id.
    async fn minimize_comment(&self, id: &str) -> Result<()>;
}
