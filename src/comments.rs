use std::fmt::Display;

use serde::Deserialize;

use crate::constants::BOT_NAME;

mod filter;

pub(crate) use filter::filter_comments;

/// A comment node on a pull request, as returned by the comments query.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Comment {
    pub id: String,
    pub url: String,
    /// `None` for comments whose author account was deleted
    pub author: Option<Author>,
    pub body: String,
    pub is_minimized: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub(crate) struct Author {
    pub login: String,
}

impl Comment {
    pub(crate) fn author_login(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.login.as_str())
    }

    pub(crate) fn is_by_bot(&self) -> bool {
        self.author_login() == Some(BOT_NAME)
    }
}

/// Coordinates of the pull request whose comments are processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PullRequestRef {
    pub owner: String,
    pub name: String,
    pub number: u64,
}

impl Display for PullRequestRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.name, self.number)
    }
}

#[cfg(test)]
pub(crate) fn comment(id: &str, login: Option<&str>, body: &str, is_minimized: bool) -> Comment {
    Comment {
        id: id.to_owned(),
        url: format!("https://github.com/kubernetes/minikube/pull/1#issuecomment-{id}"),
        author: login.map(|login| Author {
            login: login.to_owned(),
        }),
        body: body.to_owned(),
        is_minimized,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_node() {
        let c: Comment = serde_json::from_value(json!({
            "id": "IC_kwDOBZ",
            "url": "https://github.com/kubernetes/minikube/pull/1#issuecomment-1",
            "isMinimized": false,
            "body": "hello",
            "author": { "login": "minikube-pr-bot" },
        }))
        .unwrap();
        assert!(c.is_by_bot());
        assert_eq!(c.author_login(), Some("minikube-pr-bot"));
    }

    #[test]
    fn test_deserialize_ghost_author() {
        let c: Comment = serde_json::from_value(json!({
            "id": "IC_kwDOBZ",
            "url": "https://github.com/kubernetes/minikube/pull/1#issuecomment-1",
            "isMinimized": false,
            "body": "hello",
            "author": null,
        }))
        .unwrap();
        assert_eq!(c.author_login(), None);
        assert!(!c.is_by_bot());
    }

    #[test]
    fn test_missing_body_is_rejected() {
        let res = serde_json::from_value::<Comment>(json!({
            "id": "IC_kwDOBZ",
            "url": "https://github.com/kubernetes/minikube/pull/1#issuecomment-1",
            "isMinimized": false,
            "author": { "login": "minikube-pr-bot" },
        }));
        assert!(res.unwrap_err().to_string().contains("missing field `body`"));
    }

    #[test]
    fn test_display_ref() {
        let pr = PullRequestRef {
            owner: "kubernetes".to_owned(),
            name: "minikube".to_owned(),
            number: 42,
        };
        assert_eq!(pr.to_string(), "kubernetes/minikube#42");
    }
}
