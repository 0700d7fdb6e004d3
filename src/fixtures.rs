/// Trimmed `issue_comment` payload for a comment on a pull request.
pub(crate) const ISSUE_COMMENT: &str = r#"{
  "action": "created",
  "issue": {
    "url": "https://api.github.com/repos/kubernetes/minikube/issues/17423",
    "html_url": "https://github.com/kubernetes/minikube/pull/17423",
    "number": 17423,
    "title": "Bump golang.org/x/mod from 0.13.0 to 0.14.0",
    "state": "open",
    "pull_request": {
      "url": "https://api.github.com/repos/kubernetes/minikube/pulls/17423",
      "html_url": "https://github.com/kubernetes/minikube/pull/17423"
    }
  },
  "comment": {
    "id": 1786283374,
    "html_url": "https://github.com/kubernetes/minikube/pull/17423#issuecomment-1786283374",
    "user": { "login": "minikube-pr-bot", "type": "User" },
    "body": "These are the flake rates of all failed tests."
  },
  "repository": {
    "name": "minikube",
    "full_name": "kubernetes/minikube",
    "owner": { "login": "kubernetes" }
  },
  "sender": { "login": "minikube-pr-bot" }
}"#;

/// Trimmed `pull_request` payload, which carries no `issue`.
pub(crate) const PULL_REQUEST: &str = r#"{
  "action": "synchronize",
  "number": 17423,
  "pull_request": {
    "url": "https://api.github.com/repos/kubernetes/minikube/pulls/17423",
    "number": 17423,
    "state": "open"
  },
  "repository": {
    "name": "minikube",
    "full_name": "kubernetes/minikube",
    "owner": { "login": "kubernetes" }
  },
  "sender": { "login": "dependabot[bot]" }
}"#;
