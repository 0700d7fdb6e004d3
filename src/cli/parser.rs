use std::path::PathBuf;

use clap::{Args, Parser};

use crate::event::RepoSlug;

/// Minimize outdated performance and flake rate reports on a pull request.
///
/// Every option can be passed as a GitHub Actions input or environment variable.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) auth: Auth,
    #[command(flatten)]
    pub(crate) event: EventArgs,
    /// Only log which comments would be minimized
    #[arg(long, env = "INPUT_DRY-RUN")]
    pub(crate) dry_run: bool,
}

#[derive(Args, Default)]
pub(crate) struct Auth {
    /// GitHub token allowed to minimize comments
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,
    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL")]
    pub(crate) api_url: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct EventArgs {
    /// Name of the triggering event
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    pub(crate) event_name: Option<String>,
    /// Path of the JSON event payload
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    pub(crate) event_path: Option<PathBuf>,
    /// Repository as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub(crate) repository: RepoSlug,
    /// Issue or pull request number (overrides the event payload)
    #[arg(long, env = "INPUT_ISSUE-NUMBER")]
    pub(crate) issue_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    const VARS: [&str; 7] = [
        "INPUT_TOKEN",
        "INPUT_DRY-RUN",
        "INPUT_ISSUE-NUMBER",
        "GITHUB_API_URL",
        "GITHUB_EVENT_NAME",
        "GITHUB_EVENT_PATH",
        "GITHUB_REPOSITORY",
    ];

    /// Run `f` with exactly the given workflow variables set.
    fn with_env<R>(set: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
        let vars: Vec<(&str, Option<&str>)> = VARS
            .iter()
            .map(|&key| (key, set.iter().find(|(k, _)| *k == key).map(|&(_, v)| v)))
            .collect();
        temp_env::with_vars(vars, f)
    }

    #[test]
    fn test_command() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_from_env() {
        let cli = with_env(
            &[
                ("INPUT_TOKEN", "ghp_secret"),
                ("INPUT_DRY-RUN", "true"),
                ("INPUT_ISSUE-NUMBER", "17423"),
                ("GITHUB_EVENT_NAME", "issue_comment"),
                ("GITHUB_EVENT_PATH", "/github/workflow/event.json"),
                ("GITHUB_REPOSITORY", "kubernetes/minikube"),
            ],
            || Cli::try_parse_from(["comment-minimizer"]).unwrap(),
        );
        assert_eq!(cli.auth.token.as_deref(), Some("ghp_secret"));
        assert!(cli.dry_run);
        assert_eq!(cli.event.issue_number.as_deref(), Some("17423"));
        assert_eq!(cli.event.event_name.as_deref(), Some("issue_comment"));
        assert_eq!(
            cli.event.event_path,
            Some(PathBuf::from("/github/workflow/event.json"))
        );
        assert_eq!(cli.event.repository.owner, "kubernetes");
        assert_eq!(cli.event.repository.name, "minikube");
    }

    #[test]
    fn test_parse_from_args() {
        let cli = with_env(&[], || {
            Cli::try_parse_from([
                "comment-minimizer",
                "--repository",
                "kubernetes/minikube",
                "--issue-number",
                "3",
            ])
            .unwrap()
        });
        assert!(cli.auth.token.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.event.issue_number.as_deref(), Some("3"));
        assert!(cli.event.event_path.is_none());
    }

    #[test]
    fn test_requires_repository() {
        let res = with_env(&[], || Cli::try_parse_from(["comment-minimizer"]));
        assert!(res.is_err());
    }

    #[test]
    fn test_rejects_malformed_repository() {
        let res = with_env(&[], || {
            Cli::try_parse_from(["comment-minimizer", "--repository", "minikube"])
        });
        assert!(res.is_err());
    }
}
