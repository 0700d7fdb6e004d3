use std::num::IntErrorKind;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};

use crate::cli::EventArgs;
use crate::comments::PullRequestRef;
use crate::constants::MAX_SAFE_INTEGER;

mod github;

pub(crate) use github::EventPayload;

/// `owner/name` as found in `GITHUB_REPOSITORY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoSlug {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_owned(),
                    name: name.to_owned(),
                })
            }
            _ => Err(anyhow!("repository must be of the form owner/name, got {s:?}")),
        }
    }
}

/// Parse the `issue-number` input. An empty input is no value.
pub(crate) fn parse_issue_number(s: Option<&str>) -> Result<Option<u64>> {
    let Some(s) = s.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let n = match s.parse::<u64>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            bail!("issue-number is not a safe integer")
        }
        Err(_) => bail!("issue-number is an invalid number"),
    };
    if n > MAX_SAFE_INTEGER {
        bail!("issue-number is not a safe integer");
    }
    Ok(Some(n))
}

/// The workflow event this run was triggered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Event {
    pub name: String,
    /// Issue or pull request number, if the event has one
    pub number: Option<u64>,
    pub repo: RepoSlug,
}

impl Event {
    /// Resolve the event from the workflow environment. An explicit `issue-number` wins over the payload.
    pub(crate) fn from_args(args: &EventArgs) -> Result<Self> {
        let number = match parse_issue_number(args.issue_number.as_deref())? {
            Some(n) => Some(n),
            None => EventPayload::load(args.event_path.as_deref())?
                .issue
                .map(|issue| issue.number),
        };
        Ok(Self {
            name: args.event_name.clone().unwrap_or_else(|| "unknown".to_owned()),
            number,
            repo: args.repository.clone(),
        })
    }

    pub(crate) fn pull_request(&self) -> Option<PullRequestRef> {
        Some(PullRequestRef {
            owner: self.repo.owner.clone(),
            name: self.repo.name.clone(),
            number: self.number?,
        })
    }
}
