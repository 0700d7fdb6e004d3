use std::fmt::Display;

use crate::constants::{FLAKE_RATE_MARKER, PERFORMANCE_MARKER};

use super::Comment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReportKind {
    Performance,
    FlakeRate,
}

impl ReportKind {
    /// Performance is checked first, so a body carrying both markers is a performance report.
    pub(crate) fn of(body: &str) -> Option<Self> {
        if body.contains(PERFORMANCE_MARKER) {
            Some(Self::Performance)
        } else if body.contains(FLAKE_RATE_MARKER) {
            Some(Self::FlakeRate)
        } else {
            None
        }
    }
}

impl Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Performance => "performance",
            Self::FlakeRate => "flake rate",
        })
    }
}

/// Per-run state: whether the next report of each kind is the one to keep.
#[derive(Debug)]
struct Classifier {
    keep_next_performance: bool,
    keep_next_flake: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            keep_next_performance: true,
            keep_next_flake: true,
        }
    }
}

impl Classifier {
    fn keep_next(&mut self, kind: ReportKind) -> &mut bool {
        match kind {
            ReportKind::Performance => &mut self.keep_next_performance,
            ReportKind::FlakeRate => &mut self.keep_next_flake,
        }
    }

    fn to_minimize(&mut self, c: &Comment) -> bool {
        if c.is_minimized || !c.is_by_bot() {
            return false;
        }
        let Some(kind) = ReportKind::of(&c.body) else {
            return false;
        };
        let keep = self.keep_next(kind);
        if *keep {
            *keep = false;
            tracing::info!("latest {kind} comment, skipping: {}", c.url);
            false
        } else {
            tracing::info!("{kind} comment: {}", c.url);
            true
        }
    }
}

/// Select the comments to minimize, keeping the first report of each kind in `comments`.
///
/// Comments must be ordered newest-first for the newest report to survive.
pub(crate) fn filter_comments(comments: Vec<Comment>) -> Vec<Comment> {
    let mut classifier = Classifier::default();
    comments
        .into_iter()
        .filter(|c| classifier.to_minimize(c))
        .collect()
}
