pub(crate) const BOT_NAME: &str = "minikube-pr-bot";
pub(crate) const PERFORMANCE_MARKER: &str = "kvm2 driver with docker runtime";
pub(crate) const FLAKE_RATE_MARKER: &str = "These are the flake rates of all failed tests.";

/// Page size for the comments connection (GitHub's maximum).
pub(crate) const COMMENTS_PAGE_SIZE: u8 = 100;

/// Largest integer a JSON number can carry without losing precision (2^53 - 1).
pub(crate) const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;
