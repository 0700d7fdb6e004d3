mod octocrab_utils;
mod parser;
mod tracing;

pub(crate) use parser::{Auth, Cli, EventArgs};
pub(crate) use self::tracing::init as init_tracing;
