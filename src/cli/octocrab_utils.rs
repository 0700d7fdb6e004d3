use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};

use super::Auth;

impl Auth {
    /// Build a client for the token. A missing token is an error before any request is made.
    pub(crate) fn try_into_octocrab(self) -> Result<octocrab::Octocrab> {
        let token: SecretString = self
            .token
            .filter(|t| !t.is_empty())
            .context("Input required and not supplied: token")?
            .into();
        let builder = octocrab::Octocrab::builder()
            // https://github.com/XAMPPRocky/octocrab/issues/594
            .personal_token(token.expose_secret().to_owned());
        let builder = match self.api_url {
            Some(api_url) => builder
                .base_uri(api_url.as_str())
                .with_context(|| format!("invalid GitHub API URL {api_url}"))?,
            None => builder,
        };
        Ok(builder.build()?)
    }
}
