use tracing::instrument;

use crate::error::Result;
use crate::model::{Category, Prize};
use crate::nobel_api;

/// The main entry point for talking to api.nobelprize.org.
///
/// `NobelClient` wraps a [`reqwest::Client`] and exposes methods to fetch
/// the prize list, either complete or pre-filtered by the server.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> nobel_client::Result<()> {
/// use nobel_client::NobelClient;
///
/// let client = NobelClient::new();
/// let prizes = client.get_prizes().await?;
/// println!("Fetched {} prizes", prizes.len());
/// # Ok(())
/// # }
/// ```
pub struct NobelClient {
    http: reqwest::Client,
}

impl NobelClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { http: client }
    }

    /// Fetch the complete prize list.
    #[instrument(skip(self))]
    pub async fn get_prizes(&self) -> Result<Vec<Prize>> {
        nobel_api::prizes::get_prizes(&self.http).await
    }

    /// Fetch a prize list the server has already narrowed by category
    /// and/or year.
    #[instrument(skip(self))]
    pub async fn get_prizes_filtered(
        &self,
        category: Option<Category>,
        year: Option<u16>,
    ) -> Result<Vec<Prize>> {
        nobel_api::prizes::get_prizes_filtered(&self.http, category, year).await
    }
}

impl Default for NobelClient {
    fn default() -> Self {
        Self::new()
    }
}
