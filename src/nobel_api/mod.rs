pub(crate) mod prizes;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{NobelError, Result};

pub(crate) const BASE_URL: &str = "http://api.nobelprize.org/v1";

/// Fetch a URL and decode the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T> {
    debug!(url, "fetching document");

    let response = client.get(url).send().await.map_err(|e| NobelError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(NobelError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| NobelError::ResponseBody {
            url: url.to_owned(),
            source: e,
        })?;

    serde_json::from_str(&body).map_err(|e| NobelError::Decode {
        url: url.to_owned(),
        source: e,
    })
}
