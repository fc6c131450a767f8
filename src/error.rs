/// All errors that can occur while loading Nobel Prize data.
#[derive(thiserror::Error, Debug)]
pub enum NobelError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Response body was not valid JSON of the expected shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// Response decoded but carried no `prizes` collection.
    #[error("response from {url} is missing the prizes field")]
    MissingPrizes { url: String },
}

pub type Result<T> = std::result::Result<T, NobelError>;
