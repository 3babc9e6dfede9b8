use thiserror::Error;

/// Errors returned by the FoodData Central client.
#[derive(Debug, Error)]
pub enum FoodDataError {
    /// Network failure, timeout or non-2xx status from the upstream API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid FoodData Central base URL '{0}'")]
    InvalidBaseUrl(String),

    /// The search response did not match the expected shape.
    #[error("JSON deserialization error for search(query={query}): {source}")]
    Deserialize {
        query: String,
        #[source]
        source: serde_json::Error,
    },
}
