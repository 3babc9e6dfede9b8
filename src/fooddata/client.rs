//! HTTP client for the USDA FoodData Central search endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

use super::error::FoodDataError;
use super::types::{FdcFood, SearchResponse};
use crate::config::{FoodDataConfig, DEFAULT_FOODDATA_BASE_URL};

const DATA_TYPE: &str = "SR Legacy";
const PAGE_SIZE: &str = "10";
const PAGE_NUMBER: &str = "1";

/// Food lookup used by the search handler; faked in tests.
#[async_trait]
pub trait FoodSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<FdcFood>, FoodDataError>;
}

pub struct FoodDataCentral {
    client: Client,
    api_key: String,
    search_url: Url,
}

impl FoodDataCentral {
    /// Client pointed at the production API.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, FoodDataError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_FOODDATA_BASE_URL)
    }

    pub fn from_config(config: &FoodDataConfig) -> Result<Self, FoodDataError> {
        Self::with_base_url(&config.api_key, config.timeout_secs, &config.base_url)
    }

    /// `base_url` is the `/foods` collection; requests go to `{base_url}/search`.
    pub fn with_base_url(api_key: &str, timeout_secs: u64, base_url: &str) -> Result<Self, FoodDataError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(concat!("macrotrack/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // Exactly one trailing slash so `join` appends instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join("search"))
            .map_err(|_| FoodDataError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
        })
    }
}

#[async_trait]
impl FoodSearch for FoodDataCentral {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<FdcFood>, FoodDataError> {
        let body = self
            .client
            .get(self.search_url.clone())
            .query(&[
                ("query", query),
                ("api_key", self.api_key.as_str()),
                ("dataType", DATA_TYPE),
                ("pageSize", PAGE_SIZE),
                ("pageNumber", PAGE_NUMBER),
            ])
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let parsed: SearchResponse =
            serde_json::from_slice(&body).map_err(|source| FoodDataError::Deserialize {
                query: query.to_owned(),
                source,
            })?;
        debug!(count = parsed.foods.len(), "food search returned");
        Ok(parsed.foods)
    }
}
