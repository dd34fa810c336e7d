//! HTTP implementation of the [`FetchGateway`].
//!
//! Talks to the groupie-tracker style catalog service:
//!
//! - `GET {base}/artists` returns an array of artist records
//! - `GET {base}/locations/{id}` returns `{"locations": ["city-country", ...]}`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use marquee_core::model::{Artist, ArtistId, LocationSet};

use crate::config::Config;
use crate::error::{FetchError, FetchResult};
use crate::gateway::FetchGateway;
use crate::resilience::FetchLimiter;

pub const DEFAULT_API_BASE: &str = "https://groupietrackers.herokuapp.com/api";

const USER_AGENT: &str = concat!("marquee/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Artist record as served by the catalog service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistRecord {
    pub id: u64,
    #[serde(default)]
    pub image: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    pub creation_date: i32,
    #[serde(default)]
    pub first_album: String,
}

impl From<ArtistRecord> for Artist {
    fn from(record: ArtistRecord) -> Self {
        Artist::new(record.id, record.name)
            .with_members(record.members)
            .with_formation_year(record.creation_date)
            .with_first_release(record.first_album)
            .with_image_url(record.image)
    }
}

/// Body of the per-artist locations endpoint. The service also sends `id`
/// and a `dates` URL, which are not needed here.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationsRecord {
    #[serde(default)]
    pub locations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Catalog service client.
///
/// Every request goes through a [`FetchLimiter`], which caps the number of
/// requests in flight and applies the per-call timeout.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    http: Client,
    base_url: String,
    limiter: FetchLimiter,
}

impl HttpGateway {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// created.
    pub fn new(
        base_url: &str,
        call_timeout: Duration,
        max_concurrent: usize,
    ) -> FetchResult<Self> {
        let http = Client::builder()
            .timeout(call_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Self::with_http_client(http, base_url, FetchLimiter::new(max_concurrent, call_timeout))
    }

    /// Create a client from the loaded configuration.
    ///
    /// # Errors
    /// See [`HttpGateway::new`].
    pub fn from_config(config: &Config) -> FetchResult<Self> {
        Self::new(
            &config.api_base_url,
            config.request_timeout(),
            config.max_concurrent_fetches,
        )
    }

    /// Wrap an already-built `reqwest` client.
    ///
    /// # Errors
    /// Returns [`FetchError::InvalidUrl`] if `base_url` does not parse.
    pub fn with_http_client(
        http: Client,
        base_url: &str,
        limiter: FetchLimiter,
    ) -> FetchResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            http,
            base_url,
            limiter,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> FetchResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {}", url);

        self.limiter
            .run(endpoint, async {
                let response = self
                    .http
                    .get(&url)
                    .send()
                    .await?
                    .error_for_status()
                    .map_err(|e| FetchError::Http {
                        endpoint: endpoint.to_string(),
                        message: e.to_string(),
                    })?;

                response.json::<T>().await.map_err(|e| FetchError::Parse {
                    endpoint: endpoint.to_string(),
                    message: e.to_string(),
                })
            })
            .await
    }
}

#[async_trait]
impl FetchGateway for HttpGateway {
    async fn fetch_artists(&self) -> FetchResult<Vec<Artist>> {
        let records: Vec<ArtistRecord> = self.get_json("artists").await?;
        Ok(records.into_iter().map(Artist::from).collect())
    }

    async fn fetch_locations(&self, id: ArtistId) -> FetchResult<LocationSet> {
        let record: LocationsRecord = self.get_json(&format!("locations/{id}")).await?;
        Ok(LocationSet::from_raw(&record.locations))
    }
}
