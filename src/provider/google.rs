use super::MapProvider;
use crate::config::{FetcherConfig, MAX_SCALE, MIN_SCALE};
use crate::error::{Error, MAX_ERROR_BODY, Result};
use crate::models::{credential::ApiKey, image::MapImage};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info, warn};

/// Client for the Google Static Maps API.
pub struct GoogleStaticMaps {
    client: reqwest::Client,
    api_key: ApiKey,
    base_url: Url,
    config: FetcherConfig,
}

impl GoogleStaticMaps {
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self> {
        Self::with_config(api_key, FetcherConfig::default())
    }

    pub fn with_config(api_key: impl Into<ApiKey>, config: FetcherConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| Error::InvalidBaseUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl {
                url: config.base_url.clone(),
                message: format!("unsupported scheme '{}'", base_url.scheme()),
            });
        }

        if !(MIN_SCALE..=MAX_SCALE).contains(&config.scale) {
            return Err(Error::InvalidConfig {
                message: format!(
                    "scale {} is outside {}..={}",
                    config.scale, MIN_SCALE, MAX_SCALE
                ),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url,
            config,
        })
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }

    /// The URL `download_image` requests for these arguments, key included.
    pub fn request_url(&self, lat: f64, lon: f64, zoom: u8) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("center", &format!("{},{}", lat, lon))
            .append_pair("zoom", &zoom.to_string())
            .append_pair("size", &self.config.size.to_string())
            .append_pair("maptype", self.config.map_type.as_str())
            .append_pair("scale", &self.config.scale.to_string())
            .append_pair("key", self.api_key.expose());
        url
    }
}

#[async_trait]
impl MapProvider for GoogleStaticMaps {
    #[tracing::instrument(skip(self))]
    async fn download_image(&self, lat: f64, lon: f64, zoom: u8) -> Result<MapImage> {
        let url = self.request_url(lat, lon, zoom);
        debug!(url = %redact_key(&url), "requesting static map");

        // reqwest puts the URL (and so the key) into its errors
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.without_url())?;

        let status = response.status();
        if !status.is_success() {
            let body = read_error_body(response).await;
            warn!(%status, "map provider rejected request");
            return Err(Error::status(status, body));
        }

        let bytes = response.bytes().await.map_err(|e| e.without_url())?;
        let image = MapImage::decode(&bytes)?;
        info!(
            width = image.width(),
            height = image.height(),
            channels = image.channels(),
            bytes = bytes.len(),
            "decoded static map"
        );
        Ok(image)
    }
}

/// Read at most `MAX_ERROR_BODY` bytes of a rejected response.
async fn read_error_body(mut response: reqwest::Response) -> String {
    let mut body = Vec::with_capacity(MAX_ERROR_BODY);
    while body.len() < MAX_ERROR_BODY {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) => {
                // the status alone still makes a useful error
                debug!(error = %e.without_url(), "could not read error body");
                break;
            }
        }
    }
    String::from_utf8_lossy(&body).into_owned()
}

fn redact_key(url: &Url) -> Url {
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "key" {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}
