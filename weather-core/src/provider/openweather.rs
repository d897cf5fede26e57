use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::{
    config::Config,
    model::WeatherReport,
    provider::{check_status, truncate_body},
};

/// Client for the OpenWeather "current weather" endpoint.
#[derive(Debug, Clone, Default)]
pub struct OpenWeatherClient {
    http: Client,
}

impl OpenWeatherClient {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }

    /// `{endpoint}?q={city}&units={units}&APPID={api_key}` with form-encoded values.
    pub fn request_url(config: &Config) -> Url {
        let mut url = config.endpoint.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("q", &config.city)
            .append_pair("units", &config.units)
            .append_pair("APPID", &config.api_key);
        url
    }

    /// Issue a single GET and return the whole body.
    ///
    /// Errors never carry the request URL, which holds the API key.
    ///
    /// The HTTP status is not inspected here; the upstream reports failures
    /// through `cod` in the body.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        let res = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to send request to OpenWeather")?;

        debug!(status = %res.status(), "OpenWeather responded");

        let body = res
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read OpenWeather response body")?;

        Ok(body.to_vec())
    }

    pub fn decode(body: &[u8]) -> Result<WeatherReport> {
        serde_json::from_slice(body).with_context(|| {
            debug!(body = %truncate_body(body), "undecodable OpenWeather body");
            "Failed to parse OpenWeather JSON"
        })
    }

    /// Build the URL, fetch, decode and check `cod`.
    ///
    /// A non-200 `cod` surfaces as [`crate::UpstreamError`] inside the returned error.
    pub async fn current(&self, config: &Config) -> Result<WeatherReport> {
        debug!(
            endpoint = %config.endpoint,
            city = %config.city,
            units = %config.units,
            "requesting current weather"
        );

        let url = Self::request_url(config);
        let body = self.fetch(&url).await?;
        let report = Self::decode(&body)?;
        check_status(&report)?;

        if let Some(observed) = report.observed_at() {
            debug!(%observed, location = %report.name, "current weather decoded");
        }

        Ok(report)
    }
}
