use bytes::Bytes;
use reqwest::header;
use serde::de::DeserializeOwned;
use url::Url;

use crate::access_token::AccessToken;
use crate::constants::{MAPBOX_HOST, MAPBOX_PATH_PREFIX, USER_AGENT};
use crate::error::GetError;
use crate::geocoding::GeocodingApi;
use crate::images::ImagesApi;
use crate::util;

/// Entry point for the Mapbox web APIs.
///
/// Holds the access token, the scheme flag and the HTTP client shared by the
/// endpoint builders. Configure it once, then share it by reference; every
/// request method takes `&self` and `reqwest::Client` is safe to use from
/// multiple tasks.
#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    access_token: AccessToken,
    host: String,
    https: bool,
}

impl Client {
    /// Creates a client talking plain HTTP to the default Mapbox host with
    /// a default HTTP client. Use the setters to change any of that.
    pub fn new(access_token: AccessToken) -> Self {
        Self {
            http_client: util::default_http_client(),
            access_token,
            host: MAPBOX_HOST.to_string(),
            https: false,
        }
    }

    /// Replace the HTTP client, e.g. to enforce timeouts or a proxy.
    pub fn set_http_client(&mut self, http_client: reqwest::Client) {
        self.http_client = http_client;
    }

    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    pub fn set_https(&mut self, https: bool) {
        self.https = https;
    }

    pub fn https(&self) -> bool {
        self.https
    }

    /// Point the client at a different host, e.g. a local mock server.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.host = host.into();
    }

    pub(crate) fn access_token(&self) -> &str {
        self.access_token.get()
    }

    /// `scheme://host`, without any path prefix.
    pub(crate) fn origin(&self) -> String {
        let scheme = if self.https { "https" } else { "http" };
        format!("{}://{}", scheme, self.host)
    }

    /// Base URL of the static images API: `scheme://host/v4`.
    pub fn base_url(&self) -> String {
        format!("{}{}", self.origin(), MAPBOX_PATH_PREFIX)
    }

    pub fn geocoding(&self) -> GeocodingApi<'_> {
        GeocodingApi::new(self)
    }

    pub fn images(&self, map_id: &str) -> ImagesApi<'_> {
        ImagesApi::new(self, map_id)
    }

    /// GET `url` and decode the JSON body into `T`. The body is read to
    /// completion on every path, including non-2xx responses, whose text is
    /// carried in the error for diagnosis.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GetError> {
        let response = self
            .http_client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await.map_err(GetError::ResponseBodyError)?;
        if !status.is_success() {
            return Err(GetError::ResponseError { status, body });
        }
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }

    /// GET `url` and return the raw body bytes.
    pub(crate) async fn get_bytes(&self, url: Url) -> Result<Bytes, GetError> {
        let response = self
            .http_client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.map_err(GetError::ResponseBodyError)?;
            return Err(GetError::ResponseError { status, body });
        }
        response.bytes().await.map_err(GetError::ResponseBodyError)
    }
}
