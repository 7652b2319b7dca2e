use derive_builder::Builder;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::client::Client;
use crate::constants::{DEFAULT_GEOCODING_INDEX, GEOCODING_PATH_PREFIX};
use crate::error::GetError;
use crate::util::query_escape;

/// Forward geocoding endpoint.
pub struct GeocodingApi<'a> {
    client: &'a Client,
}

/// A latitude/longitude pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Parameters of a forward geocoding call.
#[derive(Builder, Clone, Debug)]
#[builder(setter(into), default)]
pub struct QueryByAddressRequest {
    /// Geocoding index to search, e.g. `mapbox.places`.
    pub index: String,
    /// The address to resolve. Must not be empty.
    pub query: String,
    /// Biases the ranking towards results near this coordinate.
    pub proximity: Option<Coordinate>,
    /// Restricts results to the given feature types, e.g. `postcode`.
    /// Empty means no filter.
    pub types: Vec<String>,
}

impl Default for QueryByAddressRequest {
    fn default() -> Self {
        Self {
            index: DEFAULT_GEOCODING_INDEX.to_string(),
            query: String::new(),
            proximity: None,
            types: Vec::new(),
        }
    }
}

/// Result of a forward geocoding call. The service may omit any field;
/// omitted fields decode to their empty value.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct QueryByAddressResponse {
    #[serde(default)]
    pub attribution: String,
    #[serde(default)]
    pub features: Vec<Feature>,
    /// The query tokens the service parsed out of the request.
    #[serde(default)]
    pub query: Vec<String>,
    #[serde(default, rename = "type")]
    pub response_type: String,
}

/// One geocoding match.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Feature {
    #[serde(default, rename = "type")]
    pub feature_type: String,
    #[serde(default)]
    pub text: String,
    /// How well the feature matches the query, between 0 and 1.
    #[serde(default)]
    pub relevance: f64,
    #[serde(default)]
    pub place_name: String,
    #[serde(default)]
    pub properties: serde_json::Map<String, Value>,
    #[serde(default)]
    pub id: String,
    /// Raw GeoJSON geometry. Its exact shape is not part of this crate's
    /// contract, so it is kept as parsed JSON.
    #[serde(default)]
    pub geometry: Option<Value>,
    #[serde(default)]
    pub context: Option<Value>,
    /// `[longitude, latitude]` of the feature center.
    #[serde(default)]
    pub center: Vec<f64>,
    /// `[min_lon, min_lat, max_lon, max_lat]` when the feature has an extent.
    #[serde(default)]
    pub bbox: Vec<f64>,
}

impl<'a> GeocodingApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Forward-geocodes an address. Ambiguous queries come back with more
    /// than one feature, in the service's own relevance order.
    pub async fn query_by_address(
        &self,
        request: &QueryByAddressRequest,
    ) -> Result<QueryByAddressResponse, GetError> {
        let url = self.build_url(request)?;
        self.client.get_json(url).await
    }

    fn build_url(&self, request: &QueryByAddressRequest) -> Result<Url, GetError> {
        if request.query.is_empty() {
            return Err(GetError::BuildError(
                "the query must not be empty".to_string(),
            ));
        }
        let mut url = Url::parse(&format!(
            "{}{}/{}/{}.json",
            self.client.origin(),
            GEOCODING_PATH_PREFIX,
            query_escape(&request.index),
            query_escape(&request.query),
        ))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("access_token", self.client.access_token());
            if let Some(proximity) = &request.proximity {
                pairs.append_pair(
                    "proximity",
                    &format!("{:.6},{:.6}", proximity.longitude, proximity.latitude),
                );
            }
            if !request.types.is_empty() {
                pairs.append_pair("types", &request.types.join(","));
            }
        }
        Ok(url)
    }
}
