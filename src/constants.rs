/// Host serving the Mapbox web APIs.
pub const MAPBOX_HOST: &str = "api.tiles.mapbox.com";

/// Path prefix of the classic static images API.
pub const MAPBOX_PATH_PREFIX: &str = "/v4";

/// Path prefix of the forward geocoding API. Hangs off the host root, not
/// off [`MAPBOX_PATH_PREFIX`].
pub const GEOCODING_PATH_PREFIX: &str = "/geocoding/v5";

/// Geocoding index searched when a request does not name one.
pub const DEFAULT_GEOCODING_INDEX: &str = "mapbox.places";

/// The user agent sent with every request.
pub const USER_AGENT: &str = concat!("mapbox-tiles/", env!("CARGO_PKG_VERSION"));
