use std::fmt;

use derive_builder::Builder;
use image::DynamicImage;
use url::Url;

use crate::client::Client;
use crate::error::GetError;
use crate::util::query_escape;

/// Static map image endpoint for one map id.
pub struct ImagesApi<'a> {
    client: &'a Client,
    map_id: String,
}

/// Pin size of a rendered marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MarkerSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl fmt::Display for MarkerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            MarkerSize::Small => "s",
            MarkerSize::Medium => "m",
            MarkerSize::Large => "l",
        };
        f.write_str(token)
    }
}

/// A point overlay rendered onto the map image.
#[derive(Clone, Debug, Default)]
pub struct Marker {
    pub size: MarkerSize,
    /// Single letter, digit or Maki icon name shown inside the pin.
    pub label: Option<String>,
    /// Three- or six-digit hex color, without the leading `#`.
    pub color: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for Marker {
    /// The overlay path segment, e.g. `pin-s-a+f44(11.541650,48.151313)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pin-{}", self.size)?;
        if let Some(label) = &self.label {
            write!(f, "-{}", label)?;
        }
        if let Some(color) = &self.color {
            write!(f, "+{}", color)?;
        }
        write!(f, "({:.6},{:.6})", self.longitude, self.latitude)
    }
}

/// Parameters of a static map image call.
#[derive(Builder, Clone, Debug)]
#[builder(setter(into), default)]
pub struct ImageRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: i32,
    /// Output size in pixels.
    pub width: u32,
    pub height: u32,
    /// Output extension, e.g. `png`, `png256` or `jpg`.
    pub format: String,
    /// Doubles the output resolution.
    pub retina: bool,
    /// Overlays, rendered in the order given.
    pub markers: Vec<Marker>,
}

impl Default for ImageRequest {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            zoom: 0,
            width: 0,
            height: 0,
            format: "png".to_string(),
            retina: false,
            markers: Vec::new(),
        }
    }
}

impl<'a> ImagesApi<'a> {
    pub(crate) fn new(client: &'a Client, map_id: &str) -> Self {
        Self {
            client,
            map_id: map_id.to_owned(),
        }
    }

    /// Retrieves the static map described by `request` and decodes it into
    /// an in-memory pixel buffer. PNG, JPEG and GIF payloads are supported.
    pub async fn get(&self, request: &ImageRequest) -> Result<DynamicImage, GetError> {
        let url = self.build_url(request)?;
        let body = self.client.get_bytes(url).await?;
        let img = image::load_from_memory(&body)?;
        Ok(img)
    }

    fn build_url(&self, request: &ImageRequest) -> Result<Url, GetError> {
        if request.format.is_empty() {
            return Err(GetError::BuildError(
                "the image format must not be empty".to_string(),
            ));
        }
        let mut path = format!("{}/{}", self.client.base_url(), query_escape(&self.map_id));
        for marker in &request.markers {
            path.push('/');
            path.push_str(&marker.to_string());
        }
        path.push_str(&format!(
            "/{:.6},{:.6},{}/{}x{}",
            request.longitude, request.latitude, request.zoom, request.width, request.height
        ));
        if request.retina {
            path.push_str("@2x");
        }
        path.push_str(&format!(".{}", request.format));

        let mut url = Url::parse(&path)?;
        url.query_pairs_mut()
            .append_pair("access_token", self.client.access_token());
        Ok(url)
    }
}
