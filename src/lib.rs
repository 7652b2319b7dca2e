//! Client for the Mapbox web service: forward geocoding and static map
//! image retrieval.

mod access_token;
pub mod client;
pub mod constants;
pub mod error;
pub mod geocoding;
pub mod images;
mod util;

pub use access_token::AccessToken;
pub use client::Client;
