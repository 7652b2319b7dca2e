use std::fmt;

/// Mapbox access token, appended to every request as the `access_token`
/// query parameter.
#[derive(Clone)]
pub struct AccessToken {
    token: String,
}

impl AccessToken {
    /// From a raw access token string.
    pub fn from_raw(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }

    pub fn get(&self) -> &str {
        &self.token
    }
}

// The token authenticates every request, so it stays out of debug output.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .finish()
    }
}
