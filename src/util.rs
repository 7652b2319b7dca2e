use url::form_urlencoded;

pub fn default_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .build()
        .unwrap()
}

/// Form-encodes a URL component: spaces become `+`, reserved characters are
/// percent-escaped.
pub fn query_escape(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_escape_spaces_as_plus() {
        assert_eq!(
            query_escape("1600 pennsylvania ave nw"),
            "1600+pennsylvania+ave+nw"
        );
    }

    #[test]
    fn query_escape_reserved_characters() {
        assert_eq!(
            query_escape("Marienplatz 2,Munich,DE"),
            "Marienplatz+2%2CMunich%2CDE"
        );
        assert_eq!(query_escape("a:b/c"), "a%3Ab%2Fc");
    }

    #[test]
    fn query_escape_leaves_unreserved() {
        assert_eq!(query_escape("mapbox.places-v1"), "mapbox.places-v1");
    }
}
