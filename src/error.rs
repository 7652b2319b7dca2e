use thiserror::Error;

#[derive(Debug, Error)]
pub enum GetError {
    #[error("unable to build the request: {0}")]
    BuildError(String),
    #[error("unable to build the request URL: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("the request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("the request failed with status code {status}: {body}")]
    ResponseError {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("the response body could not be read: {0}")]
    ResponseBodyError(#[source] reqwest::Error),
    #[error("unable to parse the response body: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("unable to decode the response image: {0}")]
    ImageDecodeError(#[from] image::ImageError),
}
