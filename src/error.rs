use thiserror::Error;

pub type Result<T> = std::result::Result<T, GhmError>;

#[derive(Error, Debug)]
pub enum GhmError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("HTTP error: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("GraphQL error: {0}")]
    Api(String),
    #[error("User '{0}' not found")]
    UserNotFound(String),
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

// Manual From for the unboxed to boxed conversion
impl From<ureq::Error> for GhmError {
    fn from(err: ureq::Error) -> Self {
        GhmError::Http(Box::new(err))
    }
}
