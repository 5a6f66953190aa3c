#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssistantError {
    #[error("no API credential configured")]
    MissingCredential,
    #[error("API credential is not a valid header value")]
    InvalidCredential,
    #[error("invalid endpoint '{0}'")]
    InvalidEndpoint(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("empty response")]
    EmptyResponse,
    #[error("malformed response: {0}")]
    Malformed(String),
}
