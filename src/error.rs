use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Chain not supported: {chain}")]
    ChainNotSupported { chain: String },

    #[error("Unknown chain id: {0}")]
    UnknownChainId(u32),

    #[error("Unknown tracking event: {0}")]
    UnknownEvent(String),

    #[error("Invalid chain direction: {0} (expected `origin` or `destination`)")]
    InvalidDirection(String),

    #[error("Chain {chain} has no {what} configured")]
    MissingEndpoint { chain: String, what: &'static str },

    #[error("Explorer URL cannot take a path: {0}")]
    InvalidExplorerUrl(String),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
