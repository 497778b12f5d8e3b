use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("value tree nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
