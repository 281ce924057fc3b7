#![forbid(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
}

impl StoreError {
    pub(crate) fn trip_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: "trip",
            id: id.to_string(),
        }
    }

    pub(crate) fn day_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: "day",
            id: id.to_string(),
        }
    }

    pub(crate) fn entry_not_found(id: &str) -> Self {
        Self::NotFound {
            kind: "entry",
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
