use thiserror::Error;

use crate::decayerror::DecayError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    DecayError(#[from] DecayError),
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String)
}

impl ManagerError {
    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}
