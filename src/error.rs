use thiserror::Error;

pub type DrawerResult<T> = Result<T, DrawerError>;

#[derive(Debug, Error)]
pub enum DrawerError {
    #[error("invalid plot config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("canvas backend failure: {0}")]
    Backend(String),
}
