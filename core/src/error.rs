use thiserror::Error;

/// Katana core error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Update setup failed: {0}")]
    UpdateSetup(String),

    #[error("Update failed: {0}")]
    Update(String),
}

pub type Result<T> = std::result::Result<T, Error>;
