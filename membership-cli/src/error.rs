use membership_core::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("transport error: {0}")]
    Transport(#[from] ureq::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}
