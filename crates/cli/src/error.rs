use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] crumb::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
