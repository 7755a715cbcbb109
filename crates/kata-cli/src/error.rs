use loopkata::core::grid::GridError;
use loopkata::tasks::TaskError;
use thiserror::Error;
use tracing_subscriber::util::TryInitError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Task(#[from] TaskError),

    #[error("Failed to render output: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] TryInitError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
