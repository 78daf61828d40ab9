use std::io;
use thiserror::Error;

/// Errors raised while building a [`crate::TwConf`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfError {
    #[error(
        "the minimum number of characters to print ({min}) must not be greater \
         than the target line length ({target})"
    )]
    MinExceedsTarget { min: usize, target: usize },

    #[error("the target line length must be > 0")]
    ZeroTargetWidth,
}

/// Errors raised while running a command.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
