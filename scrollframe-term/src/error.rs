use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("invalid scrollbar config: {0}")]
    Config(#[from] scrollframe::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
