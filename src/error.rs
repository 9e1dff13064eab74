use crate::config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while converting one script file. None of them stop the caller
/// from moving on to the next file.
#[derive(Error, Debug)]
pub enum Error {
    #[error("there is no file at {0}")]
    NotFound(PathBuf),

    #[error("{0} is not a .txt file")]
    WrongExtension(PathBuf),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} is not valid UTF-8 text")]
    Decode(PathBuf),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("cannot build document: {0}")]
    Render(String),

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
