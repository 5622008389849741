use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write results to {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid choice `{0}`")]
    InvalidChoice(String),

    #[error("cannot chart `{0}`: series has no points")]
    EmptySeries(String),

    #[error("cannot chart `{title}`: {sizes} sizes but {ascending} ascending and {descending} descending timings")]
    SeriesLength {
        title: String,
        sizes: usize,
        ascending: usize,
        descending: usize,
    },
}
