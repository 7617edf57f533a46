//! Error types for the galign tools.

use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;

/// A file could not be read, decoded, named, or written.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot derive an output name from {}: path has no file name", .path.display())]
    NoFileName { path: PathBuf },
}

impl ResourceError {
    /// The path the failing operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            ResourceError::Read { path, .. }
            | ResourceError::Decode { path, .. }
            | ResourceError::Write { path, .. }
            | ResourceError::NoFileName { path } => path,
        }
    }
}

/// Failure of a transcoder run.
#[derive(Error, Debug)]
pub enum PrepError {
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error("no input could be processed ({failed} failed)")]
    NothingProcessed { failed: usize },
}

/// Failure of a region alignment run.
#[derive(Error, Debug)]
pub enum AlignError {
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(
        "input files do not contain the same number of hard regions ({delimiter}): \
         {} has {left_count} and {} has {right_count}",
        .left.display(),
        .right.display()
    )]
    HardRegionMismatch {
        delimiter: String,
        left: PathBuf,
        left_count: usize,
        right: PathBuf,
        right_count: usize,
    },
}
