use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failures while gathering input for a conversion.
///
/// Conversion itself never fails: markup that can't be read is kept as text.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no file or content has been provided")]
    NoInput,

    #[error("the file {} was not found", .0.display())]
    NotFound(PathBuf),

    #[error("input is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}
