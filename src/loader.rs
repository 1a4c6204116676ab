//! Where Markdown comes from before it reaches the parser.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use tracing::debug;

use crate::Error;

/// A source of Markdown text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Text supplied directly.
    Raw(String),
    /// A file on disk.
    File(PathBuf),
    /// Everything on standard input.
    Stdin,
}

impl Source {
    /// Reads the whole source.
    ///
    /// Fails with [`Error::NoInput`] when the source is empty, and with
    /// [`Error::NotFound`] when a file source doesn't exist.
    ///
    /// ```rust
    /// # use linemark::{Error, Source};
    /// let text = Source::Raw("# Title".to_string()).load().unwrap();
    /// assert_eq!(text, "# Title");
    ///
    /// assert!(matches!(Source::Raw(String::new()).load(), Err(Error::NoInput)));
    /// ```
    pub fn load(&self) -> Result<String, Error> {
        let text = match self {
            Source::Raw(text) => text.clone(),
            Source::File(path) => {
                if !path.exists() {
                    return Err(Error::NotFound(path.clone()));
                }
                debug!(path = %path.display(), "reading file");
                String::from_utf8(fs::read(path)?)?
            }
            Source::Stdin => {
                let mut buf = Vec::with_capacity(2048);
                io::stdin().read_to_end(&mut buf)?;
                String::from_utf8(buf)?
            }
        };

        if text.is_empty() {
            return Err(Error::NoInput);
        }
        Ok(text)
    }
}

/// Reads and concatenates several sources in order.
///
/// Fails with [`Error::NoInput`] when `sources` is empty.
pub fn load_all(sources: &[Source]) -> Result<String, Error> {
    if sources.is_empty() {
        return Err(Error::NoInput);
    }

    let mut text = String::new();
    for source in sources {
        let part = source.load()?;
        text.push_str(&part);
        if !part.ends_with('\n') {
            text.push('\n');
        }
    }
    Ok(text)
}
