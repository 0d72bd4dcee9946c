//! Dictionary loading utilities
//!
//! Opens dictionary files as lazy line sources. Nothing is read until the
//! lines are iterated, and the file is closed when the iterator is dropped.
//!
//! Lines are split on raw bytes and keep their terminator. Bytes that are not
//! valid UTF-8 decode to U+FFFD, so such entries simply never match instead of
//! failing the scan.

use crate::error::UnjumbleError;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// An opened dictionary file
#[derive(Debug)]
pub struct DictionarySource {
    path: PathBuf,
    reader: BufReader<File>,
}

impl DictionarySource {
    /// Open the dictionary at `path`
    ///
    /// # Errors
    ///
    /// Returns `UnjumbleError::Dictionary` if the file cannot be opened.
    ///
    /// # Examples
    /// ```no_run
    /// use unjumble::wordlists::loader::DictionarySource;
    ///
    /// let source = DictionarySource::open("/usr/share/dict/words").unwrap();
    /// let count = source.lines().count();
    /// println!("{count} entries");
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, UnjumbleError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| UnjumbleError::Dictionary {
            path: path.clone(),
            source,
        })?;

        debug!("opened dictionary {}", path.display());

        Ok(Self {
            path,
            reader: BufReader::new(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lazily iterate the dictionary's lines
    #[must_use]
    pub fn lines(self) -> DictionaryLines<BufReader<File>> {
        DictionaryLines::new(self.reader)
    }
}

/// Byte-oriented line iterator over a dictionary
///
/// Each item is one line with its terminator still attached, decoded
/// lossily. Only genuine I/O failures are reported as errors.
#[derive(Debug)]
pub struct DictionaryLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> DictionaryLines<R> {
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for DictionaryLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(String::from_utf8_lossy(&self.buf).into_owned())),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Lazily iterate the lines of any reader
pub fn lines_from_reader<R: Read>(reader: R) -> DictionaryLines<BufReader<R>> {
    DictionaryLines::new(BufReader::new(reader))
}

/// Turn in-memory words into a line source
///
/// # Examples
/// ```
/// use unjumble::wordlists::loader::lines_from_slice;
///
/// let lines: Vec<String> = lines_from_slice(&["stop", "pots"])
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(lines, vec!["stop", "pots"]);
/// ```
pub fn lines_from_slice<'a>(
    slice: &'a [&'a str],
) -> impl Iterator<Item = io::Result<String>> + 'a {
    slice.iter().map(|&s| Ok(s.to_string()))
}
