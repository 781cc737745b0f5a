//! Readable streams handed back by the resolver.

use std::fmt;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::sync::Arc;

use camino::Utf8PathBuf;
use cap_std::fs_utf8::File;

use crate::{PropertiesError, ResolveResult};

/// Where a [`ResourceStream`] was opened from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceOrigin {
    /// A filesystem path, relative to the working directory or absolute.
    Filesystem(Utf8PathBuf),
    /// A file under the configuration directory.
    ConfDir(Utf8PathBuf),
    /// A resource compiled into the binary.
    Embedded(String),
    /// A file inside a bundle root directory.
    BundleRoot {
        /// Root directory registered with the bundle.
        root: Utf8PathBuf,
        /// Resource name relative to `root`.
        name: String,
    },
}

impl ResourceOrigin {
    /// Returns `true` for resources located by name through a bundle.
    #[must_use]
    pub const fn is_bundled(&self) -> bool {
        matches!(self, Self::Embedded(_) | Self::BundleRoot { .. })
    }
}

impl fmt::Display for ResourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filesystem(path) | Self::ConfDir(path) => write!(f, "{path}"),
            Self::Embedded(name) => write!(f, "bundled:{name}"),
            Self::BundleRoot { root, name } => write!(f, "bundled:{name} ({root})"),
        }
    }
}

#[derive(Debug)]
enum Source {
    File(File),
    Embedded(Cursor<&'static [u8]>),
}

impl Read for Source {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(file) => file.read(buf),
            Self::Embedded(cursor) => cursor.read(buf),
        }
    }
}

/// An open, readable resource positioned at its first byte.
///
/// The caller owns the stream; dropping it releases the underlying handle.
#[derive(Debug)]
pub struct ResourceStream {
    origin: ResourceOrigin,
    reader: BufReader<Source>,
}

impl ResourceStream {
    pub(crate) fn from_file(origin: ResourceOrigin, file: File) -> Self {
        Self {
            origin,
            reader: BufReader::new(Source::File(file)),
        }
    }

    pub(crate) fn embedded(name: impl Into<String>, bytes: &'static [u8]) -> Self {
        Self {
            origin: ResourceOrigin::Embedded(name.into()),
            reader: BufReader::new(Source::Embedded(Cursor::new(bytes))),
        }
    }

    /// Location the stream was opened from.
    #[must_use]
    pub const fn origin(&self) -> &ResourceOrigin {
        &self.origin
    }

    /// Reads the remainder of the stream as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`PropertiesError::File`] when reading fails or the content is
    /// not valid UTF-8.
    pub fn read_text(mut self) -> ResolveResult<String> {
        let mut text = String::new();
        self.reader
            .read_to_string(&mut text)
            .map_err(|err| Arc::new(PropertiesError::file(self.origin.to_string(), err)))?;
        Ok(text)
    }
}

impl Read for ResourceStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reader.read(buf)
    }
}

impl BufRead for ResourceStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.reader.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.reader.consume(amt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_stream_reads_from_start() -> anyhow::Result<()> {
        let mut stream = ResourceStream::embedded("app.properties", b"a=1\nb=2\n");
        let mut first = String::new();
        stream.read_line(&mut first)?;
        anyhow::ensure!(first == "a=1\n", "unexpected first line {first:?}");
        anyhow::ensure!(stream.origin().is_bundled(), "embedded origin should be bundled");
        Ok(())
    }

    #[test]
    fn read_text_rejects_invalid_utf8() {
        let stream = ResourceStream::embedded("binary.bin", &[0xff, 0xfe, 0x00]);
        let err = stream.read_text().err();
        assert!(
            matches!(err.as_deref(), Some(PropertiesError::File { location, .. }) if location == "bundled:binary.bin"),
            "unexpected result: {err:?}"
        );
    }

    #[test]
    fn origins_render_for_diagnostics() {
        let root = ResourceOrigin::BundleRoot {
            root: Utf8PathBuf::from("/opt/app/resources"),
            name: String::from("app-jaas.properties"),
        };
        assert_eq!(
            root.to_string(),
            "bundled:app-jaas.properties (/opt/app/resources)"
        );
        assert!(!ResourceOrigin::ConfDir(Utf8PathBuf::from("conf/a")).is_bundled());
    }
}
