//! Filesystem helpers shared by bundle roots and path candidates.
//!
//! Lookups inside a bundle root go through a `cap-std` directory so they
//! cannot leave it. Plain path candidates use ambient authority and follow
//! symlinks wherever they point.

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir, fs_utf8::File};

const fn is_missing(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory | io::ErrorKind::IsADirectory
    )
}

/// Open an ambient directory, mapping "does not exist" to `Ok(None)`.
pub(crate) fn open_dir(path: &Utf8Path) -> io::Result<Option<Dir>> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(Some(dir)),
        Err(err) if is_missing(err.kind()) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Open the regular file `name` inside `dir`.
///
/// Missing entries and non-files yield `Ok(None)`; any other failure is
/// returned.
pub(crate) fn open_in(dir: &Dir, name: &Utf8Path) -> io::Result<Option<File>> {
    match dir.metadata(name) {
        Ok(meta) if meta.is_file() => dir.open(name).map(Some),
        Ok(_) => Ok(None),
        Err(err) if is_missing(err.kind()) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Open `path` (relative to the process working directory, or absolute)
/// if it names an existing regular file.
///
/// The metadata check runs on the opened handle, so a symlink counts as the
/// file it points at.
pub(crate) fn open_path(path: &Utf8Path) -> io::Result<Option<File>> {
    let file = match File::open_ambient(path, ambient_authority()) {
        Ok(file) => file,
        Err(err) if is_missing(err.kind()) => return Ok(None),
        Err(err) => return Err(err),
    };
    Ok(file.metadata()?.is_file().then_some(file))
}
