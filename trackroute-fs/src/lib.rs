//! Filesystem helpers for Trackroute tools, built on `cap-std` and `camino`.
//!
//! Paths are UTF-8 throughout. Every operation opens the nearest anchor
//! directory (the filesystem root, a drive prefix or the working directory)
//! with ambient authority and then works relative to that handle.

#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::debug;

/// Open a file for reading.
///
/// # Errors
///
/// Propagates the underlying open failure.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole file into a string.
///
/// # Errors
///
/// Fails if the file cannot be opened or is not valid UTF-8.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut contents = String::new();
    open_utf8_file(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Write `contents` to `path`, creating missing parent directories and
/// replacing any existing file.
///
/// # Errors
///
/// Fails if a parent directory cannot be created or the file cannot be
/// written.
pub fn write_utf8_file(path: &Utf8Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_parent(path)?;
    let bytes = contents.as_ref();
    dir.write(name.as_str(), bytes)?;
    debug!("wrote {} bytes to {path}", bytes.len());
    Ok(())
}

/// Report whether `path` exists and is a regular file.
///
/// # Errors
///
/// Returns [`io::ErrorKind::NotFound`] when the path or its parent is missing.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_parent(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
///
/// # Errors
///
/// Propagates directory creation failures.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    let (anchor, relative) = split_anchor(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    fs_utf8::Dir::open_ambient_dir(&anchor, ambient_authority())?.create_dir_all(&relative)
}

/// Open the directory containing `path` and return it with the file name.
fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Split `path` into the directory it is anchored at and the remainder.
///
/// Relative paths are anchored at the working directory. Leading `..`
/// components belong to the anchor, since a capability handle cannot climb
/// out of the directory it was opened on.
fn split_anchor(path: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut anchor = Utf8PathBuf::new();
    let mut relative = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => anchor.push(component),
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir if relative.as_str().is_empty() => anchor.push(component),
            Utf8Component::ParentDir | Utf8Component::Normal(_) => relative.push(component),
        }
    }
    if anchor.as_str().is_empty() {
        anchor.push(".");
    }
    (anchor, relative)
}
