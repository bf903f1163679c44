use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File name of the top-level manual template.
pub(crate) const MASTER: &str = "_commands.md";

/// Fragments compiled into the library, consulted after every directory.
const EMBEDDED: &[(&str, &str)] = &[(MASTER, include_str!("../templates/_commands.md"))];

/// Resolve a fragment by name across `dirs`, in order.
///
/// Every directory is consulted and the last one holding the fragment wins,
/// so callers list directories from least to most specific. A directory
/// missing the fragment is skipped; any other read failure is fatal, even
/// when an earlier directory already produced content. When no directory
/// provides the fragment the embedded set is tried, and
/// [`Error::FragmentNotFound`] means that missed too.
pub(crate) fn read(name: &str, dirs: &[PathBuf]) -> Result<String> {
    let mut contents = None;
    for dir in dirs {
        let path = dir.join(name);
        match fs::read_to_string(&path) {
            Ok(text) => contents = Some(text),
            Err(err) if err.kind() == ErrorKind::NotFound => continue,
            Err(err) => return Err(Error::Fragment { path, source: err }),
        }
    }
    if let Some(text) = contents {
        return Ok(text);
    }
    match embedded(name) {
        Some(text) => Ok(text.to_string()),
        None => Err(Error::FragmentNotFound {
            name: name.to_string(),
        }),
    }
}

fn embedded(name: &str) -> Option<&'static str> {
    EMBEDDED
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, text)| *text)
}
