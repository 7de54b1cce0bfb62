//! Reading a file through an [`Outcome`] chain.
//!
//! Every step that can fail is written against the standard `Result` and
//! lifted into the chain with [`Outcome::then_wrap`], so the first failure
//! short-circuits the remaining steps and is returned untouched.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use pho::result::{BoxError, Outcome};

/// Reads `name`, resolved against `directory`, as UTF-8 text.
///
/// `directory` is usually `Outcome::wrap(std::env::current_dir())`; if it is
/// already an error, nothing is opened.
///
/// # Errors
///
/// The returned outcome holds the I/O error if the directory could not be
/// determined or the file could not be opened or read, and the decoding
/// error if the contents are not valid UTF-8.
pub fn read_relative(directory: Outcome<PathBuf, io::Error>, name: &str) -> Outcome<String> {
    let path = directory.map(|directory| directory.join(name));
    let file = path.then_wrap(File::open);

    if let Err(error) = file.as_ref().use_value(|file| tracing::debug!(?file, "opened file")) {
        tracing::warn!(%error, name, "cannot open file");
    }

    let reader = file.map(|file| -> Box<dyn Read> { Box::new(file) });
    let bytes = reader.then_wrap(|mut reader| {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer).map(|_| buffer)
    });

    bytes
        .map_err(BoxError::from)
        .then_wrap(|bytes| String::from_utf8(bytes).map_err(BoxError::from))
}
