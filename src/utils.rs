use crate::error::{HtmlError, IoError, Result};
use std::{fs, io, path::Path};

/// Maps an I/O failure on `path` onto the crate error, keeping the original as source.
pub fn io_error(path: &Path, err: io::Error) -> HtmlError {
    let target = path.display().to_string();
    let kind = match err.kind() {
        io::ErrorKind::NotFound => IoError::FileNotFound(target),
        io::ErrorKind::PermissionDenied => IoError::PermissionDenied(target),
        _ => IoError::WriteError(target),
    };
    HtmlError::from(kind).with_source(err)
}

/// Creates or truncates `path` and writes `content` to it.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| io_error(path, e))
}
