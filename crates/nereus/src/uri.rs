//! Module path to document URI conversion.

use std::path::Path;

use lsp_types::Uri;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::{Error, Result};

/// Characters escaped inside a `file://` URI path.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Convert an absolute module path to a `file://` URI.
///
/// On Unix, this produces URIs like `file:///home/user/project/app.py`. On
/// Windows, it handles drive letters appropriately. Unlike a filesystem
/// lookup, the file does not need to exist.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path is relative, is not valid
/// UTF-8, or does not form a valid URI.
pub fn path_to_uri(path: &Path) -> Result<Uri> {
    if !path.is_absolute() {
        return Err(Error::InvalidPath(format!(
            "module path is not absolute: {}",
            path.display()
        )));
    }

    let path_str = path.to_str().ok_or_else(|| {
        Error::InvalidPath(format!("path contains invalid UTF-8: {}", path.display()))
    })?;

    // On Unix: /home/user/app.py -> file:///home/user/app.py
    // On Windows: C:\Users\app.py -> file:///C:/Users/app.py
    #[cfg(windows)]
    let uri_string = format!(
        "file:///{}",
        utf8_percent_encode(&path_str.replace('\\', "/"), PATH_SEGMENT)
    );

    #[cfg(not(windows))]
    let uri_string = format!("file://{}", utf8_percent_encode(path_str, PATH_SEGMENT));

    uri_string
        .parse()
        .map_err(|e| Error::InvalidPath(format!("invalid URI '{uri_string}': {e}")))
}
