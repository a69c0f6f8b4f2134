//! Flat-file JSON persistence for article collections.
//!
//! [`load_articles`] reads the input array, [`write_articles`] writes the
//! annotated array back out with 4-space indentation.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::article::Article;

const INDENT: &[u8] = b"    ";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("the file '{}' was not found", .path.display())]
    NotFound { path: PathBuf },

    #[error("could not read '{}'", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("'{}' is not a JSON array of article objects", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not write to the file '{}'", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Read a JSON array of article objects, preserving order.
pub fn load_articles(path: &Path) -> Result<Vec<Article>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize articles as an indented JSON array.
pub fn to_pretty_json(articles: &[Article]) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    articles.serialize(&mut ser)?;
    Ok(buf)
}

/// Write articles to `path`. The data lands in a sibling temp file first and
/// is renamed into place, so a failed write never leaves a truncated file.
pub fn write_articles(path: &Path, articles: &[Article]) -> Result<(), StoreError> {
    let write_err = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let json = to_pretty_json(articles).map_err(|e| write_err(io::Error::other(e)))?;

    let tmp = temp_path(path);
    let result = fs::File::create(&tmp)
        .and_then(|mut file| {
            file.write_all(&json)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp, path));

    if let Err(source) = result {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(source));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
