//! File boundary: read a document from disk and hand it to a [`DocumentCache`].
//!
//! Failures here never propagate past the loader. An unreadable or malformed
//! file is logged with its path and the error text, and the partial result is
//! dropped so the cache only ever holds complete documents.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, warn};

use crate::cache::DocumentCache;
use crate::error::Result;
use crate::parser::{from_reader, ParseOptions};
use crate::value::Value;

/// Read and parse one file.
pub fn load_file(path: &Path, options: &ParseOptions) -> Result<Value> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file), options)
}

/// Read and parse one file, logging and discarding it on failure.
pub fn try_load_file(path: &Path, options: &ParseOptions) -> Option<Value> {
    match load_file(path, options) {
        Ok(doc) => {
            debug!(file = %path.display(), entries = doc.size(), "loaded document");
            Some(doc)
        }
        Err(e) => {
            warn!(file = %path.display(), error = %e, "discarding unreadable document");
            None
        }
    }
}

/// Load `path` and cache it under `key`. Returns whether the document was
/// cached.
pub fn load_into_cache(
    cache: &DocumentCache,
    key: &str,
    path: &Path,
    options: &ParseOptions,
) -> bool {
    let Some(doc) = try_load_file(path, options) else {
        return false;
    };
    cache.insert(key, doc);
    true
}

/// Load `path`, filter it in place with [`Value::destructive_grep`], and
/// cache what remains under `key`. A document with nothing left after
/// filtering is not cached.
pub fn load_filtered_into_cache<F>(
    cache: &DocumentCache,
    key: &str,
    path: &Path,
    options: &ParseOptions,
    keep: F,
) -> bool
where
    F: FnMut(&Value) -> bool,
{
    let Some(mut doc) = try_load_file(path, options) else {
        return false;
    };
    if !doc.destructive_grep(keep) {
        debug!(file = %path.display(), key, "filter left nothing to cache");
        return false;
    }
    cache.insert(key, doc);
    true
}
