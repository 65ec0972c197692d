// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Atomic file output. Bytes go to a temporary file beside the destination
// and are renamed into place, so readers never observe a half-written image.

use std::io::Write;
use std::path::Path;

use obscura_core::error::{ObscuraError, Result};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

/// Write `bytes` to `path`, replacing any existing file in one rename.
///
/// On failure nothing is created and an existing file at `path` is untouched.
#[instrument(skip_all, fields(path = %path.display(), len = bytes.len()))]
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|err| write_error(path, err))?;
    tmp.write_all(bytes).map_err(|err| write_error(path, err))?;
    tmp.as_file().sync_all().map_err(|err| write_error(path, err))?;
    tmp.persist(path).map_err(|err| write_error(path, err.error))?;

    debug!("Output persisted");
    Ok(())
}

fn write_error(path: &Path, err: std::io::Error) -> ObscuraError {
    ObscuraError::ImageWrite {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
