//! Local cache of a day's puzzle input
//!
//! Presence of the file is the whole cache check: once written it is never
//! refetched, whatever it contains.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::AppError;

pub(crate) struct InputCache<'a> {
    path: &'a Path,
}

impl<'a> InputCache<'a> {
    pub(crate) fn new(path: &'a Path) -> Self {
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        self.path
    }

    /// Anything other than "not found" counts as present.
    pub(crate) fn exists(&self) -> bool {
        file_exists(self.path)
    }

    /// Write `bytes` through a temp file in the same directory, then rename
    /// over the target so an interrupted run never leaves a truncated input.
    pub(crate) fn store(&self, bytes: &[u8]) -> Result<(), AppError> {
        let write_err = |source: io::Error| AppError::Write {
            path: self.path.to_path_buf(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(bytes).map_err(write_err)?;
        set_readable_mode(tmp.as_file()).map_err(write_err)?;
        tmp.persist(self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

pub(crate) fn file_exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    }
}

/// 0644 on unix, no-op elsewhere
pub(crate) fn set_readable_mode(file: &fs::File) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o644))?;
    }
    #[cfg(not(unix))]
    let _ = file;
    Ok(())
}
