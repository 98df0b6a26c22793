use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::{debug, info};

use crate::cache::{file_exists, set_readable_mode};
use crate::consts::SESSION_PROMPT;
use crate::error::AppError;

use super::Prompter;

/// Session token persisted as a plain file, re-read on every run
pub(crate) struct SessionStore<'a> {
    path: &'a Path,
}

impl<'a> SessionStore<'a> {
    pub(crate) fn new(path: &'a Path) -> Self {
        Self { path }
    }

    pub(crate) fn exists(&self) -> bool {
        file_exists(self.path)
    }

    /// Prompt for and persist a token if none is on disk.
    ///
    /// Returns whether the user was prompted. Nothing is written when the
    /// prompt fails or is cancelled.
    pub(crate) fn ensure(&self, prompter: &dyn Prompter) -> Result<bool, AppError> {
        if self.exists() {
            debug!("Using session from {}", self.path.display());
            return Ok(false);
        }

        let token = prompter.ask(SESSION_PROMPT)?;
        self.persist(&token)?;
        info!("Saved session key to {}", self.path.display());
        Ok(true)
    }

    /// Write `token` verbatim to a new 0644 file. Fails if the file exists.
    pub(crate) fn persist(&self, token: &str) -> Result<(), AppError> {
        let write_err = |source: io::Error| AppError::Write {
            path: self.path.to_path_buf(),
            source,
        };

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        let mut file = options.open(self.path).map_err(write_err)?;
        // creation mode is masked by umask
        set_readable_mode(&file).map_err(write_err)?;
        file.write_all(token.as_bytes()).map_err(write_err)?;
        Ok(())
    }

    pub(crate) fn read(&self) -> Result<Vec<u8>, AppError> {
        fs::read(self.path).map_err(|source| AppError::SessionRead {
            path: self.path.to_path_buf(),
            source,
        })
    }
}
