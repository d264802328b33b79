//! `.ics` file payload and the save step that hands it to the user.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::CalendarError;
use crate::ics::{CalendarExportEvent, encode, try_encode};

pub const EXPORT_FILENAME: &str = "good-date.ics";
pub const EXPORT_MIME_TYPE: &str = "text/calendar; charset=utf-8";

/// Encoded calendar document plus the file metadata it is saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub mime_type: &'static str,
    pub contents: String,
}

impl ExportFile {
    /// Encode `event` under the default filename.
    #[must_use]
    pub fn for_event(event: &CalendarExportEvent) -> Self {
        Self {
            filename: EXPORT_FILENAME.to_string(),
            mime_type: EXPORT_MIME_TYPE,
            contents: encode(event),
        }
    }

    /// Like [`Self::for_event`], but rejects events whose dates do not parse
    /// instead of writing the `INVALID` placeholder.
    pub fn try_for_event(event: &CalendarExportEvent) -> Result<Self, CalendarError> {
        Ok(Self {
            filename: EXPORT_FILENAME.to_string(),
            mime_type: EXPORT_MIME_TYPE,
            contents: try_encode(event)?,
        })
    }

    /// Replace the file name. Checked by [`Self::save_to`], which only accepts
    /// a plain file name without directory components.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Write the file into `directory`, replacing any previous export.
    ///
    /// The contents are staged in a temporary file inside `directory` and
    /// renamed into place. The staging file is removed on every error path.
    pub fn save_to(&self, directory: &Path) -> Result<PathBuf, CalendarError> {
        if !is_plain_file_name(&self.filename) {
            return Err(CalendarError::InvalidFilename {
                filename: self.filename.clone(),
            });
        }
        let target = directory.join(&self.filename);

        let mut staged = tempfile::Builder::new()
            .prefix(".good-date-")
            .suffix(".tmp")
            .tempfile_in(directory)?;
        staged.write_all(self.contents.as_bytes())?;
        staged.as_file().sync_all()?;
        staged
            .persist(&target)
            .map_err(|error| CalendarError::Io(error.error))?;

        tracing::debug!(
            path = %target.display(),
            bytes = self.contents.len(),
            mime_type = self.mime_type,
            "saved calendar export"
        );
        Ok(target)
    }
}

fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(['/', '\\'])
        && Path::new(name).file_name() == Some(OsStr::new(name))
}
