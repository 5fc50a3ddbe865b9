//! Document rendering and saving
//!
//! Renders any [`Render`] value and writes the text verbatim to a destination.
//! Write failures are returned to the caller with the original `io::Error` as source.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::Render;
use crate::infrastructure::traits::FileSystem;
use crate::util::path::resolve_output_path;

/// Service for turning built trees into text files.
pub struct DocumentService {
    fs: Arc<dyn FileSystem>,
    output_dir: Option<PathBuf>,
}

impl DocumentService {
    /// Create a new document service writing relative paths against the cwd.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            output_dir: None,
        }
    }

    /// Relative destinations are resolved against `dir` instead of the cwd.
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    /// Final text of `doc`, identical to [`Render::to_text`].
    pub fn render<R: Render + ?Sized>(&self, doc: &R) -> String {
        doc.to_text()
    }

    /// Render `doc` and write it to `dest` followed by a single newline.
    ///
    /// `~` and `$VAR` in `dest` are expanded and missing parent directories created.
    /// Returns the path actually written.
    #[instrument(level = "debug", skip(self, doc))]
    pub fn save<R: Render + ?Sized>(&self, doc: &R, dest: &Path) -> ApplicationResult<PathBuf> {
        let dest = resolve_output_path(self.output_dir.as_deref(), dest);
        debug!("save: resolved destination={}", dest.display());

        let mut content = self.render(doc);
        content.push('\n');

        self.fs
            .ensure_parent(&dest)
            .with_path_context("create parent directory", &dest)?;
        self.fs
            .write(&dest, &content)
            .with_path_context("write document", &dest)?;

        info!("wrote {} bytes to {}", content.len(), dest.display());
        Ok(dest)
    }
}
