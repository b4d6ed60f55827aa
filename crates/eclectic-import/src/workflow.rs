//! The paste-preview-import workflow.
//!
//! ```text
//! Idle --set_text--> Previewing --import--> Importing --> Success { count }
//!                                                    \--> Idle { message }
//! ```
//!
//! Changing the text recomputes the preview; importing parses the text again
//! from scratch.

use eclectic_core::SongCatalog;

use crate::error::{ImportError, ImportResult};
use crate::fields::RawRow;
use crate::parser::BulkImportParser;

/// Where the workflow stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportState {
    /// Nothing to import. Carries the message of the last failed import.
    Idle { message: Option<String> },
    /// Text is present and a preview has been computed.
    Previewing,
    /// An import is running.
    Importing,
    /// The last import appended `count` songs.
    Success { count: usize },
}

impl Default for ImportState {
    fn default() -> Self {
        Self::Idle { message: None }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImportWorkflow {
    parser: BulkImportParser,
    text: String,
    preview: Vec<RawRow>,
    state: ImportState,
}

impl ImportWorkflow {
    #[must_use]
    pub fn new(parser: BulkImportParser) -> Self {
        Self {
            parser,
            ..Self::default()
        }
    }

    /// Replace the pasted text and recompute the preview.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.preview = self.parser.preview(&self.text);
        self.state = if self.text.trim().is_empty() {
            ImportState::default()
        } else {
            ImportState::Previewing
        };
    }

    /// Parse the current text and append the result to `catalog`.
    ///
    /// On success the text and preview are cleared. On failure they are
    /// kept, the catalog is untouched and the workflow returns to idle with
    /// the error's message.
    pub fn import(&mut self, catalog: &mut SongCatalog) -> ImportResult<usize> {
        if self.text.trim().is_empty() {
            let err = ImportError::EmptyInput;
            self.state = ImportState::Idle {
                message: Some(err.to_string()),
            };
            return Err(err);
        }

        self.state = ImportState::Importing;
        match self.parser.import_into(&self.text, catalog) {
            Ok(count) => {
                self.text.clear();
                self.preview.clear();
                self.state = ImportState::Success { count };
                Ok(count)
            }
            Err(err) => {
                log::warn!("Import failed: {}", err);
                self.state = ImportState::Idle {
                    message: Some(err.to_string()),
                };
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn state(&self) -> &ImportState {
        &self.state
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn preview(&self) -> &[RawRow] {
        &self.preview
    }

    /// The message to show the user for the current state, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match &self.state {
            ImportState::Success { count } => Some(format!("Successfully imported {count} songs")),
            ImportState::Idle { message } => message.clone(),
            ImportState::Previewing | ImportState::Importing => None,
        }
    }
}
