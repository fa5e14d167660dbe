//! File selection events.
//!
//! A file reaches the widget through one of two input modalities: an
//! explicit picker selection or a drag-and-drop gesture. Both carry an
//! ordered file list and the widget only ever consumes the first entry.
//! Drag events additionally expose a suppressible default action, which the
//! widget must cancel so the hosting surface does not handle the gesture
//! itself (for a browser page that default is navigating to the file).

use crate::upload::SelectedFile;

/// Files chosen through the picker control.
#[derive(Debug, Clone, Default)]
pub struct FileSelection {
    files: Vec<SelectedFile>,
}

impl FileSelection {
    /// Creates a selection from a file list.
    #[must_use]
    pub fn new(files: Vec<SelectedFile>) -> Self {
        Self { files }
    }

    /// Returns the first file of the selection, if any.
    #[must_use]
    pub fn first(&self) -> Option<&SelectedFile> {
        self.files.first()
    }

    /// Consumes the selection, yielding the first file.
    #[must_use]
    pub fn into_first(mut self) -> Option<SelectedFile> {
        if self.files.is_empty() {
            None
        } else {
            Some(self.files.swap_remove(0))
        }
    }

    /// Returns true when no file was chosen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// A drag gesture passing over the drop target.
///
/// Carries no payload; it exists only so the default action can be
/// suppressed, which is what turns the control into a drop target.
#[derive(Debug, Default)]
pub struct DragOver {
    default_prevented: bool,
}

impl DragOver {
    /// Creates a drag-over event with its default action pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns true once the default action has been suppressed.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Files dropped onto the target control.
#[derive(Debug, Default)]
pub struct FileDrop {
    files: Vec<SelectedFile>,
    default_prevented: bool,
}

impl FileDrop {
    /// Creates a drop event carrying the transferred file list.
    #[must_use]
    pub fn new(files: Vec<SelectedFile>) -> Self {
        Self {
            files,
            default_prevented: false,
        }
    }

    /// Suppresses the default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns true once the default action has been suppressed.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// Takes the first transferred file out of the event, if any.
    #[must_use]
    pub fn take_first(&mut self) -> Option<SelectedFile> {
        if self.files.is_empty() {
            None
        } else {
            Some(self.files.swap_remove(0))
        }
    }
}
