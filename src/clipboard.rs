use std::time::{Duration, Instant};

use crate::error::ClipboardError;

pub const COPY_LABEL: &str = "Copia";
pub const COPIED_LABEL: &str = "Copiato!";
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(1000);

/// Somewhere text can be copied to.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The OS clipboard. A handle is opened for each write and closed right after.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    #[cfg(windows)]
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        clipboard_win::set_clipboard_string(text).map_err(|e| ClipboardError::Write(e.to_string()))
    }

    #[cfg(not(windows))]
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing to copy; the clipboard was not touched.
    Skipped,
    Copied,
    Failed(ClipboardError),
}

/// State of one copy control: its label flips to [`COPIED_LABEL`] for
/// [`COPIED_FEEDBACK`] after a successful copy.
#[derive(Debug, Clone, Default)]
pub struct CopyButton {
    confirmed_at: Option<Instant>,
}

impl CopyButton {
    pub fn copy(
        &mut self,
        text: &str,
        clipboard: &mut dyn ClipboardWriter,
        now: Instant,
    ) -> CopyOutcome {
        let text = text.trim();
        if text.is_empty() {
            return CopyOutcome::Skipped;
        }
        match clipboard.write_text(text) {
            Ok(()) => {
                tracing::debug!(chars = text.chars().count(), "copied to clipboard");
                self.confirmed_at = Some(now);
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                CopyOutcome::Failed(e)
            }
        }
    }

    pub fn label(&self, now: Instant) -> &'static str {
        if self.is_confirming(now) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    pub fn is_confirming(&self, now: Instant) -> bool {
        self.confirmed_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPIED_FEEDBACK)
    }

    /// Time left before the label reverts, if it is currently flipped.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let at = self.confirmed_at?;
        COPIED_FEEDBACK.checked_sub(now.saturating_duration_since(at)).filter(|d| !d.is_zero())
    }
}
