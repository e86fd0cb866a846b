//! All UI state in one place, plus the submit / resolve cycle.
//!
//! The window only reads from a [`Controller`] and forwards user events to
//! it, so the whole flow can be driven without a display.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::clipboard::{ClipboardWriter, CopyButton, CopyOutcome};
use crate::error::RemoteError;
use crate::mode::{Mode, ModeController};
use crate::prompt::{build_prompt, TranslationRequest};
use crate::remote::ProxyClient;
use crate::render::{Output, OutputField};

/// A validated request ready to go out, tagged with its sequence number.
#[derive(Debug, Clone)]
pub struct Submission {
    pub seq: u64,
    pub prompt: String,
}

impl Submission {
    pub async fn send(self, client: &ProxyClient) -> Completion {
        let result = client.ask(&self.prompt).await;
        Completion {
            seq: self.seq,
            result,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Completion {
    pub seq: u64,
    pub result: Result<String, RemoteError>,
}

#[derive(Debug)]
pub struct Controller {
    modes: ModeController,
    pub italian_phrase: String,
    pub dialect_phrase: String,
    pub dialect: String,
    output: Output,
    copy_translation: CopyButton,
    copy_explanation: CopyButton,
    alert: Option<String>,
    latest_seq: u64,
}

impl Controller {
    pub fn new(default_dialect: impl Into<String>) -> Self {
        Self {
            modes: ModeController::new(),
            italian_phrase: String::new(),
            dialect_phrase: String::new(),
            dialect: default_dialect.into(),
            output: Output::default(),
            copy_translation: CopyButton::default(),
            copy_explanation: CopyButton::default(),
            alert: None,
            latest_seq: 0,
        }
    }

    pub fn modes(&self) -> &ModeController {
        &self.modes
    }

    pub fn mode(&self) -> Mode {
        self.modes.mode()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.modes.set_mode(mode);
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    /// Validate the visible form and, if it holds a phrase, switch the output
    /// to its pending state and hand back the prompt to send.
    ///
    /// Returns `None` when the phrase is empty; the validation message is
    /// shown instead and nothing should be sent.
    pub fn begin_submission(&mut self) -> Option<Submission> {
        let mode = self.modes.mode();
        let phrase = match mode {
            Mode::ItalianToDialect => &self.italian_phrase,
            Mode::DialectToItalian => &self.dialect_phrase,
        };
        match TranslationRequest::new(mode, phrase, &self.dialect) {
            Ok(request) => {
                self.latest_seq += 1;
                self.output.show_pending();
                info!(seq = self.latest_seq, ?mode, chars = request.phrase().chars().count(), "submitting translation");
                Some(Submission {
                    seq: self.latest_seq,
                    prompt: build_prompt(&request),
                })
            }
            Err(err) => {
                // Still counts as the latest action, so pending replies are stale.
                self.latest_seq += 1;
                debug!(?mode, "empty phrase, nothing submitted");
                self.output.show_validation(&err);
                None
            }
        }
    }

    /// Render a finished request. Replies to anything but the latest
    /// submission are dropped; returns whether the output changed.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if completion.seq != self.latest_seq {
            debug!(
                seq = completion.seq,
                latest = self.latest_seq,
                "discarding stale reply"
            );
            return false;
        }
        match &completion.result {
            Ok(raw) => {
                info!(seq = completion.seq, "translation received");
                self.output.show_reply(raw);
            }
            Err(err) => {
                warn!(seq = completion.seq, error = %err, "translation failed");
                self.output.show_failure(err);
            }
        }
        true
    }

    /// Copy the displayed text of `field`. Failures raise an alert.
    pub fn copy(
        &mut self,
        field: OutputField,
        clipboard: &mut dyn ClipboardWriter,
        now: Instant,
    ) -> CopyOutcome {
        let text = self.output.field(field);
        let button = match field {
            OutputField::Translation => &mut self.copy_translation,
            OutputField::Explanation => &mut self.copy_explanation,
        };
        let outcome = button.copy(text, clipboard, now);
        if let CopyOutcome::Failed(err) = &outcome {
            self.alert = Some(format!("Copia non riuscita: {err}"));
        }
        outcome
    }

    pub fn copy_button(&self, field: OutputField) -> &CopyButton {
        match field {
            OutputField::Translation => &self.copy_translation,
            OutputField::Explanation => &self.copy_explanation,
        }
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
