//! Text shown in the two read-only output regions.

use crate::error::{RemoteError, ValidationError};
use crate::parser::{split_sections, Sections};

pub const PENDING_TRANSLATION: &str = "⏳ Sto generando la traduzione...";
pub const PENDING_EXPLANATION: &str = "…";
pub const EMPTY_PLACEHOLDER: &str = "—";
pub const FAILURE_MESSAGE: &str = "Si è verificato un errore nel generare la traduzione.";

/// Which output region a control refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputField {
    Translation,
    Explanation,
}

impl OutputField {
    pub const ALL: [OutputField; 2] = [OutputField::Translation, OutputField::Explanation];

    pub fn title(self) -> &'static str {
        match self {
            OutputField::Translation => "Traduzione",
            OutputField::Explanation => "Spiegazione",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    translation: String,
    explanation: String,
}

impl Output {
    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn field(&self, field: OutputField) -> &str {
        match field {
            OutputField::Translation => &self.translation,
            OutputField::Explanation => &self.explanation,
        }
    }

    /// Immediate feedback while the proxy call is in flight.
    pub fn show_pending(&mut self) {
        self.set(PENDING_TRANSLATION, PENDING_EXPLANATION);
    }

    pub fn show_validation(&mut self, err: &ValidationError) {
        self.set(err.to_string(), String::new());
    }

    pub fn show_reply(&mut self, raw: &str) {
        let Sections {
            translation,
            explanation,
        } = split_sections(raw);
        self.set(or_placeholder(translation), or_placeholder(explanation));
    }

    pub fn show_failure(&mut self, err: &RemoteError) {
        self.set(FAILURE_MESSAGE, err.to_string());
    }

    fn set(&mut self, translation: impl Into<String>, explanation: impl Into<String>) {
        self.translation = translation.into();
        self.explanation = explanation.into();
    }
}

fn or_placeholder(s: String) -> String {
    if s.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_without_explanation_gets_placeholder() {
        let mut out = Output::default();
        out.show_reply("Comme staje?");
        assert_eq!(out.translation(), "Comme staje?");
        assert_eq!(out.explanation(), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn empty_reply_gets_placeholders_in_both_slots() {
        let mut out = Output::default();
        out.show_reply("   ");
        assert_eq!(out.field(OutputField::Translation), EMPTY_PLACEHOLDER);
        assert_eq!(out.field(OutputField::Explanation), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn failure_shows_generic_message_and_detail() {
        let mut out = Output::default();
        out.show_pending();
        out.show_failure(&RemoteError::status(500, "server overloaded"));
        assert_eq!(out.translation(), FAILURE_MESSAGE);
        assert_eq!(out.explanation(), "server overloaded");
    }

    #[test]
    fn validation_clears_explanation() {
        let mut out = Output::default();
        out.show_reply("TRADUZIONE: a\n\nSPIEGAZIONE: b");
        out.show_validation(&ValidationError);
        assert_eq!(out.translation(), "Per favore inserisci una frase da tradurre.");
        assert_eq!(out.explanation(), "");
    }
}
