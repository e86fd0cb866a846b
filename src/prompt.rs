//! Instruction prompts sent to the proxy.
//!
//! Both templates ask the model to answer in a fixed two-section layout,
//! which [`crate::parser::split_sections`] then takes apart.

use crate::error::ValidationError;
use crate::mode::Mode;

pub const TRANSLATION_MARKER: &str = "TRADUZIONE:";
pub const EXPLANATION_MARKER: &str = "SPIEGAZIONE:";

/// Dialects offered in the selector.
pub const DIALECTS: &[&str] = &[
    "napoletano",
    "siciliano",
    "romanesco",
    "milanese",
    "veneto",
    "genovese",
    "piemontese",
    "sardo",
    "barese",
    "calabrese",
    "friulano",
    "bolognese",
    "pugliese",
    "abruzzese",
    "toscano",
];

pub const DEFAULT_DIALECT: &str = "napoletano";

const FORMAT_TAIL: &str =
    "Rispondi nel formato esatto:\nTRADUZIONE:\n<testo>\n\nSPIEGAZIONE:\n<elenco puntato breve>";

/// One user submission, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationRequest {
    ItalianToDialect { phrase: String, dialect: String },
    DialectToItalian { phrase: String },
}

impl TranslationRequest {
    /// Validate the raw form input for `mode`.
    ///
    /// `dialect` is ignored for [`Mode::DialectToItalian`].
    pub fn new(mode: Mode, phrase: &str, dialect: &str) -> Result<Self, ValidationError> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Err(ValidationError);
        }
        let phrase = phrase.to_string();
        Ok(match mode {
            Mode::ItalianToDialect => TranslationRequest::ItalianToDialect {
                phrase,
                dialect: dialect.to_string(),
            },
            Mode::DialectToItalian => TranslationRequest::DialectToItalian { phrase },
        })
    }

    pub fn mode(&self) -> Mode {
        match self {
            TranslationRequest::ItalianToDialect { .. } => Mode::ItalianToDialect,
            TranslationRequest::DialectToItalian { .. } => Mode::DialectToItalian,
        }
    }

    pub fn phrase(&self) -> &str {
        match self {
            TranslationRequest::ItalianToDialect { phrase, .. }
            | TranslationRequest::DialectToItalian { phrase } => phrase,
        }
    }
}

pub fn build_prompt(request: &TranslationRequest) -> String {
    match request {
        TranslationRequest::ItalianToDialect { phrase, dialect } => format!(
            "Riformula questa frase \"{phrase}\" nel dialetto italiano \"{dialect}\" \
             nella maniera più accurata possibile. \
             Mostrami la frase tradotta e, in maniera separata dalla traduzione, \
             anche una breve spiegazione dei singoli termini tradotti. {FORMAT_TAIL}"
        ),
        TranslationRequest::DialectToItalian { phrase } => format!(
            "Riformula questa frase \"{phrase}\" scritta in dialetto in un italiano corretto \
             nella maniera più accurata e formale possibile. \
             Mostrami la frase in italiano corretto e, in maniera separata dalla traduzione, \
             anche una breve spiegazione dei singoli termini che hai tradotto dal dialetto \
             e dimmi da quale dialetto vengono. {FORMAT_TAIL}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_phrase_is_rejected() {
        assert_eq!(
            TranslationRequest::new(Mode::ItalianToDialect, " \n\t ", "sardo"),
            Err(ValidationError)
        );
        assert_eq!(
            TranslationRequest::new(Mode::DialectToItalian, "", ""),
            Err(ValidationError)
        );
    }

    #[test]
    fn phrase_is_trimmed_and_dialect_kept() {
        let req = TranslationRequest::new(Mode::ItalianToDialect, "  Come stai?  ", "napoletano")
            .unwrap();
        assert_eq!(
            req,
            TranslationRequest::ItalianToDialect {
                phrase: "Come stai?".into(),
                dialect: "napoletano".into(),
            }
        );
    }

    #[test]
    fn dialect_is_dropped_when_translating_to_italian() {
        let req = TranslationRequest::new(Mode::DialectToItalian, "Comme staje?", "napoletano")
            .unwrap();
        assert_eq!(req.mode(), Mode::DialectToItalian);
        assert!(!build_prompt(&req).contains("napoletano"));
    }

    #[test]
    fn templates_differ_but_share_the_reply_format() {
        let to_dialect = build_prompt(&TranslationRequest::ItalianToDialect {
            phrase: "ciao".into(),
            dialect: "veneto".into(),
        });
        let to_italian = build_prompt(&TranslationRequest::DialectToItalian {
            phrase: "ciao".into(),
        });
        assert_ne!(to_dialect, to_italian);
        for p in [&to_dialect, &to_italian] {
            assert!(p.contains("\"ciao\""));
            assert!(p.ends_with(FORMAT_TAIL));
            assert!(p.contains("<testo>\n\nSPIEGAZIONE:"));
        }
        assert!(to_italian.contains("da quale dialetto vengono"));
    }

    #[test]
    fn default_dialect_is_in_the_catalogue() {
        assert!(DIALECTS.contains(&DEFAULT_DIALECT));
    }
}
