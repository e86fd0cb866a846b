use once_cell::sync::Lazy;
use regex::Regex;

// Lazy translation block, then a blank line (or end of text), then the
// explanation up to the end.
static SECTIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)TRADUZIONE\s*:\s*(.*?)(?:[\r\n]{2,}|$)SPIEGAZIONE\s*:\s*(.*)")
        .expect("sections regex is valid")
});

/// The two labelled parts of a model reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub translation: String,
    pub explanation: String,
}

/// Split a reply into translation and explanation.
///
/// Replies that do not follow the requested layout are not an error: the
/// whole text becomes the translation and the explanation stays empty.
pub fn split_sections(text: &str) -> Sections {
    match SECTIONS_RE.captures(text) {
        Some(caps) => Sections {
            translation: caps[1].trim().to_string(),
            explanation: caps[2].trim().to_string(),
        },
        None => {
            tracing::debug!("reply lacks section markers, using it as plain translation");
            Sections {
                translation: text.trim().to_string(),
                explanation: String::new(),
            }
        }
    }
}
