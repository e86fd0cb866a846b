use std::fmt;

/// Translation direction. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    ItalianToDialect,
    DialectToItalian,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::ItalianToDialect, Mode::DialectToItalian];

    /// Label of the toggle pill for this mode.
    pub fn label(self) -> &'static str {
        match self {
            Mode::ItalianToDialect => "Italiano → Dialetto",
            Mode::DialectToItalian => "Dialetto → Italiano",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tracks which input form is shown and which toggle is highlighted.
///
/// Both follow from a single field, so "one visible form, one active
/// indicator" cannot be broken by a partial update.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    active: Mode,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if self.active != mode {
            tracing::debug!(from = ?self.active, to = ?mode, "mode switched");
        }
        self.active = mode;
    }

    pub fn mode(&self) -> Mode {
        self.active
    }

    pub fn is_form_visible(&self, form: Mode) -> bool {
        self.active == form
    }

    pub fn is_indicator_active(&self, indicator: Mode) -> bool {
        self.active == indicator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_forms(c: &ModeController) -> usize {
        Mode::ALL.iter().filter(|m| c.is_form_visible(**m)).count()
    }

    fn active_indicators(c: &ModeController) -> usize {
        Mode::ALL.iter().filter(|m| c.is_indicator_active(**m)).count()
    }

    #[test]
    fn starts_in_italian_to_dialect() {
        let c = ModeController::new();
        assert_eq!(c.mode(), Mode::ItalianToDialect);
        assert!(c.is_form_visible(Mode::ItalianToDialect));
        assert!(!c.is_form_visible(Mode::DialectToItalian));
    }

    #[test]
    fn set_mode_twice_is_idempotent() {
        let mut c = ModeController::new();
        c.set_mode(Mode::DialectToItalian);
        c.set_mode(Mode::DialectToItalian);
        assert_eq!(c.mode(), Mode::DialectToItalian);
        assert_eq!(visible_forms(&c), 1);
        assert_eq!(active_indicators(&c), 1);
        assert!(c.is_indicator_active(Mode::DialectToItalian));
    }

    #[test]
    fn toggling_back_restores_first_form() {
        let mut c = ModeController::new();
        c.set_mode(Mode::DialectToItalian);
        c.set_mode(Mode::ItalianToDialect);
        assert!(c.is_form_visible(Mode::ItalianToDialect));
        assert!(!c.is_indicator_active(Mode::DialectToItalian));
        assert_eq!(visible_forms(&c), 1);
    }
}
