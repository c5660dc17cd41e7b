use serde::{Deserialize, Serialize};

use palavra_types::FormDraft;

pub const COUNT_MIN: u8 = 1;
pub const COUNT_MAX: u8 = 10;
pub const LENGTH_MIN: u8 = 3;
pub const LENGTH_MAX: u8 = 10;

pub const DEFAULT_COUNT: u8 = 10;
pub const DEFAULT_LENGTH: u8 = 6;

/// Languages the word provider serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    PtBr,
    En,
    Es,
    Fr,
}

impl Language {
    /// Wire code used in the provider query string
    pub fn code(&self) -> &'static str {
        match self {
            Language::PtBr => "pt-br",
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Parse a raw form value; empty or unknown input falls back to the default
    pub fn parse_or_default(raw: &str) -> Self {
        match raw.trim() {
            "pt-br" => Language::PtBr,
            "en" => Language::En,
            "es" => Language::Es,
            "fr" => Language::Fr,
            _ => Language::default(),
        }
    }

    pub fn all() -> [Language; 4] {
        [Language::PtBr, Language::En, Language::Es, Language::Fr]
    }
}

/// Saturating range restriction
pub fn clamp(value: u8, lo: u8, hi: u8) -> u8 {
    value.max(lo).min(hi)
}

/// Normalized request triple driving a fetch cycle.
///
/// Immutable value; submit and refresh both replace it wholesale, and every
/// replacement (equal-valued or not) starts a new fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSettings {
    pub count: u8,
    pub word_length: u8,
    pub language: Language,
}

impl Default for RequestSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            word_length: DEFAULT_LENGTH,
            language: Language::default(),
        }
    }
}

impl RequestSettings {
    /// Normalize a raw form draft into settings.
    ///
    /// Unparseable numbers take the documented default, out-of-range values
    /// saturate to the nearest bound. Never fails; clamping is silent.
    pub fn from_draft(draft: &FormDraft) -> Self {
        let count = draft
            .count
            .trim()
            .parse::<u8>()
            .unwrap_or(DEFAULT_COUNT);
        let length = draft
            .length
            .trim()
            .parse::<u8>()
            .unwrap_or(DEFAULT_LENGTH);

        Self {
            count: clamp(count, COUNT_MIN, COUNT_MAX),
            word_length: clamp(length, LENGTH_MIN, LENGTH_MAX),
            language: Language::parse_or_default(&draft.language),
        }
    }

    /// String mirror for writing normalized values back into the form
    pub fn to_draft(&self) -> FormDraft {
        FormDraft {
            count: self.count.to_string(),
            length: self.word_length.to_string(),
            language: self.language.code().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(count: &str, length: &str, language: &str) -> FormDraft {
        FormDraft {
            count: count.into(),
            length: length.into(),
            language: language.into(),
        }
    }

    #[test]
    fn clamp_saturates_and_is_idempotent() {
        for n in 0..=u8::MAX {
            let once = clamp(n, COUNT_MIN, COUNT_MAX);
            assert!((COUNT_MIN..=COUNT_MAX).contains(&once));
            assert_eq!(clamp(once, COUNT_MIN, COUNT_MAX), once);
        }
    }

    #[test]
    fn unparseable_draft_takes_defaults() {
        let settings = RequestSettings::from_draft(&draft("abc", "abc", ""));
        assert_eq!(settings.count, 10);
        assert_eq!(settings.word_length, 6);
        assert_eq!(settings.language, Language::PtBr);
    }

    #[test]
    fn out_of_range_saturates_both_bounds_independently() {
        let settings = RequestSettings::from_draft(&draft("0", "20", "en"));
        assert_eq!(settings.count, 1);
        assert_eq!(settings.word_length, 10);
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn negative_count_parses_as_default_then_clamps() {
        // u8 parse rejects "-3", so the default applies, not a clamp to 1
        let settings = RequestSettings::from_draft(&draft("-3", "5", "fr"));
        assert_eq!(settings.count, 10);
        assert_eq!(settings.word_length, 5);
        assert_eq!(settings.language, Language::Fr);
    }

    #[test]
    fn all_round_trips_through_wire_codes() {
        let all = Language::all();
        assert_eq!(all.len(), 4);
        for lang in all {
            assert_eq!(Language::parse_or_default(lang.code()), lang);
        }
    }

    #[test]
    fn unknown_language_falls_back() {
        assert_eq!(Language::parse_or_default("de"), Language::PtBr);
        assert_eq!(Language::parse_or_default("  es "), Language::Es);
    }

    #[test]
    fn normalized_draft_round_trips() {
        let settings = RequestSettings::from_draft(&draft("7", "4", "es"));
        let echoed = settings.to_draft();
        assert_eq!(echoed.count, "7");
        assert_eq!(echoed.length, "4");
        assert_eq!(echoed.language, "es");
        assert_eq!(RequestSettings::from_draft(&echoed), settings);
    }
}
