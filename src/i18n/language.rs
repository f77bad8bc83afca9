// src/i18n/language.rs
// DOCUMENTATION: Supported site languages
// PURPOSE: Map language codes and Accept-Language headers onto Language

use serde::Serialize;

/// Languages the site is translated into
/// English is the fallback for every missing translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::French];

    /// Two-letter code, also the locale directory name
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::French => "fr",
        }
    }

    /// Parse a code such as "fr", "FR" or "fr-CA"
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next()?.to_ascii_lowercase();
        Self::ALL.into_iter().find(|l| l.code() == primary)
    }

    /// Pick the best supported language from an Accept-Language header
    /// DOCUMENTATION: Entries are ranked by q-value, ties keep header order
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut ranked: Vec<(f32, &str)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let tag = parts.next()?.trim();
                if tag.is_empty() {
                    return None;
                }
                let quality = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);
                Some((quality, tag))
            })
            .filter(|(quality, _)| *quality > 0.0)
            .collect();

        // sort_by is stable so equal weights stay in header order
        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        ranked.into_iter().find_map(|(_, tag)| Self::from_code(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_regions_and_case() {
        assert_eq!(Language::from_code("fr"), Some(Language::French));
        assert_eq!(Language::from_code("FR-ca"), Some(Language::French));
        assert_eq!(Language::from_code("en_GB"), Some(Language::English));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_accept_language_respects_quality() {
        let lang = Language::from_accept_language("en;q=0.4, fr-FR;q=0.9, de");
        assert_eq!(lang, Some(Language::French));
    }

    #[test]
    fn test_accept_language_skips_unsupported() {
        let lang = Language::from_accept_language("de-DE, es;q=0.8, en;q=0.5");
        assert_eq!(lang, Some(Language::English));
    }

    #[test]
    fn test_accept_language_ignores_zero_quality() {
        assert_eq!(Language::from_accept_language("fr;q=0, de"), None);
        assert_eq!(Language::from_accept_language("*"), None);
    }
}
