//! Static language table and code/name resolution

/// Code used to ask the endpoint to detect the source language
pub const AUTO: &str = "auto";

/// ISO 639-1 style codes accepted by the endpoint, with display names.
///
/// Table order is the display order used by `languages()`.
const LANGUAGE_CODES: &[(&str, &str)] = &[
    ("auto", "Automatic"),
    ("af", "Afrikaans"),
    ("sq", "Albanian"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("hy", "Armenian"),
    ("az", "Azerbaijani"),
    ("eu", "Basque"),
    ("be", "Belarusian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("bg", "Bulgarian"),
    ("ca", "Catalan"),
    ("ceb", "Cebuano"),
    ("ny", "Chichewa"),
    ("zh-cn", "Chinese (Simplified)"),
    ("zh-tw", "Chinese (Traditional)"),
    ("co", "Corsican"),
    ("hr", "Croatian"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("nl", "Dutch"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("et", "Estonian"),
    ("tl", "Filipino"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("fy", "Frisian"),
    ("gl", "Galician"),
    ("ka", "Georgian"),
    ("de", "German"),
    ("el", "Greek"),
    ("gu", "Gujarati"),
    ("ht", "Haitian Creole"),
    ("ha", "Hausa"),
    ("haw", "Hawaiian"),
    ("iw", "Hebrew"),
    ("hi", "Hindi"),
    ("hmn", "Hmong"),
    ("hu", "Hungarian"),
    ("is", "Icelandic"),
    ("ig", "Igbo"),
    ("id", "Indonesian"),
    ("ga", "Irish"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("jw", "Javanese"),
    ("kn", "Kannada"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("ko", "Korean"),
    ("ku", "Kurdish (Kurmanji)"),
    ("ky", "Kyrgyz"),
    ("lo", "Lao"),
    ("la", "Latin"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("lb", "Luxembourgish"),
    ("mk", "Macedonian"),
    ("mg", "Malagasy"),
    ("ms", "Malay"),
    ("ml", "Malayalam"),
    ("mt", "Maltese"),
    ("mi", "Maori"),
    ("mr", "Marathi"),
    ("mn", "Mongolian"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("no", "Norwegian"),
    ("ps", "Pashto"),
    ("fa", "Persian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ma", "Punjabi"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sm", "Samoan"),
    ("gd", "Scots Gaelic"),
    ("sr", "Serbian"),
    ("st", "Sesotho"),
    ("sn", "Shona"),
    ("sd", "Sindhi"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("so", "Somali"),
    ("es", "Spanish"),
    ("su", "Sundanese"),
    ("sw", "Swahili"),
    ("sv", "Swedish"),
    ("tg", "Tajik"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("cy", "Welsh"),
    ("xh", "Xhosa"),
    ("yi", "Yiddish"),
    ("yo", "Yoruba"),
    ("zu", "Zulu"),
];

/// Iterate over all `(code, name)` pairs in table order
pub fn languages() -> impl Iterator<Item = (&'static str, &'static str)> {
    LANGUAGE_CODES.iter().copied()
}

/// Number of entries in the language table
pub fn language_count() -> usize {
    LANGUAGE_CODES.len()
}

/// Resolve a language code or display name to its canonical code.
///
/// Matching is case-insensitive over the whole (trimmed) string: `"French"`,
/// `"fr"` and `"FR"` all resolve to `"fr"`, while `"Fre"` or `"Chinese"` do not
/// resolve at all.
pub fn check_language_code(target: impl AsRef<str>) -> Option<&'static str> {
    let target = target.as_ref().trim();
    if target.is_empty() {
        return None;
    }

    let lowered = target.to_lowercase();

    if let Some((code, _)) = LANGUAGE_CODES.iter().find(|(code, _)| *code == lowered) {
        return Some(code);
    }

    LANGUAGE_CODES
        .iter()
        .find(|(_, name)| name.to_lowercase() == lowered)
        .map(|(code, _)| *code)
}

/// Display name for a canonical code
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGE_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Whether `code` may be used as a translation target (`auto` may not)
pub fn is_valid_target(code: &str) -> bool {
    code != AUTO && language_name(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_resolves_to_itself() {
        for (code, _) in languages() {
            assert_eq!(check_language_code(code), Some(code));
            assert_eq!(check_language_code(code.to_uppercase()), Some(code));
        }
    }

    #[test]
    fn test_every_name_resolves_to_its_code() {
        for (code, name) in languages() {
            assert_eq!(check_language_code(name), Some(code), "name {}", name);
            assert_eq!(check_language_code(name.to_lowercase()), Some(code));
            assert_eq!(check_language_code(name.to_uppercase()), Some(code));
        }
    }

    #[test]
    fn test_name_lookup_is_case_insensitive() {
        assert_eq!(check_language_code("French"), Some("fr"));
        assert_eq!(check_language_code("fReNcH"), Some("fr"));
        assert_eq!(check_language_code("  german "), Some("de"));
        assert_eq!(check_language_code("chinese (traditional)"), Some("zh-tw"));
        assert_eq!(check_language_code("ZH-CN"), Some("zh-cn"));
    }

    #[test]
    fn test_rejects_unknown_and_partial_values() {
        assert_eq!(check_language_code(""), None);
        assert_eq!(check_language_code("   "), None);
        assert_eq!(check_language_code("xx"), None);
        assert_eq!(check_language_code("eng"), None);
        assert_eq!(check_language_code("Fre"), None);
        assert_eq!(check_language_code("Chinese"), None);
        assert_eq!(check_language_code("English language"), None);
        assert_eq!(check_language_code("zh"), None);
    }

    #[test]
    fn test_language_name_and_targets() {
        assert_eq!(language_name("es"), Some("Spanish"));
        assert_eq!(language_name("auto"), Some("Automatic"));
        assert_eq!(language_name("Spanish"), None);

        assert!(is_valid_target("es"));
        assert!(!is_valid_target(AUTO));
        assert!(!is_valid_target("xx"));
    }

    #[test]
    fn test_table_has_unique_codes_and_names() {
        let mut codes: Vec<_> = languages().map(|(c, _)| c).collect();
        let mut names: Vec<_> = languages().map(|(_, n)| n.to_lowercase()).collect();
        codes.sort_unstable();
        codes.dedup();
        names.sort_unstable();
        names.dedup();
        assert_eq!(codes.len(), language_count());
        assert_eq!(names.len(), language_count());
        assert_eq!(language_count(), 105);
    }
}
