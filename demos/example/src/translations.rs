//! Translations for the example app screenshots.

const DEFAULT_LANGUAGE: &str = "en-US";

const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("en-US", "badge", "New"),
    ("en-US", "title", "Notely"),
    ("en-US", "subtitle", "Notes that organize themselves"),
    ("en-US", "feature1", "Smart Folders"),
    ("en-US", "feature1Desc", "Notes sort themselves by topic"),
    ("en-US", "feature2", "Instant Sync"),
    ("en-US", "feature2Desc", "Every device, always up to date"),
    ("en-US", "feature3", "Works Offline"),
    ("en-US", "feature3Desc", "Full access without a connection"),
    ("de-DE", "badge", "Neu"),
    ("de-DE", "title", "Notely"),
    ("de-DE", "subtitle", "Notizen, die sich selbst organisieren"),
    ("de-DE", "feature1", "Smarte Ordner"),
    ("de-DE", "feature1Desc", "Notizen sortieren sich nach Thema"),
    ("de-DE", "feature2", "Sofort-Sync"),
    ("de-DE", "feature2Desc", "Jedes Gerät, immer aktuell"),
    ("de-DE", "feature3", "Offline nutzbar"),
    ("de-DE", "feature3Desc", "Voller Zugriff ohne Verbindung"),
];

/// Looks up a translation for a language and key.
///
/// Falls back to the default language key-by-key, then to the key itself,
/// so an out-of-set language still renders a complete screen.
pub fn t(language: &str, key: &str) -> String {
    lookup(language, key)
        .or_else(|| lookup(DEFAULT_LANGUAGE, key))
        .unwrap_or(key)
        .to_string()
}

fn lookup(language: &str, key: &str) -> Option<&'static str> {
    TRANSLATIONS
        .iter()
        .find(|(lang, k, _)| *lang == language && *k == key)
        .map(|(_, _, value)| *value)
}
