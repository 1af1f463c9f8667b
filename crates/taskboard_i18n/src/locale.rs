/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Trims whitespace.
/// - Converts `_` to `-` (`fr_FR` -> `fr-FR`).
/// - Drops encoding and modifier suffixes (`fr_FR.UTF-8@euro` -> `fr-FR`).
pub fn normalize_locale(s: &str) -> String {
    let s = s.trim();
    let s = s.split_once('.').map_or(s, |(tag, _)| tag);
    let s = s.split_once('@').map_or(s, |(tag, _)| tag);
    s.trim().replace('_', "-")
}

/// Candidate tags to try when matching a requested locale against a closed
/// set of available ones.
///
/// - `fr-CA` -> `["fr-CA", "fr"]`
/// - `en` -> `["en"]`
pub fn locale_candidates(locale: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    if l.is_empty() {
        return Vec::new();
    }

    let mut out = vec![l.clone()];
    if let Some((lang, _)) = l.split_once('-') {
        if !lang.is_empty() {
            out.push(lang.to_string());
        }
    }
    out
}

/// Lookup order for a resolution: the active locale, then the fallback.
///
/// Deduplicated, so `("en", "en")` yields a single step.
pub fn resolution_chain<'a>(active: &'a str, fallback: &'a str) -> Vec<&'a str> {
    if active == fallback {
        vec![active]
    } else {
        vec![active, fallback]
    }
}
