//! English noun pluralizer.
//!
//! Count 1 leaves the noun alone; a small unchanging list and an irregular
//! table are consulted before the suffix rules. The rules only understand
//! ASCII nouns, which is all the exercise ever fed them.
//!
/// Nouns whose plural is the singular
const UNCHANGING: &[&str] = &["sheep", "deer", "fish"];

/// Irregular singular/plural pairs
const IRREGULARS: &[(&str, &str)] = &[
    ("goose", "geese"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("mouse", "mice"),
];

/// Format a count and the matching noun form, e.g. `3 churches`
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        return format!("{count} {noun}");
    }
    format!("{count} {}", plural_of(noun))
}

/// Plural form of a noun
pub fn plural_of(noun: &str) -> String {
    let lower = noun.to_ascii_lowercase();

    if UNCHANGING.contains(&lower.as_str()) {
        return noun.to_string();
    }
    if let Some((_, plural)) = IRREGULARS.iter().find(|(singular, _)| *singular == lower) {
        return (*plural).to_string();
    }

    let bytes = lower.as_bytes();
    match bytes.last().copied() {
        Some(b's' | b'x' | b'z' | b'h') => format!("{noun}es"),
        Some(b'y') if bytes.len() >= 2 && !b"aeiou".contains(&bytes[bytes.len() - 2]) => {
            format!("{}ies", &noun[..noun.len() - 1])
        }
        Some(b'f') => format!("{}ves", &noun[..noun.len() - 1]),
        Some(b'e') if lower.ends_with("fe") => format!("{}ves", &noun[..noun.len() - 2]),
        _ => format!("{noun}s"),
    }
}
