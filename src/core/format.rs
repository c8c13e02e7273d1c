use crate::models::NOT_SPECIFIED;

/// Turn a raw quiz answer into display text
///
/// `"early-bird"` becomes `"Early Bird"`; the `"Not specified"` placeholder
/// is returned verbatim.
pub fn format_preference(raw: &str) -> String {
    if raw == NOT_SPECIFIED {
        return raw.to_string();
    }

    raw.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
