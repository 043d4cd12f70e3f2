//! Naming engine shared by every generator.
//!
//! All functions are pure. Generators never transform identifiers on their
//! own; they call into this module so that a name chosen once is spelled the
//! same way in the storage schema, the runtime types and the validators.

/// Uppercase the first character, leaving the rest untouched (e.g., "orderItem" -> "OrderItem")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first character only (e.g., "OrderItem" -> "orderItem").
///
/// This is not a full camelCase normalization: separators are kept as-is.
pub fn to_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a string to snake_case (e.g., "OrderItem" -> "order_item")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Convert a string to kebab-case (e.g., "OrderItem" -> "order-item")
pub fn to_kebab_case(s: &str) -> String {
    to_snake_case(s).replace('_', "-")
}

/// Words whose plural form is identical to the singular.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("cactus", "cacti"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("half", "halves"),
    ("index", "indices"),
    ("knife", "knives"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("quiz", "quizzes"),
    ("shelf", "shelves"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("wife", "wives"),
    ("wolf", "wolves"),
    ("woman", "women"),
];

/// Words ending in a consonant + "o" that take "es".
const O_ES: &[&str] = &["echo", "hero", "potato", "tomato", "veto"];

/// Pluralize an English identifier (e.g., "category" -> "categories").
///
/// Compound identifiers only have their last word pluralized, so
/// "orderItem" becomes "orderItems" and "order_item" becomes "order_items".
/// The casing of the first letter of that word is preserved.
pub fn pluralize(word: &str) -> String {
    let split = last_word_start(word);
    let (prefix, last) = word.split_at(split);
    format!("{}{}", prefix, pluralize_word(last))
}

/// Byte offset where the last word of a compound identifier starts.
fn last_word_start(word: &str) -> usize {
    word.char_indices()
        .filter(|(i, c)| *i > 0 && c.is_uppercase())
        .map(|(i, _)| i)
        .chain(
            word.char_indices()
                .filter(|(_, c)| *c == '_' || *c == '-')
                .map(|(i, c)| i + c.len_utf8()),
        )
        .max()
        .filter(|i| *i < word.len())
        .unwrap_or(0)
}

fn pluralize_word(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return match_case(word, plural);
    }

    if ["ss", "sh", "ch", "x", "z", "us", "as"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return format!("{}es", word);
    }

    if lower.ends_with("is") {
        return format!("{}es", &word[..word.len() - 2]);
    }

    // Already plural (users, settings)
    if lower.ends_with('s') {
        return word.to_string();
    }

    if lower.ends_with('y') && !ends_with_vowel_then(&lower, 'y') {
        return format!("{}ies", &word[..word.len() - 1]);
    }

    if O_ES.contains(&lower.as_str()) {
        return format!("{}es", word);
    }

    format!("{}s", word)
}

fn ends_with_vowel_then(lower: &str, last: char) -> bool {
    let mut rev = lower.chars().rev();
    rev.next() == Some(last) && matches!(rev.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

fn match_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        capitalize(replacement)
    } else {
        replacement.to_string()
    }
}
