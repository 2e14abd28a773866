//! Translation between managed-language and native-language names.

use std::collections::HashMap;

use bindoc_registry::strip_keyword;

/// Native operator names keyed by managed operator-method name.
const OPERATORS: &[(&str, &str)] = &[
    ("assign", "operator="),
    ("assign_plus", "operator+="),
    ("assign_minus", "operator-="),
    ("assign_multiply", "operator*="),
    ("assign_divide", "operator/="),
    ("call", "operator()"),
    ("decrement", "operator--"),
    ("dereference", "operator*"),
    ("increment", "operator++"),
    ("==", "operator=="),
    ("!=", "operator!="),
    ("+", "operator+"),
    ("-", "operator-"),
    ("*", "operator*"),
    ("/", "operator/"),
    ("%", "operator%"),
    ("&", "operator&"),
    ("|", "operator|"),
    ("^", "operator^"),
    ("<", "operator<"),
    (">", "operator>"),
    ("<=", "operator<="),
    (">=", "operator>="),
    ("<<", "operator<<"),
    (">>", "operator>>"),
    ("!", "operator!"),
    ("[]", "operator[]"),
    ("[]=", "operator[]"),
];

/// Native operator name for a managed operator-method name.
#[must_use]
pub fn operator_name(managed: &str) -> Option<&'static str> {
    OPERATORS
        .iter()
        .find(|(name, _)| *name == managed)
        .map(|(_, native)| *native)
}

/// Convert `snake_case` to camel case.
///
/// The character after each underscore is upper-cased and the underscore
/// dropped; the first character is upper- or lower-cased per `upper_first`.
/// All other characters are kept verbatim.
#[must_use]
pub fn camelize(name: &str, upper_first: bool) -> String {
    let mut result = String::with_capacity(name.len());
    let mut chars = name.chars();
    while let Some(c) = chars.next() {
        if c == '_' {
            match chars.next() {
                Some(next) => result.extend(next.to_uppercase()),
                None => result.push('_'),
            }
        } else {
            result.push(c);
        }
    }

    let mut chars = result.chars();
    match chars.next() {
        Some(first) if upper_first => first.to_uppercase().chain(chars).collect(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => result,
    }
}

/// Upper-case the first character, keeping the rest verbatim.
///
/// Unlike a general capitalize this never lowercases, so `IO` stays `IO`.
#[must_use]
pub fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Bare native type name: `enum`/`union` prefixes and template arguments removed.
#[must_use]
pub fn bare_type_name(native: &str) -> String {
    let name = native.trim();
    let name = ["enum", "union"]
        .into_iter()
        .find_map(|keyword| strip_keyword(name, keyword))
        .unwrap_or(name);
    strip_template_args(name)
}

/// Remove everything from the first `<` to the last `>`.
#[must_use]
pub fn strip_template_args(name: &str) -> String {
    match (name.find('<'), name.rfind('>')) {
        (Some(open), Some(close)) if open < close => {
            format!("{}{}", &name[..open], &name[close + 1..])
                .trim()
                .to_owned()
        }
        (Some(open), _) => name[..open].trim().to_owned(),
        _ => name.trim().to_owned(),
    }
}

/// Candidate native names for a managed method name, in priority order.
///
/// 1. The per-type override, if any.
/// 2. The operator name, if the managed name is an operator method.
/// 3. For predicates (`empty?`): lower camel, upper camel and `is` + upper camel
///    of the name without `?`.
/// 4. Otherwise: the literal name, lower camel and upper camel.
///
/// Duplicates are dropped, keeping the first occurrence.
#[must_use]
pub fn method_candidates(
    managed: &str,
    overrides: Option<&HashMap<String, String>>,
) -> Vec<String> {
    let mut candidates = Vec::new();

    if let Some(native) = overrides.and_then(|o| o.get(managed)) {
        candidates.push(native.clone());
    }
    if let Some(native) = operator_name(managed) {
        candidates.push(native.to_owned());
    }
    if let Some(stem) = managed.strip_suffix('?') {
        candidates.push(camelize(stem, false));
        candidates.push(camelize(stem, true));
        candidates.push(format!("is{}", camelize(stem, true)));
    } else {
        candidates.push(managed.to_owned());
        candidates.push(camelize(managed, false));
        candidates.push(camelize(managed, true));
    }

    dedup_in_order(candidates)
}

/// Candidate native names for an attribute: the literal name, then lower camel.
#[must_use]
pub fn attribute_candidates(managed: &str) -> Vec<String> {
    let name = managed.trim_end_matches('=');
    dedup_in_order(vec![name.to_owned(), camelize(name, false)])
}

fn dedup_in_order(candidates: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !result.contains(&candidate) {
            result.push(candidate);
        }
    }
    result
}
