//! Shared string utilities for code generation.

/// Split an identifier into its words.
///
/// Words are separated by any non-alphanumeric character, by a lower-to-upper
/// case change (`userName` -> `user`, `Name`), by the end of an acronym
/// (`HTTPServer` -> `HTTP`, `Server`) and by letter/digit changes
/// (`get2fa` -> `get`, `2`, `fa`).
pub fn words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()))
                || (prev.is_ascii_digit() != c.is_ascii_digit());
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Uppercase the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to camelCase (e.g., "create_user" -> "createUser")
pub fn to_camel_case(s: &str) -> String {
    words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let lower = word.to_lowercase();
            if i == 0 { lower } else { upper_first(&lower) }
        })
        .collect()
}

/// Convert a string to PascalCase (e.g., "create_user" -> "CreateUser")
pub fn to_pascal_case(s: &str) -> String {
    upper_first(&to_camel_case(s))
}

/// Quote a value as a single-quoted TypeScript/JavaScript string literal.
pub fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
