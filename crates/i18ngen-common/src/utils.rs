//! Naming helpers shared by the compiler and the emitters.

/// Converts `snake_case` to `CamelCase` (e.g. `user_name` -> `UserName`).
///
/// Only the first character of each `_`-separated segment is uppercased;
/// the remainder keeps its authored case, so `userID` stays `UserID`.
pub fn to_camel_case(input: &str) -> String {
    input
        .split('_')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect()
}

/// Uppercases the first character of `input`.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts `CamelCase` or `camelCase` to `snake_case`.
///
/// Acronym runs stay together: `HTTPStatus` -> `http_status`.
pub fn to_snake_case(input: &str) -> String {
    separate_words(input, '_')
}

/// Converts `CamelCase` or `snake_case` to `kebab-case`.
pub fn to_kebab_case(input: &str) -> String {
    separate_words(input, '-')
}

fn separate_words(input: &str, separator: char) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            if !out.is_empty() && !out.ends_with(separator) {
                out.push(separator);
            }
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !out.ends_with(separator) {
                out.push(separator);
            }
        }

        out.extend(c.to_lowercase());
    }

    out.trim_end_matches(separator).to_string()
}

/// Returns true when `name` matches `^[A-Za-z_][A-Za-z0-9_]*$`.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Returns true when the first character of `input` is an ASCII digit.
pub fn starts_with_digit(input: &str) -> bool {
    input.chars().next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user_name"), "UserName");
        assert_eq!(to_camel_case("email_address"), "EmailAddress");
        assert_eq!(to_camel_case("entity"), "Entity");
        assert_eq!(to_camel_case("from_location"), "FromLocation");
        assert_eq!(to_camel_case("userID"), "UserID");
        assert_eq!(to_camel_case("__double__under"), "DoubleUnder");
        assert_eq!(to_camel_case(""), "");
        assert_eq!(to_camel_case("1st_item"), "1stItem");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("EntityFrom"), "entity_from");
        assert_eq!(to_snake_case("entityFrom"), "entity_from");
        assert_eq!(to_snake_case("HTTPStatus"), "http_status");
        assert_eq!(to_snake_case("Reason"), "reason");
        assert_eq!(to_snake_case("Item2Name"), "item2_name");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("EntityNotFound"), "entity-not-found");
        assert_eq!(to_kebab_case("Msg404Error"), "msg404-error");
        assert_eq!(to_kebab_case("user_created"), "user-created");
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("entity"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("item_2"));

        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("2fast"));
        assert!(!is_valid_identifier("with-dash"));
        assert!(!is_valid_identifier("with space"));
        assert!(!is_valid_identifier("ユーザー"));
    }

    #[test]
    fn test_starts_with_digit() {
        assert!(starts_with_digit("404_not_found"));
        assert!(!starts_with_digit("not_found"));
        assert!(!starts_with_digit(""));
    }
}
