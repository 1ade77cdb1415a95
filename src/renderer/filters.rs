use minijinja::Value;

// Re-export the case conversion functions registered as filters
pub use cruet::case::{
    camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
    screaming_snake::to_screaming_snake_case, snake::to_snake_case,
};

/// Fallback filter: `{{ project_description | default("No description") }}`.
///
/// Returns `fallback` when `value` is undefined, none or the empty string,
/// and `value` otherwise. Without a fallback the empty string is used.
pub fn default_filter(value: &Value, fallback: Option<Value>) -> Value {
    let is_missing =
        value.is_undefined() || value.is_none() || value.as_str() == Some("");
    if is_missing {
        fallback.unwrap_or_else(|| Value::from(""))
    } else {
        value.clone()
    }
}

/// Turns an arbitrary name into a valid C++ identifier.
///
/// Hyphens become underscores and a leading underscore is added when the
/// first character is neither a letter nor `_`. Empty input is returned
/// unchanged.
///
/// # Examples
/// ```
/// use kiln::renderer::filters::to_cpp_identifier;
///
/// assert_eq!(to_cpp_identifier("my-project"), "my_project");
/// assert_eq!(to_cpp_identifier("123abc"), "_123abc");
/// ```
pub fn to_cpp_identifier(value: &str) -> String {
    let result = value.replace('-', "_");
    match result.chars().next() {
        Some(first) if !(first.is_alphabetic() || first == '_') => format!("_{result}"),
        _ => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_replaces_hyphens() {
        assert_eq!(to_cpp_identifier("my-project"), "my_project");
        assert_eq!(to_cpp_identifier("a-b-c"), "a_b_c");
    }

    #[test]
    fn identifier_prefixes_invalid_first_character() {
        assert_eq!(to_cpp_identifier("123abc"), "_123abc");
        assert_eq!(to_cpp_identifier("-lead"), "_lead");
        assert_eq!(to_cpp_identifier(".hidden"), "_.hidden");
    }

    #[test]
    fn identifier_keeps_empty_input() {
        assert_eq!(to_cpp_identifier(""), "");
    }

    #[test]
    fn identifier_is_idempotent_on_valid_identifiers() {
        for input in ["Widgets", "_private", "my_project", "snake_case_42", "_123abc"] {
            let once = to_cpp_identifier(input);
            assert_eq!(once, input);
            assert_eq!(to_cpp_identifier(&once), once);
        }
        for input in ["my-project", "9lives", "-x"] {
            let once = to_cpp_identifier(input);
            assert_eq!(to_cpp_identifier(&once), once);
        }
    }

    #[test]
    fn default_filter_uses_fallback_for_missing_values() {
        let fallback = Some(Value::from("x"));
        assert_eq!(default_filter(&Value::UNDEFINED, fallback.clone()), Value::from("x"));
        assert_eq!(default_filter(&Value::from(()), fallback.clone()), Value::from("x"));
        assert_eq!(default_filter(&Value::from(""), fallback), Value::from("x"));
    }

    #[test]
    fn default_filter_keeps_present_values() {
        assert_eq!(default_filter(&Value::from("y"), Some(Value::from("x"))), Value::from("y"));
        assert_eq!(default_filter(&Value::from(false), Some(Value::from("x"))), Value::from(false));
        assert_eq!(default_filter(&Value::from(0), Some(Value::from("x"))), Value::from(0));
    }

    #[test]
    fn default_filter_without_fallback_is_empty_string() {
        assert_eq!(default_filter(&Value::UNDEFINED, None), Value::from(""));
    }
}
