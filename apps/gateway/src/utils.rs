//! Gateway utility functions.

/// Expand `${VAR}` patterns in a string with environment variable values.
///
/// Unknown variables are replaced with an empty string.
pub fn expand_env_vars(input: &str) -> String {
    expand_vars_with(input, |name| std::env::var(name).ok())
}

/// Expand `${VAR}` patterns using `lookup` to resolve each name.
///
/// A `$` not followed by `{` is kept as is. An unterminated `${` swallows
/// the rest of the input as the variable name.
pub fn expand_vars_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' || chars.peek() != Some(&'{') {
            result.push(ch);
            continue;
        }

        chars.next();
        let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
        if let Some(value) = lookup(&name) {
            result.push_str(&value);
        }
    }

    result
}
