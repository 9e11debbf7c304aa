//! Token classification: deciding whether a word is a literal, a name, or invalid.

use crate::ast::Atom;

/// Names of the special forms.
pub const KEYWORDS: [&str; 4] = ["define", "if", "begin", "draw"];

pub const ARITHMETIC_OPERATORS: [&str; 4] = ["+", "-", "*", "/"];

/// Names of the built-in procedures that are not arithmetic operators.
pub const PROCEDURE_NAMES: [&str; 16] = [
    "<", "<=", ">", ">=", "=", "not", "and", "or", "log10", "pow", "point", "line", "arc", "sin",
    "cos", "arctan",
];

/// Single characters that parse as names but can never be evaluated.
pub const ILLEGAL_NAMES: [&str; 7] = ["@", "!", "#", "$", "%", "^", "&"];

pub const PI: &str = "pi";

/// Whether `name` belongs to the language itself and may not be bound by `define`.
pub fn is_reserved(name: &str) -> bool {
    KEYWORDS.contains(&name)
        || ARITHMETIC_OPERATORS.contains(&name)
        || PROCEDURE_NAMES.contains(&name)
        || name == PI
}

pub fn is_illegal(name: &str) -> bool {
    ILLEGAL_NAMES.contains(&name)
}

/// Turns a single word into an atom, or `None` if the word is not a valid token.
pub fn classify(token: &str) -> Option<Atom> {
    if token == "(" || token == ")" {
        return None;
    }
    if is_reserved(token) || is_illegal(token) {
        return Some(Atom::symbol(token));
    }
    if let Some(value) = boolean_literal(token) {
        return Some(Atom::Boolean(value));
    }
    if has_number_shape(token) {
        // a numeric-looking word that is not a float is rejected, not read as a symbol
        return token.parse().ok().map(Atom::Number);
    }
    if is_symbol(token) {
        return Some(Atom::symbol(token));
    }
    None
}

fn boolean_literal(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// A leading digit or `-`, then digits with at most one `.` and at most one `e`.
fn has_number_shape(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_digit() || ch == '-' => {}
        _ => return false,
    }

    let mut seen_point = false;
    let mut seen_exponent = false;
    for ch in chars {
        match ch {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            'e' if !seen_exponent => seen_exponent = true,
            _ => return false,
        }
    }
    true
}

fn is_symbol(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        None => false,
        Some(first) if first.is_ascii_digit() => false,
        Some(_) => !token.chars().any(char::is_whitespace),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_are_invalid() {
        assert_eq!(classify("("), None);
        assert_eq!(classify(")"), None);
    }

    #[test]
    fn test_names() {
        let names = vec![
            "+", "-", "*", "/", "define", "if", "begin", "draw", "<", "<=", ">", ">=", "=", "not",
            "and", "or", "log10", "pow", "point", "line", "arc", "sin", "cos", "arctan", "@", "!",
            "#", "$", "%", "^", "&", "pi", "a", "hello", "x1", "-a", "--5", ".5", "a@b",
        ];

        for name in names {
            assert_eq!(classify(name), Some(Atom::symbol(name)), "token: {name:?}");
        }
    }

    #[test]
    fn test_booleans() {
        let tests = vec![
            ("true", true),
            ("True", true),
            ("TRUE", true),
            ("false", false),
            ("False", false),
            ("fAlSe", false),
        ];

        for (token, expected) in tests {
            assert_eq!(classify(token), Some(Atom::Boolean(expected)));
        }
        assert_eq!(classify("tuer"), Some(Atom::symbol("tuer")));
    }

    #[test]
    fn test_numbers() {
        let tests = vec![
            ("1", 1.0),
            ("42", 42.0),
            ("-4", -4.0),
            ("13.2", 13.2),
            ("0.5", 0.5),
            ("1e3", 1000.0),
            ("-2.5e2", -250.0),
            ("7.", 7.0),
        ];

        for (token, expected) in tests {
            assert_eq!(classify(token), Some(Atom::Number(expected)), "token: {token:?}");
        }
    }

    #[test]
    fn test_invalid_tokens() {
        let tokens = vec!["0.5.10", "1ee1", "1abc", "12e5e", "1e", "-e", "4\tx", "1-2"];

        for token in tokens {
            assert_eq!(classify(token), None, "token: {token:?}");
        }
    }

    #[test]
    fn test_reserved_and_illegal() {
        assert!(is_reserved("define"));
        assert!(is_reserved("+"));
        assert!(is_reserved("arctan"));
        assert!(is_reserved("pi"));
        assert!(!is_reserved("a"));
        assert!(is_illegal("#"));
        assert!(!is_illegal("a#"));
    }
}
