//! Identifier case conversion between snake_case and camelCase forms.

/// Converts an identifier to snake_case.
///
/// An underscore is inserted before each uppercase letter after the first
/// character and the result is lowercased, so the output never starts with an
/// underscore. Every uppercase letter gets its own separator, including runs
/// (`"HTTPServer"` becomes `"h_t_t_p_server"`). Empty input is returned
/// unchanged.
pub fn snake_case(src: &str) -> String {
    let mut out = String::with_capacity(src.len() + 4);

    for (i, c) in src.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }

    out
}

/// Converts a snake_case identifier to camelCase.
pub fn camel_case(src: &str) -> String {
    camelize(src, false)
}

/// Converts a snake_case identifier to UpperCamelCase.
pub fn upper_camel_case(src: &str) -> String {
    camelize(src, true)
}

/// Converts an identifier to UPPER_SNAKE_CASE.
pub fn upper_snake_case(src: &str) -> String {
    snake_case(src).to_uppercase()
}

fn camelize(src: &str, upper_first: bool) -> String {
    // An input without separators is already in a camel form; folding it to
    // lowercase would lose case information, so only snake inputs fold. This
    // keeps a second application the identity.
    let fold = src.contains('_');
    let mut upper_next = upper_first;
    let mut out = String::with_capacity(src.len());

    for c in src.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else if fold {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
