//! Case transformations
//!
//! Pure functions of their input text; the `/transform` endpoint applies one
//! of these after recording the text in the aggregate.

/// Supported text transformations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transformation {
    Uppercase,
    Lowercase,
    Titlecase,
}

impl Transformation {
    /// Parse a transformation name as it appears in requests
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "uppercase" => Some(Self::Uppercase),
            "lowercase" => Some(Self::Lowercase),
            "titlecase" => Some(Self::Titlecase),
            _ => None,
        }
    }

    /// Apply the transformation to `text`
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Uppercase => text.to_uppercase(),
            Self::Lowercase => text.to_lowercase(),
            Self::Titlecase => title_case(text),
        }
    }
}

/// Uppercase every letter that follows a non-letter boundary
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for ch in text.chars() {
        if ch.is_alphabetic() && !prev_is_letter {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_letter = ch.is_alphabetic();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(
            Transformation::parse("uppercase"),
            Some(Transformation::Uppercase)
        );
        assert_eq!(
            Transformation::parse("lowercase"),
            Some(Transformation::Lowercase)
        );
        assert_eq!(
            Transformation::parse("titlecase"),
            Some(Transformation::Titlecase)
        );
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(Transformation::parse("reverse"), None);
        assert_eq!(Transformation::parse("UPPERCASE"), None);
        assert_eq!(Transformation::parse(""), None);
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(
            Transformation::Uppercase.apply("Hello, World!"),
            "HELLO, WORLD!"
        );
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(
            Transformation::Lowercase.apply("Hello, World!"),
            "hello, world!"
        );
    }

    #[test]
    fn test_titlecase_capitalizes_word_starts() {
        assert_eq!(
            Transformation::Titlecase.apply("hello world of strings"),
            "Hello World Of Strings"
        );
    }

    #[test]
    fn test_titlecase_boundary_is_any_non_letter() {
        assert_eq!(Transformation::Titlecase.apply("foo-bar_baz"), "Foo-Bar_Baz");
        assert_eq!(Transformation::Titlecase.apply("it's"), "It'S");
    }

    #[test]
    fn test_titlecase_empty() {
        assert_eq!(Transformation::Titlecase.apply(""), "");
    }
}
