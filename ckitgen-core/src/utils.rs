//! Identifier casing helpers.

/// Upper-case the first character of `s`, leaving the rest untouched
/// (e.g., "rawValue" -> "RawValue").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Join word fragments into lowerCamelCase (e.g., ["foo", "bar"] -> "fooBar").
///
/// The first fragment is used verbatim, every later fragment is capitalized.
pub fn camel<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for fragment in fragments {
        let fragment = fragment.as_ref();
        if result.is_empty() {
            result.push_str(fragment);
        } else {
            result.push_str(&capitalize(fragment));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("foo"), "Foo");
        assert_eq!(capitalize("Foo"), "Foo");
        assert_eq!(capitalize("rawValue"), "RawValue");
        assert_eq!(capitalize("f"), "F");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn test_capitalize_leaves_rest_untouched() {
        assert_eq!(capitalize("fOO_bar"), "FOO_bar");
        assert_eq!(capitalize("_private"), "_private");
        assert_eq!(capitalize("9lives"), "9lives");
    }

    #[test]
    fn test_camel() {
        assert_eq!(camel(Vec::<String>::new()), "");
        assert_eq!(camel(["foo"]), "foo");
        assert_eq!(camel(["foo", "bar", "baz"]), "fooBarBaz");
        assert_eq!(camel(["mutable", "raw", "pointer"]), "mutableRawPointer");
    }

    #[test]
    fn test_camel_keeps_first_fragment_verbatim() {
        assert_eq!(camel(["Foo", "bar"]), "FooBar");
    }

    #[test]
    fn test_camel_skips_leading_empty_fragments() {
        // An empty prefix leaves nothing to join onto, so the next fragment leads
        assert_eq!(camel(["", "foo", "bar"]), "fooBar");
        assert_eq!(camel(["foo", "", "bar"]), "fooBar");
    }

    #[test]
    fn test_camel_owned_strings() {
        let fragments = vec!["read".to_string(), "only".to_string()];
        assert_eq!(camel(&fragments), "readOnly");
    }
}
