//! URL slug derivation
//!
//! A slug is the lowercase, hyphen-separated ASCII form of a display name,
//! usable as a URL path segment. Derivation is pure and deterministic, so a
//! name always maps to the same slug no matter how often it is recomputed.

/// Derive a URL-safe slug from a display name.
///
/// Runs of whitespace and other non-alphanumeric characters collapse into a
/// single hyphen; leading and trailing hyphens are stripped. ASCII letters
/// are lowercased and non-ASCII characters are treated as separators.
///
/// `"How to Tango with Django"` becomes `"how-to-tango-with-django"`.
///
/// A name with no alphanumeric characters at all yields an empty string;
/// callers that need a non-empty identifier must reject such names
/// (see [`Category::new`](crate::domain::Category::new)).
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_whitespace_with_hyphens() {
        assert_eq!(
            slugify("how do i create a slug in django"),
            "how-do-i-create-a-slug-in-django"
        );
    }

    #[test]
    fn test_lowercases_and_collapses_separators() {
        assert_eq!(slugify("Other   Frameworks"), "other-frameworks");
        assert_eq!(slugify("C++ / Rust!"), "c-rust");
    }

    #[test]
    fn test_strips_leading_and_trailing_separators() {
        assert_eq!(slugify("  Python  "), "python");
        assert_eq!(slugify("--django--"), "django");
    }

    #[test]
    fn test_symbol_only_name_yields_empty_slug() {
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_deterministic() {
        let name = "Tango With Django 2";
        assert_eq!(slugify(name), slugify(name));
    }
}
