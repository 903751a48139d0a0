// SPDX-License-Identifier: MIT

//! Slug sanitization for model-suggested filenames

/// Substitute when the input strips down to nothing
pub const FALLBACK_SLUG: &str = "image";

/// Default cap on slug length
pub const DEFAULT_MAX_SLUG_LEN: usize = 40;

/// Sanitize arbitrary text into a lowercase snake_case slug.
///
/// Keeps lowercase ASCII letters, digits, and underscores; whitespace and
/// hyphen runs become a single underscore; everything else is dropped.
/// Empty results fall back to [`FALLBACK_SLUG`]. The final slug is hard
/// truncated to `max_length`, partial trailing words included.
pub fn sanitize_to_slug(text: &str, max_length: usize) -> String {
    let mut slug = squeeze(text);
    if slug.is_empty() {
        slug = FALLBACK_SLUG.to_string();
    }
    slug.truncate(max_length);
    slug
}

/// True when `text` contains nothing usable for a slug
pub fn sanitizes_to_nothing(text: &str) -> bool {
    squeeze(text).is_empty()
}

/// Core pass: lowercase, strip, collapse separators, trim underscores.
/// May return an empty string; the fallback is applied by the caller.
fn squeeze(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.trim().to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            slug.push(ch);
            pending_separator = false;
        } else if ch == '_' || ch == '-' || ch.is_whitespace() {
            pending_separator = true;
        }
        // Anything else is stripped without forcing a separator
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(text: &str) -> String {
        sanitize_to_slug(text, DEFAULT_MAX_SLUG_LEN)
    }

    #[test]
    fn test_basic_sanitization() {
        assert_eq!(slug("Cute Dog!! #1"), "cute_dog_1");
        assert_eq!(slug("Golden Retriever Puppy"), "golden_retriever_puppy");
    }

    #[test]
    fn test_separator_collapsing() {
        assert_eq!(slug("a  -  b___c"), "a_b_c");
        assert_eq!(slug("--hello--world--"), "hello_world");
    }

    #[test]
    fn test_no_edge_underscores() {
        assert_eq!(slug("  _trimmed_  "), "trimmed");
        assert_eq!(slug("!!!wow!!!"), "wow");
    }

    #[test]
    fn test_empty_input_falls_back() {
        assert_eq!(slug(""), FALLBACK_SLUG);
        assert_eq!(slug("   "), FALLBACK_SLUG);
        assert_eq!(slug("???!!!"), FALLBACK_SLUG);
    }

    #[test]
    fn test_hard_truncation() {
        let long = "a".repeat(100);
        let out = sanitize_to_slug(&long, 40);
        assert_eq!(out, "a".repeat(40));
    }

    #[test]
    fn test_output_invariants() {
        let inputs = [
            "Hello, World!",
            "fichier très spécial.png",
            "UPPER_CASE-WITH-DASHES",
            "  \t mixed \n whitespace  ",
            "1234!@#$%^&*()",
        ];
        for input in inputs {
            let out = slug(input);
            assert!(
                out.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "bad chars in {:?}",
                out
            );
            assert!(!out.starts_with('_') && !out.ends_with('_'));
            assert!(out.len() <= DEFAULT_MAX_SLUG_LEN);
            assert!(!out.is_empty());
        }
    }

    #[test]
    fn test_sanitizes_to_nothing() {
        assert!(sanitizes_to_nothing(""));
        assert!(sanitizes_to_nothing("   "));
        assert!(sanitizes_to_nothing("!!!"));
        assert!(!sanitizes_to_nothing("dog"));
        // "image" is a real suggestion, not an empty one
        assert!(!sanitizes_to_nothing("image"));
    }
}
