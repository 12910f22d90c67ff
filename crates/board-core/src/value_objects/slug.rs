//! URL slugs for messages, categories and tags

/// Used when a title has no characters that survive slugification
const FALLBACK_SLUG: &str = "untitled";

/// Turn free text into a lowercase, dash-separated slug of at most `max_len` bytes.
///
/// Non-ASCII input is transliterated. The result never starts or ends with `-`
/// and is never empty.
pub fn slugify(input: &str, max_len: usize) -> String {
    let mut slug = slug::slugify(input);

    if slug.len() > max_len {
        // slug output is ASCII, so any byte index is a char boundary
        slug.truncate(max_len);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
