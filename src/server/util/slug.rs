/// Derives a URL slug from a blog title.
///
/// Lowercases the title, drops everything except alphanumerics and spaces,
/// then collapses whitespace runs into single hyphens. Leading and trailing
/// hyphens are trimmed. Uniqueness against existing slugs is handled by the
/// blog service, not here.
///
/// # Arguments
/// - `title` - Blog title to slugify
///
/// # Returns
/// - `String` - Slug derived from the title (may be empty for all-symbol titles)
pub fn slugify(title: &str) -> String {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
