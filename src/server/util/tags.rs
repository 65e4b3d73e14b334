/// Parses the `tags` multipart field into a tag list.
///
/// Clients send tags either as a JSON array string (`["rust","web"]`) or as
/// one or more plain text fields. Tags are trimmed and empty entries dropped.
///
/// # Arguments
/// - `values` - Raw values of every `tags` field in the form
///
/// # Returns
/// - `Vec<String>` - Normalized tag list
pub fn parse_tags(values: &[String]) -> Vec<String> {
    let mut tags = Vec::new();

    for value in values {
        let trimmed = value.trim();

        if trimmed.starts_with('[') {
            if let Ok(parsed) = serde_json::from_str::<Vec<String>>(trimmed) {
                tags.extend(parsed);
                continue;
            }
        }

        tags.push(trimmed.to_string());
    }

    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
