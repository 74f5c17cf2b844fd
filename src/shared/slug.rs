/// Derives a URL slug: lowercase ASCII alphanumerics separated by single dashes.
///
/// `"CSE - Cyber Security"` becomes `"cse-cyber-security"`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Uses the explicit slug when given (normalised), otherwise derives one from `fallback`.
pub fn slug_or_derive(explicit: Option<&str>, fallback: &str) -> String {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => slugify(s),
        None => slugify(fallback),
    }
}
