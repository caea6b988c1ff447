/// Turns a title into a URL slug: lowercase, runs of anything outside
/// `[a-z0-9]` collapse into a single hyphen, no hyphen at either end.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Slug to store for a post: the author's slug when it survives
/// normalisation, otherwise one derived from the title.
pub fn resolve_slug(requested: &str, title: &str) -> String {
    let requested = slugify(requested);
    if requested.is_empty() {
        slugify(title)
    } else {
        requested
    }
}
