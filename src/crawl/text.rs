// src/crawl/text.rs
// =============================================================================
// Small string helpers used by the generator and the workers.
//
// - clean_text: turn scraped text into a single trimmed line
// - resolve_link: turn an href from the seed page into a URL to fetch
//
// Both are pure functions, so they're easy to test in isolation.
// =============================================================================

// Trims the text and replaces every newline with a space
//
// Example:
//   "  a\nb\n  " -> "a b"
pub fn clean_text(text: &str) -> String {
    text.trim().replace('\n', " ")
}

// Resolves a link from the seed page against the seed URL
//
// Rules:
//   - A link containing "://" is already absolute and is used as-is
//   - Otherwise one trailing '/' is removed from the seed, one leading '/'
//     from the link, and the two are joined with '/'
//
// Examples:
//   seed = "https://example.com/blog/", link = "post-1"
//     -> "https://example.com/blog/post-1"
//   seed = "https://x.test/", link = "/p1"
//     -> "https://x.test/p1"
//   link = "https://other.com/x" -> "https://other.com/x"
//
// This is plain string joining, not browser-style URL resolution:
// "?page=2", "//host/path" and "../up" links all come out wrong.
pub fn resolve_link(seed_url: &str, link: &str) -> String {
    if link.contains("://") {
        return link.to_string();
    }

    let seed = seed_url.strip_suffix('/').unwrap_or(seed_url);
    let link = link.strip_prefix('/').unwrap_or(link);
    format!("{}/{}", seed, link)
}
