//! Span extractor - finds image and link patterns in inline text.

use regex::Regex;
use std::sync::LazyLock;

static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("image pattern is valid")
});

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("link pattern is valid")
});

/// Returns `(alt, url)` for every `![alt](url)` in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    IMAGE_PATTERN
        .captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Returns `(text, url)` for every `[text](url)` in `text` that is not an image.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    let mut links = Vec::new();
    let mut pos = 0;
    while let Some(caps) = LINK_PATTERN.captures_at(text, pos) {
        let Some(m) = caps.get(0) else { break };
        // `regex` has no lookbehind: a `!`-prefixed match only rejects its own
        // start, scanning resumes one byte later.
        if text[..m.start()].ends_with('!') {
            pos = m.start() + 1;
            continue;
        }
        links.push((caps[1].to_string(), caps[2].to_string()));
        pos = m.end();
    }
    links
}
