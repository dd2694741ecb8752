//! Title extraction for page templates.

use crate::{error::Error, Result};

/// Returns the text of the first level-1 heading line (`#` then a non-`#`).
pub fn extract_document_title(markdown: &str) -> Result<String> {
    markdown
        .lines()
        .find_map(|line| {
            let rest = line.strip_prefix('#')?;
            match rest.chars().next() {
                Some(c) if c != '#' => Some(rest.trim().to_string()),
                _ => None,
            }
        })
        .ok_or(Error::TitleNotFound)
}
