//! Quote converter - `>` prefixed lines.

use super::text_to_children;
use crate::render::HtmlNode;
use crate::Result;

/// Converter for quote blocks.
pub struct QuoteConverter;

impl QuoteConverter {
    pub fn convert(block: &str) -> Result<HtmlNode> {
        let text = block
            .split('\n')
            .map(|line| match line.strip_prefix('>') {
                Some(rest) => rest.trim_start_matches(' '),
                None => line,
            })
            .collect::<Vec<_>>()
            .join("\n");
        Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
    }
}
